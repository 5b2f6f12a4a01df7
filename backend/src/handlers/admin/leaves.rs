use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};
use leavedesk_domain::{quota, LeaveDraft, LeaveRecord, LeaveStatus, TransitionPolicy};
use std::collections::HashMap;

use crate::{
    error::AppError,
    models::{
        leave_request::{LeaveRequest, UpdateStatusPayload},
        user::User,
        LeaveListQuery,
    },
    state::AppState,
};

pub async fn list_all_leaves(
    State(state): State<AppState>,
    Query(query): Query<LeaveListQuery>,
) -> Result<Json<Vec<LeaveRecord>>, AppError> {
    let status = query
        .status()
        .map(|raw| {
            raw.parse::<LeaveStatus>()
                .map_err(|_| AppError::BadRequest(format!("Invalid status filter: {}", raw)))
        })
        .transpose()?;

    let owners: HashMap<String, User> = state
        .users
        .find_all()
        .await?
        .into_iter()
        .map(|user| (user.id.clone(), user))
        .collect();

    let records = state
        .leaves
        .find_all()
        .await?
        .iter()
        .map(|leave| leave.to_record(owners.get(&leave.user_id)))
        .filter(|record| matches_filters(record, &query, status))
        .collect();

    Ok(Json(records))
}

pub async fn update_leave_status(
    State(state): State<AppState>,
    Extension(admin): Extension<User>,
    Path(leave_id): Path<String>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<Json<LeaveRecord>, AppError> {
    let mut leave = state
        .leaves
        .find_by_id(&leave_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Leave request not found".into()))?;

    state
        .config
        .status_transitions
        .check(leave.status, payload.status)?;

    if state.config.status_transitions == TransitionPolicy::Strict
        && payload.status == LeaveStatus::Approved
        && leave.status != LeaveStatus::Approved
    {
        ensure_approval_fits_quota(&state, &leave).await?;
    }

    let previous = leave.status;
    leave.set_status(payload.status, &admin.id);
    let leave = state.leaves.update(leave).await?;
    tracing::info!(
        admin_id = %admin.id,
        leave_id = %leave.id,
        from = %previous,
        status = %leave.status,
        "leave status changed"
    );

    let owner = state.users.find_by_id(&leave.user_id).await?;
    Ok(Json(leave.to_record(owner.as_ref())))
}

/// Under the strict policy an approval may not push the owner's approved days
/// for the request's start year past the annual cap.
async fn ensure_approval_fits_quota(state: &AppState, leave: &LeaveRequest) -> Result<(), AppError> {
    let others: Vec<LeaveRecord> = state
        .leaves
        .find_by_user(&leave.user_id)
        .await?
        .iter()
        .filter(|other| other.id != leave.id)
        .map(|other| other.to_record(None))
        .collect();
    let draft = LeaveDraft {
        from_date: leave.from_date,
        to_date: leave.to_date,
        leave_type: leave.leave_type,
        reason: leave.reason.clone(),
    };
    quota::validate(
        &others,
        &draft,
        draft.year(),
        state.config.annual_leave_cap,
    )?;
    Ok(())
}

fn matches_filters(
    record: &LeaveRecord,
    query: &LeaveListQuery,
    status: Option<LeaveStatus>,
) -> bool {
    if let Some(employee) = query.employee() {
        if record.owner_id != employee {
            return false;
        }
    }
    if let Some(status) = status {
        if record.status != status {
            return false;
        }
    }
    match query.search() {
        Some(needle) => {
            let needle = needle.to_lowercase();
            [
                record.owner_name.as_deref(),
                record.owner_email.as_deref(),
                Some(record.reason.as_str()),
                Some(record.leave_type.as_str()),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
        }
        None => true,
    }
}
