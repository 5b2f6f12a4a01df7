use axum::{
    extract::{Extension, Path, State},
    Json,
};
use leavedesk_domain::{quota, LeaveDraft, LeaveRecord};
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        leave_request::{CreateLeavePayload, LeaveRequest},
        user::User,
    },
    state::AppState,
};

pub async fn list_my_leaves(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<LeaveRecord>>, AppError> {
    Ok(Json(own_records(&state, &user).await?))
}

pub async fn create_leave(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateLeavePayload>,
) -> Result<Json<LeaveRecord>, AppError> {
    payload.validate()?;
    let draft = LeaveDraft::from(payload);
    draft.validate()?;

    let existing = own_records(&state, &user).await?;
    quota::validate(
        &existing,
        &draft,
        draft.year(),
        state.config.annual_leave_cap,
    )?;

    let created = state
        .leaves
        .create(LeaveRequest::new(user.id.clone(), draft))
        .await?;
    tracing::info!(
        user_id = %user.id,
        leave_id = %created.id,
        days = created.to_record(None).duration_days(),
        "leave request created"
    );

    Ok(Json(created.to_record(Some(&user))))
}

pub async fn cancel_leave(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(leave_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let leave = state
        .leaves
        .find_by_id(&leave_id)
        .await?
        .filter(|leave| leave.user_id == user.id)
        .ok_or_else(|| AppError::NotFound("Leave request not found".into()))?;

    if !leave.is_pending() {
        return Err(AppError::Conflict(
            "Only pending leave requests can be cancelled".into(),
        ));
    }

    state.leaves.delete(&leave.id).await?;
    tracing::info!(user_id = %user.id, leave_id = %leave.id, "leave request cancelled");

    Ok(Json(json!({ "message": "Leave request cancelled" })))
}

async fn own_records(state: &AppState, user: &User) -> Result<Vec<LeaveRecord>, AppError> {
    let leaves = state.leaves.find_by_user(&user.id).await?;
    Ok(leaves
        .iter()
        .map(|leave| leave.to_record(Some(user)))
        .collect())
}
