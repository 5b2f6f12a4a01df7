use chrono::{DateTime, NaiveDate, Utc};
use leavedesk_domain::{LeaveDraft, LeaveRecord, LeaveStatus, LeaveType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::user::User;

#[derive(Debug, Clone)]
pub struct LeaveRequest {
    pub id: String,
    pub user_id: String,
    pub leave_type: LeaveType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub decided_by: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeavePayload {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    #[validate(length(min = 1, max = 1000, message = "Reason is required"))]
    pub reason: String,
}

impl From<CreateLeavePayload> for LeaveDraft {
    fn from(payload: CreateLeavePayload) -> Self {
        LeaveDraft {
            from_date: payload.from_date,
            to_date: payload.to_date,
            leave_type: payload.leave_type,
            reason: payload.reason,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusPayload {
    pub status: LeaveStatus,
}

impl LeaveRequest {
    pub fn new(user_id: String, draft: LeaveDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            leave_type: draft.leave_type,
            from_date: draft.from_date,
            to_date: draft.to_date,
            reason: draft.reason.trim().to_string(),
            status: LeaveStatus::Pending,
            decided_by: None,
            decided_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_status(&mut self, status: LeaveStatus, decided_by: &str) {
        let now = Utc::now();
        self.status = status;
        if status == LeaveStatus::Pending {
            self.decided_by = None;
            self.decided_at = None;
        } else {
            self.decided_by = Some(decided_by.to_string());
            self.decided_at = Some(now);
        }
        self.updated_at = now;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, LeaveStatus::Pending)
    }

    /// Builds the wire representation, attaching the owner's display fields when known.
    pub fn to_record(&self, owner: Option<&User>) -> LeaveRecord {
        LeaveRecord {
            id: self.id.clone(),
            owner_id: self.user_id.clone(),
            owner_name: owner.map(|user| user.name.clone()),
            owner_email: owner.map(|user| user.email.clone()),
            from_date: self.from_date,
            to_date: self.to_date,
            leave_type: self.leave_type,
            reason: self.reason.clone(),
            status: self.status,
            created_at: self.created_at,
        }
    }
}
