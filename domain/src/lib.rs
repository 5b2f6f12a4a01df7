//! Leave records, the annual quota rule and the status transition policy.
//!
//! Shared by the client and the leave service so both apply the same rules.

pub mod leave;
pub mod quota;
pub mod status;

pub use leave::{duration_days, DraftError, LeaveDraft, LeaveRecord, LeaveStatus, LeaveType};
pub use quota::{QuotaViolation, DEFAULT_ANNUAL_CAP};
pub use status::{TransitionError, TransitionPolicy};
