//! Annual leave quota.
//!
//! Only approved leave counts against the allowance, and a request is charged
//! to the year its first day falls in. The same [`validate`] is used by the
//! client form (live and at submit) and by the service when it accepts a
//! request.

use thiserror::Error;

use crate::leave::{LeaveDraft, LeaveRecord, LeaveStatus};

/// Approved leave days allowed per employee and calendar year.
pub const DEFAULT_ANNUAL_CAP: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuotaViolation {
    #[error("Leave duration cannot exceed {cap} days")]
    DurationExceedsSingleRequestCap { requested: u32, cap: u32 },
    #[error("Only {remaining} days remaining for {year}")]
    DurationExceedsRemainingQuota { remaining: u32, year: i32 },
}

/// Approved leave days starting in `year`.
pub fn yearly_used(records: &[LeaveRecord], year: i32) -> u32 {
    records
        .iter()
        .filter(|record| record.status == LeaveStatus::Approved && record.year() == year)
        .map(LeaveRecord::duration_days)
        .fold(0u32, u32::saturating_add)
}

pub fn remaining(records: &[LeaveRecord], year: i32, cap: u32) -> u32 {
    cap.saturating_sub(yearly_used(records, year))
}

pub fn validate(
    records: &[LeaveRecord],
    proposed: &LeaveDraft,
    year: i32,
    cap: u32,
) -> Result<(), QuotaViolation> {
    let requested = proposed.duration_days();
    if requested > cap {
        return Err(QuotaViolation::DurationExceedsSingleRequestCap { requested, cap });
    }

    let used = yearly_used(records, year);
    if used.saturating_add(requested) > cap {
        return Err(QuotaViolation::DurationExceedsRemainingQuota {
            remaining: cap.saturating_sub(used),
            year,
        });
    }

    Ok(())
}
