use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::leave::LeaveStatus;

/// Which status changes an administrator may make.
///
/// `Lenient` lets any status be set from any other, including moving a decided
/// request back to `Pending`. `Strict` treats `Approved` and `Rejected` as
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    #[default]
    Lenient,
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot change leave request status from {from} to {to}")]
pub struct TransitionError {
    pub from: LeaveStatus,
    pub to: LeaveStatus,
}

impl TransitionPolicy {
    pub fn check(&self, from: LeaveStatus, to: LeaveStatus) -> Result<(), TransitionError> {
        if self.allows(from, to) {
            Ok(())
        } else {
            Err(TransitionError { from, to })
        }
    }

    pub fn allows(&self, from: LeaveStatus, to: LeaveStatus) -> bool {
        match self {
            TransitionPolicy::Lenient => true,
            // Re-setting the current status is a no-op and always allowed.
            TransitionPolicy::Strict => from == to || from == LeaveStatus::Pending,
        }
    }
}

impl fmt::Display for TransitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionPolicy::Lenient => f.write_str("lenient"),
            TransitionPolicy::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(TransitionPolicy::Lenient),
            "strict" => Ok(TransitionPolicy::Strict),
            other => Err(format!("unknown transition policy `{}`", other)),
        }
    }
}
