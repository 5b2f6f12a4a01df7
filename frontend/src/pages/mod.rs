pub mod admin;
pub mod employee;

use crate::api::LeaveError;

/// Transient feedback shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    pub fn error(err: &LeaveError) -> Self {
        Notification::Error(err.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            Notification::Success(msg) | Notification::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }
}
