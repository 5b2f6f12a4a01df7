//! Data models shared across repositories and API handlers.

use serde::Deserialize;

/// Query parameters accepted by `GET /admin/leaves`.
///
/// Empty strings are treated the same as absent parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaveListQuery {
    /// Owner id to restrict the listing to.
    #[serde(default)]
    pub employee: Option<String>,
    /// `Pending`, `Approved` or `Rejected`.
    #[serde(default)]
    pub status: Option<String>,
    /// Case-insensitive text matched against owner name, email, reason and type.
    #[serde(default)]
    pub search: Option<String>,
}

impl LeaveListQuery {
    pub fn employee(&self) -> Option<&str> {
        non_empty(self.employee.as_deref())
    }

    pub fn status(&self) -> Option<&str> {
        non_empty(self.status.as_deref())
    }

    pub fn search(&self) -> Option<&str> {
        non_empty(self.search.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub mod leave_request;
pub mod user;
