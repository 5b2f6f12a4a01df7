use leavedesk_domain::{LeaveStatus, QuotaViolation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Employee,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: LeaveStatus,
}

/// Bearer token presented on authenticated calls.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Error body returned by the leave service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("Please log in to continue")]
    MissingCredential,
    #[error("Your session has expired. Please log in again")]
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaveError {
    #[error("{0}")]
    Unauthorized(AuthFailure),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Network(String),
    #[error(transparent)]
    QuotaExceeded(#[from] QuotaViolation),
}

impl LeaveError {
    pub fn network(msg: impl Into<String>) -> Self {
        LeaveError::Network(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        LeaveError::Validation(msg.into())
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, LeaveError::Unauthorized(_))
    }

    /// Classifies a non-success response by HTTP status.
    pub fn from_status(status: u16, body: Option<ApiError>) -> Self {
        let message = |fallback: &str| {
            body.as_ref()
                .map(|b| b.error.clone())
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };
        match status {
            401 => LeaveError::Unauthorized(AuthFailure::Rejected),
            403 => LeaveError::Forbidden(message("You do not have access to this page")),
            404 => LeaveError::NotFound(message("Leave request not found")),
            400 | 409 | 422 => LeaveError::Validation(message("The request was rejected")),
            _ => LeaveError::Network(format!("Request failed with status {}", status)),
        }
    }
}
