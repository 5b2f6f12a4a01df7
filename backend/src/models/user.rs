//! Models that represent users, authentication payloads, and role metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone)]
/// Stored representation of a user account.
pub struct User {
    /// Unique identifier for the user.
    pub id: String,
    /// Display name shown on leave records.
    pub name: String,
    /// Login identifier, unique ignoring case.
    pub email: String,
    /// Argon2 hash of the user's password.
    pub password_hash: String,
    /// Role describing the user's privileges.
    pub role: UserRole,
    /// Creation timestamp for auditing.
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Supported user roles.
pub enum UserRole {
    /// Employee who files and cancels their own leave.
    #[default]
    Employee,
    /// Administrator who reviews everyone's leave.
    Admin,
}

impl UserRole {
    /// Returns the canonical snake_case representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Employee => "employee",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "employee" => Some(UserRole::Employee),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

impl Serialize for UserRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UserRole::parse(&s)
            .ok_or_else(|| serde::de::Error::unknown_variant(&s, &["employee", "admin"]))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
/// Payload for self-service account registration.
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Credentials submitted by a user attempting to authenticate.
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Role the user is signing in as; must match the account.
    #[serde(default)]
    pub role: UserRole,
}

#[derive(Debug, Serialize, Deserialize)]
/// Bearer token returned after a successful login or registration.
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Public-facing representation of a user returned by the API.
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

impl User {
    /// Constructs a new user with a freshly generated identifier.
    pub fn new(name: String, email: String, password_hash: String, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password_hash,
            role,
            created_at: Utc::now(),
        }
    }

    /// Returns `true` when the user holds the `Admin` role.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}
