//! Repository traits for users and leave requests.
//!
//! Handlers depend on these traits only; the service wires the in-memory
//! implementations in `main`, tests may substitute mocks.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{leave_request::LeaveRequest, user::User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Find a user by email, ignoring case
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Find all users
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Create a new user; fails with `Conflict` when the email is taken
    async fn create(&self, user: User) -> Result<User, AppError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaveRequestRepositoryTrait: Send + Sync {
    /// Find all leave requests, newest first
    async fn find_all(&self) -> Result<Vec<LeaveRequest>, AppError>;

    /// Find a leave request by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<LeaveRequest>, AppError>;

    /// Find leave requests by user, newest first
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<LeaveRequest>, AppError>;

    /// Create a new leave request
    async fn create(&self, item: LeaveRequest) -> Result<LeaveRequest, AppError>;

    /// Update an existing leave request
    async fn update(&self, item: LeaveRequest) -> Result<LeaveRequest, AppError>;

    /// Delete a leave request by ID
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
