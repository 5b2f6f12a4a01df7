//! In-memory user repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::user::User;
use crate::repositories::repository::UserRepositoryTrait;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.trim();
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }

    async fn create(&self, user: User) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|existing| existing.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(AppError::Conflict("Email is already registered".into()));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }
}
