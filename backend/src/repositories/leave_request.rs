//! In-memory leave request repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::leave_request::LeaveRequest;
use crate::repositories::repository::LeaveRequestRepositoryTrait;

#[derive(Debug, Default)]
pub struct InMemoryLeaveRequestRepository {
    items: RwLock<HashMap<String, LeaveRequest>>,
}

impl InMemoryLeaveRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(mut items: Vec<LeaveRequest>) -> Vec<LeaveRequest> {
    items.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    items
}

#[async_trait]
impl LeaveRequestRepositoryTrait for InMemoryLeaveRequestRepository {
    async fn find_all(&self) -> Result<Vec<LeaveRequest>, AppError> {
        let items = self.items.read().await;
        Ok(newest_first(items.values().cloned().collect()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LeaveRequest>, AppError> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<LeaveRequest>, AppError> {
        let items = self.items.read().await;
        Ok(newest_first(
            items
                .values()
                .filter(|item| item.user_id == user_id)
                .cloned()
                .collect(),
        ))
    }

    async fn create(&self, item: LeaveRequest) -> Result<LeaveRequest, AppError> {
        let mut items = self.items.write().await;
        if items.contains_key(&item.id) {
            return Err(AppError::Conflict("Leave request already exists".into()));
        }
        items.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn update(&self, item: LeaveRequest) -> Result<LeaveRequest, AppError> {
        let mut items = self.items.write().await;
        match items.get_mut(&item.id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(item)
            }
            None => Err(AppError::NotFound("Leave request not found".into())),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.items
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Leave request not found".into()))
    }
}
