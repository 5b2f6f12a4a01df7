use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{
        InMemoryLeaveRequestRepository, InMemoryUserRepository, LeaveRequestRepositoryTrait,
        UserRepositoryTrait,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepositoryTrait>,
    pub leaves: Arc<dyn LeaveRequestRepositoryTrait>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepositoryTrait>,
        leaves: Arc<dyn LeaveRequestRepositoryTrait>,
        config: Config,
    ) -> Self {
        Self {
            users,
            leaves,
            config,
        }
    }

    /// State backed by empty in-memory repositories.
    pub fn in_memory(config: Config) -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryLeaveRequestRepository::new()),
            config,
        )
    }
}
