use async_trait::async_trait;
use leavedesk_domain::{LeaveDraft, LeaveRecord, LeaveStatus};

use crate::{
    api::{ApiClient, Credential, LeaveError},
    state::leaves::{LeaveService, ListScope},
};

#[async_trait(?Send)]
impl LeaveService for ApiClient {
    async fn list_leaves(
        &self,
        credential: &Credential,
        scope: &ListScope,
    ) -> Result<Vec<LeaveRecord>, LeaveError> {
        match scope {
            ListScope::Own => self.list_my_leaves(credential).await,
            ListScope::All(filter) => self.list_all_leaves(credential, filter).await,
        }
    }

    async fn create_leave(
        &self,
        credential: &Credential,
        draft: &LeaveDraft,
    ) -> Result<LeaveRecord, LeaveError> {
        ApiClient::create_leave(self, credential, draft).await
    }

    async fn cancel_leave(&self, credential: &Credential, id: &str) -> Result<(), LeaveError> {
        ApiClient::cancel_leave(self, credential, id)
            .await
            .map(|_| ())
    }

    async fn set_leave_status(
        &self,
        credential: &Credential,
        id: &str,
        status: LeaveStatus,
    ) -> Result<LeaveRecord, LeaveError> {
        self.update_leave_status(credential, id, status).await
    }
}
