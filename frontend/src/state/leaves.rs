//! Client-side record set for the signed-in actor and the operations that
//! change it.
//!
//! Every mutation is followed by a full refetch; records are never patched in
//! place. List responses carry a [`ListTicket`] so that a slow, older response
//! cannot overwrite a newer one.

use async_trait::async_trait;
use leavedesk_domain::{LeaveDraft, LeaveRecord, LeaveStatus};

use crate::api::{AuthFailure, Credential, LeaveError};

/// Admin listing filters. Blank values mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminFilter {
    pub employee: Option<String>,
    pub status: Option<LeaveStatus>,
    pub search: Option<String>,
}

impl AdminFilter {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(employee) = non_blank(self.employee.as_deref()) {
            pairs.push(("employee", employee.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        if let Some(search) = non_blank(self.search.as_deref()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListScope {
    /// The caller's own records.
    Own,
    /// Every employee's records (admin only).
    All(AdminFilter),
}

/// Remote operations the store depends on.
#[async_trait(?Send)]
pub trait LeaveService {
    async fn list_leaves(
        &self,
        credential: &Credential,
        scope: &ListScope,
    ) -> Result<Vec<LeaveRecord>, LeaveError>;

    async fn create_leave(
        &self,
        credential: &Credential,
        draft: &LeaveDraft,
    ) -> Result<LeaveRecord, LeaveError>;

    async fn cancel_leave(&self, credential: &Credential, id: &str) -> Result<(), LeaveError>;

    async fn set_leave_status(
        &self,
        credential: &Credential,
        id: &str,
        status: LeaveStatus,
    ) -> Result<LeaveRecord, LeaveError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ListTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct LeaveState {
    records: Vec<LeaveRecord>,
    status: OperationStatus,
    error: Option<LeaveError>,
    issued: u64,
    applied: u64,
}

impl LeaveState {
    pub fn records(&self) -> &[LeaveRecord] {
        &self.records
    }

    pub fn status(&self) -> OperationStatus {
        self.status
    }

    pub fn error(&self) -> Option<&LeaveError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == OperationStatus::Loading
    }

    pub fn find(&self, id: &str) -> Option<&LeaveRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Reserves the next list sequence number.
    pub fn begin_list(&mut self) -> ListTicket {
        self.issued += 1;
        ListTicket(self.issued)
    }

    /// Replaces the record set unless a newer list has already been applied.
    pub fn apply_list(&mut self, ticket: ListTicket, records: Vec<LeaveRecord>) -> bool {
        if ticket.0 <= self.applied {
            log::debug!(
                "discarding stale list response #{} (applied #{})",
                ticket.0,
                self.applied
            );
            return false;
        }
        self.applied = ticket.0;
        self.records = records;
        true
    }

    fn start(&mut self) {
        self.status = OperationStatus::Loading;
        self.error = None;
    }

    fn succeed(&mut self) {
        self.status = OperationStatus::Succeeded;
        self.error = None;
    }

    fn fail(&mut self, error: LeaveError) -> LeaveError {
        self.status = OperationStatus::Failed;
        self.error = Some(error.clone());
        error
    }

    fn remove(&mut self, id: &str) {
        self.records.retain(|record| record.id != id);
    }
}

pub struct LeaveStore<S> {
    service: S,
    state: LeaveState,
}

impl<S: LeaveService> LeaveStore<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: LeaveState::default(),
        }
    }

    pub fn state(&self) -> &LeaveState {
        &self.state
    }

    pub fn records(&self) -> &[LeaveRecord] {
        self.state.records()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub async fn list(
        &mut self,
        credential: Option<&Credential>,
        scope: &ListScope,
    ) -> Result<(), LeaveError> {
        let credential = self.require(credential)?;
        self.state.start();
        self.refetch(credential, scope).await
    }

    pub async fn create(
        &mut self,
        credential: Option<&Credential>,
        draft: &LeaveDraft,
        scope: &ListScope,
    ) -> Result<LeaveRecord, LeaveError> {
        let credential = self.require(credential)?;
        self.state.start();
        let created = match self.service.create_leave(credential, draft).await {
            Ok(record) => record,
            Err(err) => return Err(self.state.fail(err)),
        };
        log::debug!("created leave {}", created.id);
        self.refetch(credential, scope).await?;
        Ok(created)
    }

    pub async fn cancel(
        &mut self,
        credential: Option<&Credential>,
        id: &str,
        scope: &ListScope,
    ) -> Result<(), LeaveError> {
        let credential = self.require(credential)?;
        self.state.start();
        if let Err(err) = self.service.cancel_leave(credential, id).await {
            return Err(self.state.fail(err));
        }
        self.state.remove(id);
        self.refetch(credential, scope).await
    }

    pub async fn set_status(
        &mut self,
        credential: Option<&Credential>,
        id: &str,
        status: LeaveStatus,
        scope: &ListScope,
    ) -> Result<LeaveRecord, LeaveError> {
        let credential = self.require(credential)?;
        self.state.start();
        let updated = match self.service.set_leave_status(credential, id, status).await {
            Ok(record) => record,
            Err(err) => return Err(self.state.fail(err)),
        };
        self.refetch(credential, scope).await?;
        Ok(updated)
    }

    fn require<'c>(
        &mut self,
        credential: Option<&'c Credential>,
    ) -> Result<&'c Credential, LeaveError> {
        credential.ok_or_else(|| {
            self.state
                .fail(LeaveError::Unauthorized(AuthFailure::MissingCredential))
        })
    }

    async fn refetch(
        &mut self,
        credential: &Credential,
        scope: &ListScope,
    ) -> Result<(), LeaveError> {
        let ticket = self.state.begin_list();
        match self.service.list_leaves(credential, scope).await {
            Ok(records) => {
                self.state.apply_list(ticket, records);
                self.state.succeed();
                Ok(())
            }
            Err(err) => Err(self.state.fail(err)),
        }
    }
}
