use leavedesk_domain::{LeaveRecord, LeaveStatus};

use crate::{
    api::LeaveError,
    pages::Notification,
    state::{
        leaves::{AdminFilter, LeaveService, LeaveStore, ListScope},
        session::Session,
    },
    utils::storage::CredentialStorage,
};

/// Everyone's leave requests, with filters and status decisions.
pub struct AdminDashboard<S, T> {
    store: LeaveStore<S>,
    session: Session<T>,
    filter: AdminFilter,
    selected: Option<String>,
    notification: Option<Notification>,
}

impl<S: LeaveService, T: CredentialStorage> AdminDashboard<S, T> {
    pub fn new(service: S, session: Session<T>) -> Self {
        Self {
            store: LeaveStore::new(service),
            session,
            filter: AdminFilter::default(),
            selected: None,
            notification: None,
        }
    }

    pub fn records(&self) -> &[LeaveRecord] {
        self.store.records()
    }

    pub fn store(&self) -> &LeaveStore<S> {
        &self.store
    }

    pub fn session(&self) -> &Session<T> {
        &self.session
    }

    pub fn filter(&self) -> &AdminFilter {
        &self.filter
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Distinct owners in the current listing as `(id, display name)`.
    pub fn employees(&self) -> Vec<(String, String)> {
        let mut owners: Vec<(String, String)> = Vec::new();
        for record in self.records() {
            if owners.iter().any(|(id, _)| *id == record.owner_id) {
                continue;
            }
            let name = record
                .owner_name
                .clone()
                .unwrap_or_else(|| record.owner_id.clone());
            owners.push((record.owner_id.clone(), name));
        }
        owners.sort_by(|a, b| a.1.cmp(&b.1));
        owners
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected record and its day count, if it is still listed.
    pub fn selected(&self) -> Option<(&LeaveRecord, u32)> {
        let id = self.selected.as_deref()?;
        self.store
            .state()
            .find(id)
            .map(|record| (record, record.duration_days()))
    }

    pub async fn refresh(&mut self) {
        let credential = self.session.credential();
        let scope = self.scope();
        if let Err(err) = self.store.list(credential.as_ref(), &scope).await {
            self.fail(err);
        }
    }

    pub async fn set_status_filter(&mut self, status: Option<LeaveStatus>) {
        self.filter.status = status;
        self.refresh().await;
    }

    pub async fn set_employee_filter(&mut self, employee: Option<String>) {
        self.filter.employee = employee;
        self.refresh().await;
    }

    pub async fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = Some(search.into());
        self.refresh().await;
    }

    /// Returns whether the status was changed.
    pub async fn change_status(&mut self, id: &str, status: LeaveStatus) -> bool {
        let credential = self.session.credential();
        let scope = self.scope();
        match self
            .store
            .set_status(credential.as_ref(), id, status, &scope)
            .await
        {
            Ok(updated) => {
                self.notification = Some(Notification::Success(format!("Leave {}", updated.status)));
                true
            }
            Err(err) => {
                self.fail(err);
                false
            }
        }
    }

    fn scope(&self) -> ListScope {
        ListScope::All(self.filter.clone())
    }

    fn fail(&mut self, err: LeaveError) {
        self.session.handle_failure(&err);
        self.notification = Some(Notification::error(&err));
    }
}
