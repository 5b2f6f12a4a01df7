use chrono::{Datelike, NaiveDate};
use leavedesk_domain::{quota, DraftError, LeaveDraft, LeaveRecord, LeaveType, QuotaViolation};
use thiserror::Error;

use crate::{
    api::LeaveError,
    config,
    pages::Notification,
    state::{
        leaves::{LeaveService, LeaveStore, ListScope},
        session::Session,
    },
    utils::storage::CredentialStorage,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("From Date is required")]
    MissingFromDate,
    #[error("To Date is required")]
    MissingToDate,
    #[error("Reason is required")]
    MissingReason,
    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// Raw field values of the apply-for-leave form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveForm {
    pub from_date: String,
    pub to_date: String,
    pub leave_type: LeaveType,
    pub reason: String,
}

impl Default for LeaveForm {
    fn default() -> Self {
        Self {
            from_date: String::new(),
            to_date: String::new(),
            leave_type: LeaveType::Casual,
            reason: String::new(),
        }
    }
}

impl LeaveForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Both dates, when present and parseable.
    pub fn dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((parse_date(&self.from_date)?, parse_date(&self.to_date)?))
    }

    pub fn to_draft(&self) -> Result<LeaveDraft, FormError> {
        let from_date = parse_date(&self.from_date).ok_or(FormError::MissingFromDate)?;
        let to_date = parse_date(&self.to_date).ok_or(FormError::MissingToDate)?;
        if self.reason.trim().is_empty() {
            return Err(FormError::MissingReason);
        }

        let draft = LeaveDraft {
            from_date,
            to_date,
            leave_type: self.leave_type,
            reason: self.reason.trim().to_string(),
        };
        draft.validate()?;
        Ok(draft)
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaSummary {
    pub year: i32,
    pub used: u32,
    pub remaining: u32,
    pub cap: u32,
}

pub struct EmployeeDashboard<S, T> {
    store: LeaveStore<S>,
    session: Session<T>,
    pub form: LeaveForm,
    notification: Option<Notification>,
    annual_cap: u32,
}

impl<S: LeaveService, T: CredentialStorage> EmployeeDashboard<S, T> {
    pub fn new(service: S, session: Session<T>) -> Self {
        Self::with_cap(service, session, config::annual_leave_cap())
    }

    pub fn with_cap(service: S, session: Session<T>, annual_cap: u32) -> Self {
        Self {
            store: LeaveStore::new(service),
            session,
            form: LeaveForm::default(),
            notification: None,
            annual_cap,
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

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn summary(&self, year: i32) -> QuotaSummary {
        let used = quota::yearly_used(self.records(), year);
        QuotaSummary {
            year,
            used,
            remaining: quota::remaining(self.records(), year, self.annual_cap),
            cap: self.annual_cap,
        }
    }

    /// Quota verdict for a draft, charged to the year of its first day.
    pub fn quota_check(&self, draft: &LeaveDraft) -> Result<(), QuotaViolation> {
        quota::validate(self.records(), draft, draft.from_date.year(), self.annual_cap)
    }

    /// Date-range or quota message for the dates currently entered in the form.
    pub fn live_message(&self) -> Option<String> {
        let (from_date, to_date) = self.form.dates()?;
        let candidate = LeaveDraft {
            from_date,
            to_date,
            leave_type: self.form.leave_type,
            reason: self.form.reason.clone(),
        };
        if to_date < from_date {
            return Some(DraftError::InvalidDateRange.to_string());
        }
        self.quota_check(&candidate)
            .err()
            .map(|violation| violation.to_string())
    }

    pub fn can_submit(&self) -> bool {
        !self.store.state().is_loading() && self.live_message().is_none()
    }

    pub async fn refresh(&mut self) {
        let credential = self.session.credential();
        if let Err(err) = self.store.list(credential.as_ref(), &ListScope::Own).await {
            self.fail(err);
        }
    }

    /// Returns whether the request was created.
    pub async fn submit(&mut self) -> bool {
        let draft = match self.form.to_draft() {
            Ok(draft) => draft,
            Err(err) => {
                self.notification = Some(Notification::Error(err.to_string()));
                return false;
            }
        };
        if let Err(violation) = self.quota_check(&draft) {
            self.fail(LeaveError::QuotaExceeded(violation));
            return false;
        }

        let credential = self.session.credential();
        match self
            .store
            .create(credential.as_ref(), &draft, &ListScope::Own)
            .await
        {
            Ok(_) => {
                self.notification = Some(Notification::Success("Leave applied successfully".into()));
                self.form.reset();
                true
            }
            Err(err) => {
                self.fail(err);
                false
            }
        }
    }

    /// Returns whether the request was cancelled.
    pub async fn cancel(&mut self, id: &str) -> bool {
        if let Some(record) = self.store.state().find(id) {
            if !record.is_cancellable() {
                self.notification = Some(Notification::Error(
                    "Only pending leave requests can be cancelled".into(),
                ));
                return false;
            }
        }

        let credential = self.session.credential();
        match self
            .store
            .cancel(credential.as_ref(), id, &ListScope::Own)
            .await
        {
            Ok(()) => {
                self.notification = Some(Notification::Success("Leave cancelled".into()));
                true
            }
            Err(err) => {
                self.fail(err);
                false
            }
        }
    }

    fn fail(&mut self, err: LeaveError) {
        self.session.handle_failure(&err);
        self.notification = Some(Notification::error(&err));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::{
        api::AuthFailure,
        state::leaves::test_support::{record, FakeLeaveService},
        utils::storage::MemoryStorage,
    };
    use leavedesk_domain::LeaveStatus;

    fn dashboard(
        records: Vec<LeaveRecord>,
    ) -> (EmployeeDashboard<FakeLeaveService, MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::with_token("jwt");
        let dashboard = EmployeeDashboard::with_cap(
            FakeLeaveService::with_records(records),
            Session::new(storage.clone()),
            20,
        );
        (dashboard, storage)
    }

    fn fill(form: &mut LeaveForm, from: &str, to: &str, reason: &str) {
        form.from_date = from.into();
        form.to_date = to.into();
        form.reason = reason.into();
    }

    #[test]
    fn form_reports_missing_fields_in_order() {
        let mut form = LeaveForm::default();
        assert_eq!(form.to_draft().unwrap_err().to_string(), "From Date is required");

        form.from_date = "2025-07-15".into();
        assert_eq!(form.to_draft().unwrap_err().to_string(), "To Date is required");

        form.to_date = "2025-07-16".into();
        form.reason = "   ".into();
        assert_eq!(form.to_draft().unwrap_err().to_string(), "Reason is required");
    }

    #[test]
    fn form_rejects_reversed_range() {
        let mut form = LeaveForm::default();
        fill(&mut form, "2025-07-20", "2025-07-15", "Trip");
        assert_eq!(
            form.to_draft().unwrap_err(),
            FormError::Draft(DraftError::InvalidDateRange)
        );
    }

    #[tokio::test]
    async fn live_message_reports_remaining_quota() {
        let (mut dashboard, _) = dashboard(vec![record(
            "a1",
            (2025, 1, 6),
            (2025, 1, 23),
            LeaveStatus::Approved,
        )]);
        dashboard.refresh().await;
        assert_eq!(dashboard.summary(2025).remaining, 2);

        fill(&mut dashboard.form, "2025-07-01", "", "Trip");
        assert_eq!(dashboard.live_message(), None);

        dashboard.form.to_date = "2025-07-03".into();
        assert_eq!(
            dashboard.live_message().as_deref(),
            Some("Only 2 days remaining for 2025")
        );
        assert!(!dashboard.can_submit());

        dashboard.form.to_date = "2025-07-02".into();
        assert_eq!(dashboard.live_message(), None);
        assert!(dashboard.can_submit());
    }

    #[test]
    fn live_message_flags_reversed_range_and_blocks_submit() {
        let (mut dashboard, _) = dashboard(Vec::new());
        fill(&mut dashboard.form, "2025-07-20", "2025-07-15", "Trip");

        assert_eq!(
            dashboard.live_message().as_deref(),
            Some("To Date must be on or after From Date")
        );
        assert!(!dashboard.can_submit());
    }

    #[tokio::test]
    async fn quota_is_charged_to_the_start_year() {
        let (mut dashboard, _) = dashboard(vec![record(
            "a1",
            (2025, 2, 3),
            (2025, 2, 21),
            LeaveStatus::Approved,
        )]);
        dashboard.refresh().await;

        fill(&mut dashboard.form, "2026-01-05", "2026-01-09", "New year trip");
        assert_eq!(dashboard.live_message(), None);

        fill(&mut dashboard.form, "2025-12-29", "2026-01-02", "Holidays");
        assert_eq!(
            dashboard.live_message().as_deref(),
            Some("Only 1 days remaining for 2025")
        );
    }

    #[tokio::test]
    async fn submit_creates_pending_leave_and_resets_form() {
        let (mut dashboard, _) = dashboard(Vec::new());
        fill(&mut dashboard.form, "2025-07-15", "2025-07-17", "Summer vacation");

        assert!(dashboard.submit().await);

        assert_eq!(
            dashboard.notification(),
            Some(&Notification::Success("Leave applied successfully".into()))
        );
        assert_eq!(dashboard.form, LeaveForm::default());
        assert_eq!(dashboard.records().len(), 1);
        assert_eq!(dashboard.records()[0].status, LeaveStatus::Pending);
    }

    #[tokio::test]
    async fn submit_over_quota_never_reaches_the_service() {
        let (mut dashboard, _) = dashboard(Vec::new());
        fill(&mut dashboard.form, "2025-08-01", "2025-08-21", "Sabbatical");

        assert!(!dashboard.submit().await);

        assert_eq!(dashboard.store().service().calls.get(), 0);
        assert_eq!(
            dashboard.notification(),
            Some(&Notification::Error("Leave duration cannot exceed 20 days".into()))
        );
    }

    #[tokio::test]
    async fn missing_credential_forces_logout_once() {
        let storage = MemoryStorage::new();
        let mut dashboard = EmployeeDashboard::with_cap(
            FakeLeaveService::default(),
            Session::new(storage.clone()),
            20,
        );

        dashboard.refresh().await;

        assert_eq!(dashboard.store().service().calls.get(), 0);
        assert_eq!(storage.clear_count(), 1);
        assert_eq!(
            dashboard.store().state().error(),
            Some(&LeaveError::Unauthorized(AuthFailure::MissingCredential))
        );
        assert!(dashboard.notification().is_some_and(Notification::is_error));
    }

    #[tokio::test]
    async fn rejected_token_logs_out() {
        let (mut dashboard, storage) = dashboard(Vec::new());
        dashboard
            .store()
            .service()
            .fail_next(LeaveError::Unauthorized(AuthFailure::Rejected));

        dashboard.refresh().await;

        assert!(!dashboard.session().is_authenticated());
        assert_eq!(storage.clear_count(), 1);
    }

    #[tokio::test]
    async fn cancel_refuses_decided_records_locally() {
        let (mut dashboard, _) = dashboard(vec![record(
            "a1",
            (2025, 3, 3),
            (2025, 3, 4),
            LeaveStatus::Approved,
        )]);
        dashboard.refresh().await;
        let calls = dashboard.store().service().calls.get();

        assert!(!dashboard.cancel("a1").await);

        assert_eq!(dashboard.store().service().calls.get(), calls);
        assert_eq!(dashboard.records().len(), 1);
    }

    #[tokio::test]
    async fn cancel_pending_record() {
        let (mut dashboard, _) = dashboard(vec![record(
            "p1",
            (2025, 3, 3),
            (2025, 3, 4),
            LeaveStatus::Pending,
        )]);
        dashboard.refresh().await;

        assert!(dashboard.cancel("p1").await);

        assert!(dashboard.records().is_empty());
        assert_eq!(
            dashboard.notification().map(Notification::message),
            Some("Leave cancelled")
        );
    }
}
