//! The only place the persisted credential is read or written.

use crate::{
    api::{Credential, LeaveError, LoginResponse, Role, UserProfile},
    utils::storage::{CredentialStorage, StorageError},
};

pub struct Session<T> {
    storage: T,
    user: Option<UserProfile>,
}

impl<T: CredentialStorage> Session<T> {
    pub fn new(storage: T) -> Self {
        Self {
            storage,
            user: None,
        }
    }

    pub fn credential(&self) -> Option<Credential> {
        self.storage
            .load()
            .filter(|token| !token.trim().is_empty())
            .map(Credential::new)
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.role == Role::Admin)
    }

    pub fn storage(&self) -> &T {
        &self.storage
    }

    pub fn sign_in(&mut self, response: LoginResponse) -> Result<(), StorageError> {
        self.storage.save(&response.token)?;
        log::debug!("signed in as {}", response.user.id);
        self.user = Some(response.user);
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Err(err) = self.storage.clear() {
            log::warn!("failed to clear stored credential: {}", err);
        }
        self.user = None;
    }

    /// Logs out on an authorization failure. Returns whether it did.
    pub fn handle_failure(&mut self, error: &LeaveError) -> bool {
        if !error.is_unauthorized() {
            return false;
        }
        log::info!("forcing logout: {}", error);
        self.logout();
        true
    }
}
