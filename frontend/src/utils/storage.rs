use std::{cell::RefCell, rc::Rc};
use thiserror::Error;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage write failed: {0}")]
    Write(String),
}

/// Durable home of the credential token.
pub trait CredentialStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Process-local storage; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
    clears: Rc<RefCell<u32>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let storage = Self::default();
        *storage.slot.borrow_mut() = Some(token.into());
        storage
    }

    /// Number of times the slot has been cleared.
    pub fn clear_count(&self) -> u32 {
        *self.clears.borrow()
    }
}

impl CredentialStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = None;
        *self.clears.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{CredentialStorage, StorageError, TOKEN_KEY};
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, StorageError> {
        web_sys::window().ok_or_else(|| StorageError::Unavailable("No window object".into()))
    }

    pub fn local_storage() -> Result<Storage, StorageError> {
        window()?
            .local_storage()
            .map_err(|_| StorageError::Unavailable("No localStorage".into()))?
            .ok_or_else(|| StorageError::Unavailable("No localStorage".into()))
    }

    /// `window.localStorage` under [`TOKEN_KEY`].
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserStorage;

    impl CredentialStorage for BrowserStorage {
        fn load(&self) -> Option<String> {
            local_storage().ok()?.get_item(TOKEN_KEY).ok().flatten()
        }

        fn save(&self, token: &str) -> Result<(), StorageError> {
            local_storage()?
                .set_item(TOKEN_KEY, token)
                .map_err(|_| StorageError::Write("Failed to persist token".into()))
        }

        fn clear(&self) -> Result<(), StorageError> {
            local_storage()?
                .remove_item(TOKEN_KEY)
                .map_err(|_| StorageError::Write("Failed to remove token".into()))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{local_storage, BrowserStorage};
