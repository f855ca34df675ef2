//! Durable bearer-token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session flows only touch durable storage at three points (login
//! success, logout, failed bootstrap validation), always through the
//! [`TokenStorage`] trait so they never reach for `localStorage` directly.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

#[cfg(test)]
use std::cell::RefCell;

/// `localStorage` key holding the raw bearer token.
pub const TOKEN_KEY: &str = "access_token";

/// Why a token could not be persisted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage unavailable")]
    Unavailable,
    /// The browser refused the write (quota exceeded, storage disabled).
    #[error("localStorage write refused: {0}")]
    Write(String),
}

/// Synchronous key/value slot for the bearer token.
pub trait TokenStorage {
    /// Persisted token, if any. Blank values read as absent.
    fn load(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] when the token could not be written.
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self);
}

/// Browser `localStorage` under [`TOKEN_KEY`]. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStorage;

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(TOKEN_KEY).ok().flatten()?;
            non_blank(raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(TOKEN_KEY, token)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// In-memory token slot used by the flow tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    slot: RefCell<Option<String>>,
    refuse_writes: bool,
}

#[cfg(test)]
impl MemoryTokenStorage {
    pub fn with_token(token: &str) -> Self {
        Self { slot: RefCell::new(Some(token.to_owned())), refuse_writes: false }
    }

    /// A slot whose writes fail the way a full or disabled `localStorage` does.
    pub fn read_only() -> Self {
        Self { refuse_writes: true, ..Self::default() }
    }
}

#[cfg(test)]
impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone().and_then(non_blank)
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        if self.refuse_writes {
            return Err(StorageError::Write("QuotaExceededError".to_owned()));
        }
        *self.slot.borrow_mut() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn non_blank(raw: String) -> Option<String> {
    if raw.trim().is_empty() { None } else { Some(raw) }
}
