//! Session flag derived from the persisted credential token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token itself is written and cleared by the login flow and the backend;
//! this module only reads it. The navigation guard consults [`session_flag`]
//! once per navigation.
//!
//! ERROR HANDLING
//! ==============
//! A store that cannot be read is treated as "no session" so protected routes
//! fail closed to the login page.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, RwLock};

/// `localStorage` key holding the credential token.
pub const TOKEN_KEY: &str = "token";

/// Error returned by [`TokenStore::read_token`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("token store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to the persisted credential token.
pub trait TokenStore: Send + Sync {
    /// Current token value, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Unavailable`] when the backing store cannot be
    /// reached.
    fn read_token(&self) -> Result<Option<String>, SessionError>;
}

/// `true` when a non-empty token is present. Store failures read as `false`.
pub fn session_flag(store: &dyn TokenStore) -> bool {
    match store.read_token() {
        Ok(Some(token)) => !token.trim().is_empty(),
        Ok(None) => false,
        Err(e) => {
            log::warn!("session flag defaulting to false: {e}");
            false
        }
    }
}

/// Browser `localStorage` token store. Unavailable outside hydrate builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn read_token(&self) -> Result<Option<String>, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .ok_or_else(|| SessionError::Unavailable("no window".to_owned()))?
                .local_storage()
                .map_err(|e| SessionError::Unavailable(format!("{e:?}")))?
                .ok_or_else(|| SessionError::Unavailable("localStorage disabled".to_owned()))?;
            storage
                .get_item(TOKEN_KEY)
                .map_err(|e| SessionError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(SessionError::Unavailable("no browser storage in this build".to_owned()))
        }
    }
}

/// In-memory token store used during server rendering and in tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: RwLock::new(Some(token.to_owned())) }
    }

    pub fn set(&self, token: Option<&str>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token.map(str::to_owned);
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn read_token(&self) -> Result<Option<String>, SessionError> {
        self.token
            .read()
            .map(|slot| slot.clone())
            .map_err(|_| SessionError::Unavailable("memory store poisoned".to_owned()))
    }
}

/// Store the app reads the session from in this build.
#[must_use]
pub fn default_store() -> Arc<dyn TokenStore> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(LocalStorageTokenStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryTokenStore::default())
    }
}
