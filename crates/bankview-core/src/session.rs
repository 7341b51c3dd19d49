//! Session token capability injected into every store.
//!
//! The token is installed on login, readable while the session lasts,
//! and cleared on logout. Stores only ever read it; nothing in this
//! crate acquires or refreshes tokens.

use std::sync::{PoisonError, RwLock};

/// Shared handle to the current bearer token.
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<String>>,
}

impl Session {
    /// A session with no token installed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session pre-authenticated with `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.install(token);
        session
    }

    /// Installs the token received at login. Blank input clears instead.
    pub fn install(&self, token: impl Into<String>) {
        let token = token.into();
        let trimmed = token.trim();
        let value = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        *self.write() = value;
    }

    /// Drops the token at logout.
    pub fn clear(&self) {
        *self.write() = None;
    }

    /// Current token, if one is installed.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<String>> {
        self.token.write().unwrap_or_else(PoisonError::into_inner)
    }
}
