//! Session store: the signed-in user and token, mirrored to local storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once by the root component and injected through context. The
//! login form calls [`SessionStore::set_session`] after a successful token
//! exchange; the logout control calls [`SessionStore::clear_session`].
//!
//! STORAGE LAYOUT
//! ==============
//! `user`:  JSON-encoded [`User`]
//! `token`: raw token string
//!
//! ERROR HANDLING
//! ==============
//! A corrupted `user` entry found while rehydrating is logged and cleared, so
//! the visitor is simply treated as signed out. Storage failures during writes
//! are returned to the caller; the in-memory session still reflects the login
//! and any half-written keys are removed so a reload sees no session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use crate::net::types::User;
use crate::util::storage::{KeyValueStorage, StorageError};

/// Storage key for the JSON-encoded user record.
pub const USER_KEY: &str = "user";
/// Storage key for the raw token.
pub const TOKEN_KEY: &str = "token";

/// Snapshot of the current session.
///
/// `authenticated` is true exactly when both `user` and `token` are present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    fn signed_in(user: User, token: String) -> Self {
        Self { authenticated: true, user: Some(user), token: Some(token) }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session token must not be empty")]
    EmptyToken,
    #[error("failed to encode user record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&Session) + Send + Sync>;

/// Owner of the current [`Session`].
pub struct SessionStore<S> {
    storage: S,
    session: Session,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Create a store over `storage` and rehydrate any persisted session.
    pub fn new(storage: S) -> Self {
        let mut store = Self {
            storage,
            session: Session::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        };
        store.initialize_session();
        store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    /// Owned copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.session.clone()
    }

    /// Record a successful login and persist it.
    ///
    /// # Errors
    ///
    /// [`SessionError::EmptyToken`] and [`SessionError::Encode`] leave the
    /// session untouched. [`SessionError::Storage`] means the session is
    /// active in memory but will not survive a reload.
    pub fn set_session(&mut self, user: User, token: impl Into<String>) -> Result<(), SessionError> {
        let token = token.into();
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        let encoded = serde_json::to_string(&user)?;

        let persisted = self.persist(&encoded, &token);
        self.session = Session::signed_in(user, token);

        if let Err(err) = &persisted {
            leptos::logging::warn!("session not persisted: {err}");
            if let Err(cleanup) = self.remove_persisted() {
                leptos::logging::warn!("failed to discard partial session: {cleanup}");
            }
        }

        self.notify();
        persisted.map_err(SessionError::from)
    }

    /// Sign out: drop the in-memory session and both storage keys.
    ///
    /// Memory is cleared even when storage removal fails.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if a key could not be removed.
    pub fn clear_session(&mut self) -> Result<(), SessionError> {
        self.session = Session::default();
        let removed = self.remove_persisted();
        self.notify();
        removed.map_err(SessionError::from)
    }

    /// Restore the session persisted by a previous page load.
    ///
    /// Both keys must be present and non-empty. A `user` entry that is not a
    /// valid user record is treated as corruption and cleared.
    pub fn initialize_session(&mut self) {
        let (raw_user, token) = match self.read_persisted() {
            Ok(Some(pair)) => pair,
            Ok(None) | Err(StorageError::Unavailable) => return,
            Err(err) => {
                leptos::logging::warn!("failed to read stored session: {err}");
                return;
            }
        };

        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => {
                self.session = Session::signed_in(user, token);
                self.notify();
            }
            Err(err) => {
                leptos::logging::error!("failed to parse stored user data: {err}");
                if let Err(clear) = self.clear_session() {
                    leptos::logging::warn!("failed to clear corrupted session: {clear}");
                }
            }
        }
    }

    /// Register `listener` to receive the session after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.session);
        }
    }

    fn persist(&self, encoded_user: &str, token: &str) -> Result<(), StorageError> {
        self.storage.set_item(USER_KEY, encoded_user)?;
        self.storage.set_item(TOKEN_KEY, token)
    }

    fn remove_persisted(&self) -> Result<(), StorageError> {
        let user = self.storage.remove_item(USER_KEY);
        let token = self.storage.remove_item(TOKEN_KEY);
        user.and(token)
    }

    fn read_persisted(&self) -> Result<Option<(String, String)>, StorageError> {
        let user = self.storage.get_item(USER_KEY)?.filter(|v| !v.is_empty());
        let token = self.storage.get_item(TOKEN_KEY)?.filter(|v| !v.is_empty());
        Ok(user.zip(token))
    }
}

impl<S: fmt::Debug> fmt::Debug for SessionStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("storage", &self.storage)
            .field("session", &self.session)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
