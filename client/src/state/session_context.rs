//! Leptos bridge for the session store.
//!
//! DESIGN
//! ======
//! The store stays framework-free; this wrapper owns it behind a mutex and
//! mirrors every change into an `RwSignal<Session>` through a store
//! subscription, so views re-render from the signal while writes go through
//! the store.
//!
//! The rehydrated session is published from an effect rather than at
//! construction. Effects only run in the browser after hydration, so the
//! server render and the first client render both start signed out.

#[cfg(test)]
#[path = "session_context_test.rs"]
mod session_context_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::{Session, SessionError, SessionStore};
use crate::util::storage::{BrowserStorage, KeyValueStorage};

/// Context value provided by the root component.
pub struct SessionContext<S = BrowserStorage> {
    store: Arc<Mutex<SessionStore<S>>>,
    session: RwSignal<Session>,
}

impl<S> Clone for SessionContext<S> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store), session: self.session }
    }
}

impl SessionContext {
    /// Build the store over `localStorage` and publish the restored session
    /// once the page has hydrated.
    pub fn new() -> Self {
        let ctx = Self::with_storage(BrowserStorage);
        let publisher = ctx.clone();
        Effect::new(move || publisher.publish_restored());
        ctx
    }
}

impl<S: KeyValueStorage + Send + 'static> SessionContext<S> {
    /// Wire a store over `storage` to a signal that starts signed out.
    pub fn with_storage(storage: S) -> Self {
        let mut store = SessionStore::new(storage);
        let session = RwSignal::new(Session::default());
        store.subscribe(move |next| session.set(next.clone()));
        Self { store: Arc::new(Mutex::new(store)), session }
    }

    /// Copy the store's current session into the signal.
    pub fn publish_restored(&self) {
        let snapshot = self.lock().snapshot();
        self.session.set(snapshot);
    }

    /// Reactive view of the current session.
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// See [`SessionStore::set_session`].
    ///
    /// # Errors
    ///
    /// Propagates the store's [`SessionError`].
    pub fn set_session(&self, user: User, token: String) -> Result<(), SessionError> {
        self.lock().set_session(user, token)
    }

    /// See [`SessionStore::clear_session`].
    ///
    /// # Errors
    ///
    /// Propagates the store's [`SessionError`].
    pub fn clear_session(&self) -> Result<(), SessionError> {
        self.lock().clear_session()
    }

    fn lock(&self) -> MutexGuard<'_, SessionStore<S>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
