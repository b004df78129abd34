//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route outlet and user-aware components to coordinate login
//! redirects, hydration and identity-dependent rendering. The session itself
//! is a [`SessionStore`] over `localStorage`; this wrapper adds whether it has
//! been read back from storage yet.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{Notice, SessionStorage, SessionStore, User};

use crate::util::storage::BrowserStorage;

/// Authentication state provided as `RwSignal<AuthState>`.
#[derive(Clone, Debug)]
pub struct AuthState<S = BrowserStorage> {
    pub store: SessionStore<S>,
    /// `false` until the persisted session has been loaded in the browser.
    /// The route outlet renders its interstitial until then.
    pub restored: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::unrestored(BrowserStorage)
    }
}

impl<S: SessionStorage + Clone> AuthState<S> {
    #[must_use]
    pub fn unrestored(storage: S) -> Self {
        Self { store: SessionStore::new(storage), restored: false }
    }

    /// Replace the store with one loaded from storage.
    pub fn restore(&mut self) {
        self.store = SessionStore::restore(self.store.storage().clone());
        self.restored = true;
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.store.state().current_user()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.state().is_authenticated()
    }

    /// Whether a login/hydration outcome is waiting to be shown.
    #[must_use]
    pub fn has_outcome(&self) -> bool {
        Notice::from_state(self.store.state()).is_some()
    }
}
