//! Session snapshot and its read-only selectors.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::user::User;

/// Who is logged in, with what credential, and how the last operation went.
///
/// Only [`crate::store::SessionStore`] mutates this; everything else reads it
/// through the selector methods.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub(crate) token: Option<String>,
    pub(crate) user: Option<User>,
    pub(crate) loading: bool,
    pub(crate) is_success: bool,
    pub(crate) is_error: bool,
    pub(crate) message: Option<String>,
}

impl SessionState {
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Token and user are both present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.is_success
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Message of the last failed operation, if it has not been consumed yet.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        if self.is_error { self.message.as_deref() } else { None }
    }

    /// Message attached to the last outcome, success or failure.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub(crate) fn clear_outcome(&mut self) {
        self.is_success = false;
        self.is_error = false;
        self.message = None;
    }
}
