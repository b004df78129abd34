//! User-visible feedback for session outcomes.
//!
//! The sink is fire-and-forget: the store hands over a [`Notice`] and resets
//! its outcome flags so a re-render cannot show the same toast twice.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::state::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    /// Notice for the unconsumed outcome in `state`, if any.
    #[must_use]
    pub fn from_state(state: &SessionState) -> Option<Self> {
        if state.is_error() {
            let message = state.message().unwrap_or("Something went wrong.");
            return Some(Self::error(message));
        }
        if state.is_success() {
            return state.message().map(Self::success);
        }
        None
    }
}

/// Destination for notices, typically a toast stack.
pub trait NotificationSink {
    fn notify(&self, notice: Notice);
}
