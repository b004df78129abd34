//! Toast queue for transient user feedback.
//!
//! DESIGN
//! ======
//! The queue is bounded; when full, the oldest toast is dropped so a burst of
//! failures cannot bury the screen.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use session::{Notice, NoticeLevel};

/// Upper bound on simultaneously visible toasts.
pub const MAX_TOASTS: usize = 5;

/// How long a toast stays up before auto-dismissal, in milliseconds.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

impl Toast {
    /// CSS modifier class for the toast level.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "toast toast--success",
            NoticeLevel::Error => "toast toast--error",
            NoticeLevel::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue `notice`, returning its toast id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.remove(0);
        }
        self.toasts.push(Toast { id, level: notice.level, message: notice.message });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
