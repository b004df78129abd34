//! Authenticated user record as returned by the HRMS backend.
//!
//! DESIGN
//! ======
//! `role_id` stays a raw integer on the wire type so an unexpected value from
//! the backend does not fail hydration; [`User::role`] maps it onto the closed
//! [`Role`] set and unknown ids simply match no allow-list.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Closed set of roles known to the frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Hr,
    Employee,
}

impl Role {
    /// Map a backend `role_id` onto a role.
    #[must_use]
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::Admin),
            2 => Some(Self::Hr),
            3 => Some(Self::Employee),
            _ => None,
        }
    }

    /// Backend `role_id` for this role.
    #[must_use]
    pub fn id(self) -> i64 {
        match self {
            Self::Admin => 1,
            Self::Hr => 2,
            Self::Employee => 3,
        }
    }

    /// Landing page after login when no return target was preserved.
    #[must_use]
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::Hr => "/hr/dashboard",
            Self::Employee => "/employee/dashboard",
        }
    }

    /// Human-readable label for headers and badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Hr => "HR",
            Self::Employee => "Employee",
        }
    }
}

/// Employee onboarding progress. Transitions happen server-side only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnboardingStatus {
    Pending,
    InProgress,
    PendingApproval,
    Completed,
}

/// The logged-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    pub role_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onboarding_status: Option<OnboardingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Remaining profile fields, carried through storage untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        Role::from_id(self.role_id)
    }

    /// Full name when known, otherwise the email address.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.to_owned(),
            (None, None) => self.email.clone(),
        }
    }
}
