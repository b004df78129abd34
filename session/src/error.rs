//! Error types shared by the session core and its I/O adapters.
//!
//! ERROR HANDLING
//! ==============
//! Backend failures are normalized into one [`ApiError`] shape keyed on the
//! HTTP status, so the store only has to ask "was the credential rejected?".

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a call to the HRMS REST backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The response arrived but its body was not the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error, substituting a generic message when the body had none.
    #[must_use]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| default_status_message(status));
        Self::Status { status, message }
    }

    /// Whether the backend rejected the credential (expired or invalid token).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// HTTP status when the backend responded at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

fn default_status_message(status: u16) -> String {
    match status {
        400 => "The request was invalid.".to_owned(),
        401 => "Your session has expired. Please sign in again.".to_owned(),
        403 => "You are not allowed to do that.".to_owned(),
        404 => "The requested resource was not found.".to_owned(),
        500..=599 => format!("Server error ({status}). Please try again."),
        _ => format!("Request failed ({status})."),
    }
}

/// Failure reading or writing durable storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is available (private mode, SSR, quota disabled).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend refused the operation.
    #[error("storage {op} failed for {key}: {reason}")]
    Backend { op: &'static str, key: String, reason: String },
}

/// Structural problem in a route table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route path must start with '/': {0}")]
    NotAbsolute(String),
    #[error("wildcard must be the last segment: {0}")]
    MisplacedWildcard(String),
    #[error("unnamed path parameter: {0}")]
    EmptyParam(String),
    #[error("duplicate route: {0}")]
    Duplicate(String),
    #[error("protected route allows no roles: {0}")]
    EmptyAllowList(String),
}
