//! Request and response bodies for the auth endpoints.

use serde::{Deserialize, Serialize};
use session::User;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /api/auth/login` success body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// `GET /api/auth/me` success body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

/// Error body shape the backend uses for failures.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
