//! REST API helpers for communicating with the HRMS backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a [`session::ApiError`]. A non-2xx response is keyed
//! on its HTTP status only; the session store decides from that whether the
//! credential was rejected.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use session::{ApiError, User};

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, LoginResponse, MeResponse};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const ME_ENDPOINT: &str = "/api/auth/me";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a failed response onto [`ApiError`], taking the message from a JSON
/// `{"message": ...}` body when there is one.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message);
    ApiError::from_status(status, message)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Exchange credentials for a bearer token and user via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend status (401 for bad credentials) or a transport error.
pub async fn login(email: &str, password: &str) -> Result<(String, User), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&LoginRequest { email, password })
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: LoginResponse = read_json(resp).await?;
        Ok((body.token, body.user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(unavailable())
    }
}

/// Fetch the user behind `token` from `GET /api/auth/me`.
///
/// # Errors
///
/// Returns a 401 status error when the token is rejected, or a transport error.
pub async fn fetch_current_user(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: MeResponse = read_json(resp).await?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(unavailable())
    }
}

/// Tell the backend to revoke `token` via `POST /api/auth/logout`. Best effort:
/// the local session is cleared regardless.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let sent = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .header("Authorization", &bearer(token))
            .send()
            .await;
        if let Err(e) = sent {
            log::warn!("logout request failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}
