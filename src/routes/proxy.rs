//! Same-origin forwarding of `/api/*` to the HRMS REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Requests under `/api/` are
//! replayed against `HRMS_API_URL` with the original method, path and query
//! and an allow-listed set of headers. Status, content type and body come
//! back as the backend sent them, so the client's status mapping (401 ends
//! the session) sees exactly what the backend decided.
//!
//! ERROR HANDLING
//! ==============
//! Failures produced here answer with a JSON `{"message": ...}` body, the
//! shape the client reads error text from: 502 when the backend cannot be
//! reached, 413 for bodies over [`MAX_BODY_BYTES`].

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::state::AppState;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request headers passed to the backend. Cookies and hop-by-hop headers stay
/// here.
const FORWARDED_REQUEST_HEADERS: &[&str] = &["authorization", "content-type", "accept"];

/// Response headers passed back to the browser.
const FORWARDED_RESPONSE_HEADERS: &[&str] = &["content-type"];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body rejected: {message}")]
    Body { status: StatusCode, message: String },
    #[error("HRMS backend unavailable: {0}")]
    Upstream(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Body { status, .. } => *status,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<BytesRejection> for ProxyError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Body { status: rejection.status(), message: rejection.body_text() }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "message": self.to_string() }))).into_response()
    }
}

/// Backend URL for an incoming path (with query).
pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Caller-supplied request id, or a fresh v4 UUID.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_owned)
}

/// `ANY /api/{*rest}`: replay the request against the backend.
///
/// # Errors
///
/// [`ProxyError::Body`] when the body cannot be read within the limit,
/// [`ProxyError::Upstream`] when the backend cannot be reached.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ProxyError> {
    let body = body?;
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.config.api_url, path_and_query);
    let request_id = request_id(&headers);

    let mut outbound = state.http.request(method.clone(), &url).header(REQUEST_ID_HEADER, &request_id);
    for (name, value) in &headers {
        if FORWARDED_REQUEST_HEADERS.contains(&name.as_str()) {
            outbound = outbound.header(name.clone(), value.clone());
        }
    }
    if !body.is_empty() {
        outbound = outbound.body(body);
    }

    let upstream = outbound.send().await.map_err(|e| {
        tracing::warn!(%method, path = %uri.path(), %request_id, error = %e, "HRMS backend request failed");
        ProxyError::Upstream(e.to_string())
    })?;
    let status = upstream.status();
    let mut response_headers = HeaderMap::new();
    for name in FORWARDED_RESPONSE_HEADERS {
        if let Some(value) = upstream.headers().get(*name) {
            response_headers.insert(*name, value.clone());
        }
    }
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;
    tracing::debug!(%method, path = %uri.path(), %request_id, status = status.as_u16(), "proxied api request");

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response_headers.insert(REQUEST_ID_HEADER, value);
    }
    Ok((status, response_headers, bytes).into_response())
}
