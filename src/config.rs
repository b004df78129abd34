//! Host configuration parsed from environment variables.
//!
//! Required:
//! - `HRMS_API_URL`: base URL of the HRMS REST backend (`http://` or `https://`)
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `HRMS_API_TIMEOUT_SECS`: per-request timeout, default 30
//! - `HRMS_CONNECT_TIMEOUT_SECS`: connect timeout, default 5

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    Missing { var: &'static str },
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL without a trailing slash.
    pub api_url: String,
    pub port: u16,
    pub timeouts: Timeouts,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `HRMS_API_URL` is missing or a value does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup("HRMS_API_URL").ok_or(ConfigError::Missing { var: "HRMS_API_URL" })?;
        let api_url = parse_api_url(&raw_url)?;
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let timeouts = Timeouts {
            request_secs: parse_or("HRMS_API_TIMEOUT_SECS", lookup("HRMS_API_TIMEOUT_SECS"), DEFAULT_API_TIMEOUT_SECS)?,
            connect_secs: parse_or(
                "HRMS_CONNECT_TIMEOUT_SECS",
                lookup("HRMS_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };
        Ok(Self { api_url, port, timeouts })
    }
}

fn parse_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or_default();
    if host.is_empty() {
        return Err(ConfigError::Invalid { var: "HRMS_API_URL", value: raw.to_owned() });
    }
    Ok(trimmed.to_owned())
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value: value.to_owned() }),
    }
}

