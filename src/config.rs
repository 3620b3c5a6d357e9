use std::env;
use std::path::Path;

use crate::error::ConfigError;
use crate::presenter::{EmptyQueryPolicy, StalePolicy};

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SEARCH_API_BASE_URL: &str = "";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "";
pub const FALLBACK_BASE_URL: &str = "http://localhost:5000";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

/// Base URL of the backend that serves `/search`, `/autocomplete` and
/// `/product/<id>/history`.
pub fn get_search_api_base_url() -> String {
    sanitize_base_url(
        &env::var("SEARCH_API_BASE_URL").unwrap_or_else(|_| DEFAULT_SEARCH_API_BASE_URL.to_string()),
    )
}

/// Prefix for links in rendered pages. Empty means site-relative links.
pub fn get_public_base_url() -> String {
    env::var("PUBLIC_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string())
        .trim()
        .trim_end_matches('/')
        .to_string()
}

pub fn get_empty_query_policy() -> Result<EmptyQueryPolicy, ConfigError> {
    match env::var("PRESENTER_EMPTY_QUERY") {
        Ok(raw) => parse_empty_query_policy(&raw),
        Err(_) => Ok(EmptyQueryPolicy::default()),
    }
}

pub fn get_stale_policy() -> Result<StalePolicy, ConfigError> {
    match env::var("PRESENTER_STALE_RESULTS") {
        Ok(raw) => parse_stale_policy(&raw),
        Err(_) => Ok(StalePolicy::default()),
    }
}

pub fn parse_empty_query_policy(raw: &str) -> Result<EmptyQueryPolicy, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "" | "forward" => Ok(EmptyQueryPolicy::Forward),
        "ignore" => Ok(EmptyQueryPolicy::Ignore),
        other => Err(ConfigError::InvalidValue {
            key: "PRESENTER_EMPTY_QUERY",
            value: other.to_string(),
            expected: "forward|ignore",
        }),
    }
}

pub fn parse_stale_policy(raw: &str) -> Result<StalePolicy, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "" | "keep" => Ok(StalePolicy::Keep),
        "discard" => Ok(StalePolicy::Discard),
        other => Err(ConfigError::InvalidValue {
            key: "PRESENTER_STALE_RESULTS",
            value: other.to_string(),
            expected: "keep|discard",
        }),
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        FALLBACK_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
