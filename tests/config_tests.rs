use once_cell::sync::Lazy;
use pricescout::config;
use pricescout::presenter::{EmptyQueryPolicy, StalePolicy};
use std::env;
use std::sync::Mutex;

// Tests in this file share the process environment
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(config::sanitize_base_url("http://search.local:5000/"), "http://search.local:5000");
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes_and_whitespace() {
    assert_eq!(config::sanitize_base_url("  http://search.local/api///  "), "http://search.local/api");
}

#[test]
fn test_sanitize_base_url_empty_falls_back() {
    assert_eq!(config::sanitize_base_url(""), "http://localhost:5000");
    assert_eq!(config::sanitize_base_url("   "), "http://localhost:5000");
}

#[test]
fn test_get_search_api_base_url() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    env::set_var("SEARCH_API_BASE_URL", "http://tracker.internal/");
    assert_eq!(config::get_search_api_base_url(), "http://tracker.internal");

    env::remove_var("SEARCH_API_BASE_URL");
    assert_eq!(config::get_search_api_base_url(), "http://localhost:5000");
}

#[test]
fn test_public_base_url_has_no_fallback() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    env::remove_var("PUBLIC_BASE_URL");
    assert_eq!(config::get_public_base_url(), "");

    env::set_var("PUBLIC_BASE_URL", "https://prices.example.com/app/");
    assert_eq!(config::get_public_base_url(), "https://prices.example.com/app");
    env::remove_var("PUBLIC_BASE_URL");
}

#[test]
fn test_parse_empty_query_policy() {
    assert_eq!(config::parse_empty_query_policy("forward").unwrap(), EmptyQueryPolicy::Forward);
    assert_eq!(config::parse_empty_query_policy(" IGNORE ").unwrap(), EmptyQueryPolicy::Ignore);
    assert_eq!(config::parse_empty_query_policy("").unwrap(), EmptyQueryPolicy::Forward);

    let err = config::parse_empty_query_policy("reject").unwrap_err();
    assert!(err.to_string().contains("PRESENTER_EMPTY_QUERY"));
    assert!(err.to_string().contains("reject"));
}

#[test]
fn test_parse_stale_policy() {
    assert_eq!(config::parse_stale_policy("keep").unwrap(), StalePolicy::Keep);
    assert_eq!(config::parse_stale_policy("Discard").unwrap(), StalePolicy::Discard);
    assert!(config::parse_stale_policy("latest").is_err());
}

#[test]
fn test_policies_default_when_unset() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    env::remove_var("PRESENTER_EMPTY_QUERY");
    env::remove_var("PRESENTER_STALE_RESULTS");
    assert_eq!(config::get_empty_query_policy().unwrap(), EmptyQueryPolicy::Forward);
    assert_eq!(config::get_stale_policy().unwrap(), StalePolicy::Keep);

    env::set_var("PRESENTER_STALE_RESULTS", "bogus");
    assert!(config::get_stale_policy().is_err());
    env::remove_var("PRESENTER_STALE_RESULTS");
}
