//! Unit tests for the web-search launcher.

use surflog::services::search_launcher::{percent_encode, SearchLauncher};
use surflog::types::navigation::ViewMode;

#[test]
fn test_builds_query_url_for_configured_engine() {
    let launcher = SearchLauncher::new("www.google.com");
    let url = launcher.build_query_url("rust").unwrap();
    assert_eq!(url, "https://www.google.com/search?q=rust");
}

#[test]
fn test_query_is_percent_encoded() {
    let launcher = SearchLauncher::new("www.google.com");
    let url = launcher.build_query_url("borrow checker & lifetimes?").unwrap();
    assert_eq!(
        url,
        "https://www.google.com/search?q=borrow+checker+%26+lifetimes%3F"
    );
}

#[test]
fn test_query_is_trimmed_before_use() {
    let launcher = SearchLauncher::new("www.google.com");
    let url = launcher.build_query_url("  rust  ").unwrap();
    assert_eq!(url, "https://www.google.com/search?q=rust");
}

#[test]
fn test_empty_query_is_rejected() {
    let launcher = SearchLauncher::new("www.google.com");
    assert!(launcher.build_query_url("").is_err());
    assert!(launcher.build_query_url("   ").is_err());
}

#[test]
fn test_missing_engine_is_rejected() {
    let launcher = SearchLauncher::new("");
    assert!(launcher.build_query_url("rust").is_err());
}

#[test]
fn test_launch_targets_the_rendered_view() {
    let launcher = SearchLauncher::new("www.google.com");
    let nav = launcher.launch("rust").unwrap();
    assert_eq!(nav.mode, ViewMode::Rendered);
    assert!(nav.url.starts_with("https://www.google.com/search?q="));
}

#[test]
fn test_percent_encode_passes_unreserved_characters() {
    assert_eq!(percent_encode("AZaz09-_.~"), "AZaz09-_.~");
    assert_eq!(percent_encode("a b"), "a+b");
    assert_eq!(percent_encode("100%"), "100%25");
    assert_eq!(percent_encode("caf\u{e9}"), "caf%C3%A9");
}
