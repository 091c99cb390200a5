//! Web-search launcher for Surflog.
//!
//! Builds a search-query URL from the configured engine hostname so the host
//! widget can navigate to it. Contains no network code.

use crate::types::errors::LaunchError;
use crate::types::navigation::{NavigationRequest, ViewMode};

/// Builds search-query URLs for a fixed engine hostname.
pub struct SearchLauncher {
    engine_host: String,
}

impl SearchLauncher {
    pub fn new(engine_host: &str) -> Self {
        Self {
            engine_host: engine_host.trim().to_string(),
        }
    }

    /// Returns the configured engine hostname.
    pub fn engine_host(&self) -> &str {
        &self.engine_host
    }

    /// Builds the query URL for `query`, percent-encoding it.
    ///
    /// Empty or whitespace-only queries are rejected so the caller can
    /// re-prompt instead of navigating to an empty search.
    pub fn build_query_url(&self, query: &str) -> Result<String, LaunchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LaunchError::EmptyQuery);
        }
        if self.engine_host.is_empty() {
            return Err(LaunchError::NoSearchEngine);
        }
        Ok(format!(
            "https://{}/search?q={}",
            self.engine_host,
            percent_encode(query)
        ))
    }

    /// Builds a full navigation request for the rendered view of the query URL.
    pub fn launch(&self, query: &str) -> Result<NavigationRequest, LaunchError> {
        Ok(NavigationRequest {
            url: self.build_query_url(query)?,
            mode: ViewMode::Rendered,
        })
    }
}

/// Percent-encodes a query string for use in a URL query component.
/// Unreserved characters pass through, spaces become `+`.
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(char::from(b"0123456789ABCDEF"[(b >> 4) as usize]));
                out.push(char::from(b"0123456789ABCDEF"[(b & 0xf) as usize]));
            }
        }
    }
    out
}
