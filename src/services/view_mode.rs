//! Text/rendered view toggling for Surflog.
//!
//! The same URL can be shown either as the usual rendered page or as the
//! widget's plain-text source view (`view-source:`). Toggling produces a
//! `NavigationRequest` for the other presentation of the current URL.

use crate::types::navigation::{NavigationRequest, ViewMode};

/// URL prefix the widget uses for its plain-text source presentation.
pub const VIEW_SOURCE_PREFIX: &str = "view-source:";

/// Classifies a URL by the view mode it will be presented in.
pub fn classify(url: &str) -> ViewMode {
    if url.starts_with(VIEW_SOURCE_PREFIX) {
        ViewMode::Text
    } else {
        ViewMode::Rendered
    }
}

/// Returns the navigation that shows `url` in the opposite view mode.
pub fn toggle(url: &str) -> NavigationRequest {
    match classify(url) {
        ViewMode::Rendered => NavigationRequest {
            url: format!("{}{}", VIEW_SOURCE_PREFIX, url),
            mode: ViewMode::Text,
        },
        ViewMode::Text => NavigationRequest {
            url: url[VIEW_SOURCE_PREFIX.len()..].to_string(),
            mode: ViewMode::Rendered,
        },
    }
}
