use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A finished page load, as reported by the browser widget.
#[derive(Debug, Clone)]
pub struct PageLoad {
    pub title: String,
    pub url: String,
    pub at: DateTime<Local>,
}

/// Direction of an in-page text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindDirection {
    Forward,
    Backward,
}

/// One in-page search request for the host widget's native find function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    pub query: String,
    pub direction: FindDirection,
}

/// How a URL is presented by the widget: the usual rendered page, or the
/// plain-text source view of the same URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Rendered,
    Text,
}

/// A navigation the presentation layer should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub url: String,
    pub mode: ViewMode,
}
