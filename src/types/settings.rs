use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::platform;

/// Top-level settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserSettings {
    pub history: HistoryConfig,
    pub search: SearchSettings,
    pub shortcuts: HashMap<String, String>,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            search: SearchSettings::default(),
            shortcuts: Self::default_shortcuts(),
        }
    }
}

impl BrowserSettings {
    /// Returns the default keyboard shortcuts for the convenience commands.
    pub fn default_shortcuts() -> HashMap<String, String> {
        let mut shortcuts = HashMap::new();
        shortcuts.insert("find_forward".to_string(), "Ctrl+S".to_string());
        shortcuts.insert("find_backward".to_string(), "Ctrl+R".to_string());
        shortcuts.insert("toggle_view".to_string(), "Ctrl+Shift+U".to_string());
        shortcuts.insert("launch_search".to_string(), "Ctrl+K".to_string());
        shortcuts.insert("show_history".to_string(), "Ctrl+H".to_string());
        shortcuts
    }
}

/// History log configuration. Passed to the log at construction and treated
/// as immutable for the lifetime of the log instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryConfig {
    /// Where the log file is stored.
    pub file_path: String,
    /// Literal first line of the log file.
    pub header_line: String,
    /// Literal sentinel row marking a browsing-session boundary.
    pub separator_line: String,
    /// Entries whose day equals `today - retention_days` (and everything
    /// below them) are pruned at each new-session event.
    pub retention_days: u32,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            file_path: platform::get_data_dir()
                .join("history.csv")
                .to_string_lossy()
                .to_string(),
            header_line: "day,time,title,url".to_string(),
            separator_line: "__________,__________,__________,__________".to_string(),
            retention_days: 30,
        }
    }
}

/// Web-search launcher settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSettings {
    /// Hostname used to build search-query URLs.
    pub default_search_engine: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_search_engine: "www.google.com".to_string(),
        }
    }
}
