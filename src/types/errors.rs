use std::fmt;

// === HistoryError ===

/// Errors related to history log operations.
#[derive(Debug)]
pub enum HistoryError {
    /// Reading the log file failed (permissions, encoding).
    ReadFailed(String),
    /// Writing the log file failed (permissions, disk full).
    /// The in-memory change is discarded; there is no retry.
    WriteFailed(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::ReadFailed(msg) => write!(f, "History log read failed: {}", msg),
            HistoryError::WriteFailed(msg) => write!(f, "History log write failed: {}", msg),
        }
    }
}

impl std::error::Error for HistoryError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === LaunchError ===

/// Errors related to the web-search launcher.
#[derive(Debug)]
pub enum LaunchError {
    /// The query was empty or whitespace-only; the caller should re-prompt.
    EmptyQuery,
    /// No search engine hostname is configured.
    NoSearchEngine,
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::EmptyQuery => write!(f, "Search query is empty"),
            LaunchError::NoSearchEngine => write!(f, "No search engine configured"),
        }
    }
}

impl std::error::Error for LaunchError {}
