// Surflog platform paths for macOS
// Config: ~/Library/Application Support/Surflog
// Data:   ~/Library/Application Support/Surflog

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for Surflog on macOS.
/// `~/Library/Application Support/Surflog`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Surflog")
}

/// Returns the data directory for Surflog on macOS.
/// `~/Library/Application Support/Surflog`
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Surflog")
}
