// Surflog platform paths for Windows
// Config: %APPDATA%/Surflog
// Data:   %APPDATA%/Surflog

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Surflog on Windows.
/// `%APPDATA%/Surflog`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Surflog")
}

/// Returns the data directory for Surflog on Windows.
/// `%APPDATA%/Surflog`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Surflog")
}
