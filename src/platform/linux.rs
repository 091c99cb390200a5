// Surflog platform paths for Linux
// Config: ~/.config/surflog
// Data:   ~/.local/share/surflog

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Surflog on Linux.
/// Uses `$XDG_CONFIG_HOME/surflog` if set, otherwise `~/.config/surflog`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("surflog")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("surflog")
    }
}

/// Returns the data directory for Surflog on Linux.
/// Uses `$XDG_DATA_HOME/surflog` if set, otherwise `~/.local/share/surflog`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("surflog")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("surflog")
    }
}
