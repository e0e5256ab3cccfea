//! Configuration paths
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `$XDG_CONFIG_HOME/fibseq/` (usually `~/.config/fibseq/`)
//! - macOS: `~/Library/Application Support/fibseq/`
//! - Windows: `%APPDATA%\fibseq\`

use std::path::PathBuf;

/// Application name used for directory lookup
const APP_NAME: &str = "fibseq";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
