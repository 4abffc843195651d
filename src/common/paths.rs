//! Configuration and subject binary paths

use std::path::{Path, PathBuf};

/// Name used for the configuration directory
const APP_NAME: &str = "bobbin-tests";

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/bobbin-tests/`
/// - macOS: `~/Library/Application Support/bobbin-tests/`
/// - Windows: `%APPDATA%\bobbin-tests\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Resolve the subject binary
///
/// Anything containing a path separator is used as given. A bare name is
/// looked up on `PATH`, falling back to the name itself so that the spawn
/// error names what the user asked for.
pub fn resolve_binary(binary: &Path) -> PathBuf {
    if binary.components().count() > 1 {
        return binary.to_path_buf();
    }
    which::which(binary).unwrap_or_else(|_| binary.to_path_buf())
}
