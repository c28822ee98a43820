//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the standard configuration file path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations (see `file.rs`).

use std::path::PathBuf;

use super::error::ConfigError;

/// Returns the default path to the site configuration file.
///
/// - Linux: `~/.config/termfolio/config.json`
/// - macOS: `~/Library/Application Support/termfolio/config.json`
/// - Windows: `%AppData%\termfolio\config\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", "termfolio").ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory for this user".to_string())
    })?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_ends_with_config_json() {
        let Ok(path) = default_config_path() else {
            // Sandboxed environments without a home directory.
            return;
        };
        assert!(path.ends_with("config.json"));
        assert!(path.to_string_lossy().contains("termfolio"));
    }
}
