//! Site configuration file loading.
//!
//! Responsibilities:
//! - Define the on-disk JSON shape (`ConfigFile`), where every field is optional.
//! - Read and parse the file, mapping failures to `ConfigError`.
//!
//! Does NOT handle:
//! - Deciding which path to read (see `builder.rs`).
//! - Validating the parsed values (see `validate.rs`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::types::{GlobalKeybinds, Link, ThemeSpec};

/// Contents of `config.json`. Absent fields fall back to the built-in site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub page_title: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Replaces the built-in link list entirely when present.
    pub links: Option<Vec<Link>>,
    pub keybinds: Option<GlobalKeybinds>,
    /// Extra themes, appended after the built-in catalog.
    pub themes: Vec<ThemeSpec>,
    /// Starting theme, by name or 1-based index.
    pub theme: Option<String>,
}

impl ConfigFile {
    /// Read and parse a configuration file.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::ConfigFileMissing {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::ConfigFileRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_read_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, r#"{{"title": "Ada", "theme": "Light"}}"#).unwrap();

        let parsed = ConfigFile::read(&path).unwrap();
        assert_eq!(parsed.title.as_deref(), Some("Ada"));
        assert_eq!(parsed.theme.as_deref(), Some("Light"));
        assert!(parsed.links.is_none());
        assert!(parsed.themes.is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ConfigFile::read(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigFileMissing { .. }));
    }

    #[test]
    fn test_read_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ConfigFile::read(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigFileParse { .. }));
    }
}
