//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from the config file, environment variables, and direct builder methods.
//! - Build the final `LoadedConfig` (site content, theme catalog, starting theme).
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - File parsing (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Call order is `from_file()`, then `from_env()`, then builder methods, so later
//!   sources overwrite earlier ones.
//! - A missing file at the default location is not an error; a missing file at an
//!   explicitly requested location is.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use std::path::PathBuf;

use super::env::{apply_env, env_var_or_none};
use super::error::ConfigError;
use super::file::ConfigFile;
use super::path::default_config_path;
use super::validate::{build_theme_catalog, keybind_overlaps, resolve_theme, validate_links};
use crate::constants::ENV_CONFIG_PATH;
use crate::types::{SiteConfig, Theme};

/// Fully resolved configuration handed to the UI.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub site: SiteConfig,
    /// Built-in themes followed by user themes. Never empty.
    pub themes: Vec<Theme>,
    /// Index of the starting theme in `themes`.
    pub theme_index: usize,
    /// Config file the values were read from, if any.
    pub source: Option<PathBuf>,
}

impl Default for LoadedConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            themes: crate::types::builtin_themes(),
            theme_index: 0,
            source: None,
        }
    }
}

/// Configuration loader that builds config from files, environment variables, and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    file: Option<ConfigFile>,
    source: Option<PathBuf>,
    theme: Option<String>,
    title: Option<String>,
    subtitle: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read the site configuration file.
    ///
    /// The path is the one given to `with_config_path`, else `$TERMFOLIO_CONFIG`,
    /// else the platform default.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        let explicit = self
            .config_path
            .clone()
            .or_else(|| env_var_or_none(ENV_CONFIG_PATH).map(PathBuf::from));

        let (path, required) = match explicit {
            Some(path) => (path, true),
            None => match default_config_path() {
                Ok(path) => (path, false),
                Err(e) => {
                    tracing::debug!(error = %e, "No default config location, using built-in site");
                    return Ok(self);
                }
            },
        };

        match ConfigFile::read(&path) {
            Ok(file) => {
                tracing::info!(path = %path.display(), "Loaded site config");
                if let Some(theme) = &file.theme {
                    self.theme = Some(theme.clone());
                }
                if let Some(title) = &file.title {
                    self.title = Some(title.clone());
                }
                if let Some(subtitle) = &file.subtitle {
                    self.subtitle = Some(subtitle.clone());
                }
                self.file = Some(file);
                self.source = Some(path);
                Ok(self)
            }
            Err(ConfigError::ConfigFileMissing { .. }) if !required => Ok(self),
            Err(e) => Err(e),
        }
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over the config file.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Set the starting theme (name or 1-based index).
    pub fn with_theme(mut self, theme: String) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the title rendered as ASCII art.
    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: String) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    /// Build the final configuration from loaded values.
    pub fn build(self) -> Result<LoadedConfig, ConfigError> {
        let file = self.file.unwrap_or_default();
        let mut site = SiteConfig::default();

        if let Some(page_title) = file.page_title {
            site.page_title = page_title;
        }
        if let Some(links) = file.links {
            site.links = links;
        }
        if let Some(keybinds) = file.keybinds {
            site.keybinds = keybinds;
        }
        if let Some(title) = self.title {
            site.title = title;
        }
        if let Some(subtitle) = self.subtitle {
            site.subtitle = subtitle;
        }

        validate_links(&site.links, &site.keybinds)?;
        for (first, second) in keybind_overlaps(&site.links) {
            tracing::warn!(
                first = %first,
                second = %second,
                "Overlapping keybinds; the earlier link wins"
            );
        }

        let themes = build_theme_catalog(&file.themes)?;
        let theme_index = match self.theme.as_deref() {
            Some(selector) => resolve_theme(selector, &themes)?,
            None => 0,
        };

        Ok(LoadedConfig {
            site,
            themes,
            theme_index,
            source: self.source,
        })
    }

    pub(crate) fn set_theme(&mut self, theme: Option<String>) {
        self.theme = theme;
    }

    pub(crate) fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub(crate) fn set_subtitle(&mut self, subtitle: Option<String>) {
        self.subtitle = subtitle;
    }
}
