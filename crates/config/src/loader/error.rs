//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Provide conversion from lower-level errors (e.g., `ColorParseError`).
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).
//! - Dotenv errors NEVER include raw .env line contents.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::ColorParseError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Config file not found at {path}")]
    ConfigFileMissing { path: PathBuf },

    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Link at position {index} has an empty id")]
    EmptyLinkId { index: usize },

    #[error("Duplicate link id '{0}'")]
    DuplicateLinkId(String),

    #[error("Link '{id}' has an empty keybind")]
    EmptyKeybind { id: String },

    #[error("Link '{id}' keybind '{keybind}' uses '{key}', which the page handles before keybinds")]
    UnreachableKeybind {
        id: String,
        keybind: String,
        key: char,
    },

    #[error("Link '{id}' has an invalid url '{url}': {message}")]
    InvalidUrl {
        id: String,
        url: String,
        message: String,
    },

    #[error("Theme '{theme}' has an invalid color")]
    InvalidColor {
        theme: String,
        #[source]
        source: ColorParseError,
    },

    #[error("Duplicate theme name '{0}'")]
    DuplicateTheme(String),

    #[error("Unknown theme '{selector}' (available: {available})")]
    UnknownTheme { selector: String, available: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index of the failure is kept, never the line content.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
