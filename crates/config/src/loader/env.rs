//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read Termfolio environment variables and apply them to a `ConfigLoader`.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Invariants:
//! - Environment variables take precedence over config file values.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.

use super::builder::ConfigLoader;
use crate::constants::{ENV_SUBTITLE, ENV_THEME, ENV_TITLE};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) {
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        loader.set_theme(Some(theme));
    }
    if let Some(title) = env_var_or_none(ENV_TITLE) {
        loader.set_title(Some(title));
    }
    if let Some(subtitle) = env_var_or_none(ENV_SUBTITLE) {
        loader.set_subtitle(Some(subtitle));
    }
}
