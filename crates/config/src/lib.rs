//! Configuration management for Termfolio.
//!
//! This crate provides the site content model, the theme catalog, and the
//! loader that merges built-in defaults, an optional JSON file, environment
//! variables, and command-line overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigFile, ConfigLoader, LoadedConfig, default_config_path, env_var_or_none,
    keybind_overlaps, resolve_theme,
};
pub use types::{
    COMMAND_LINE_KEY, GlobalKeybinds, Link, Palette, SiteConfig, Theme, ThemeSpec,
    builtin_themes, requires_shift,
};
