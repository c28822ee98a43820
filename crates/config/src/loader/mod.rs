//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and a JSON site file.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Writing configuration back to disk (nothing is persisted).
//! - Applying the configuration to the UI (see the TUI crate).
//!
//! Invariants / Assumptions:
//! - Precedence is builder methods > environment variables > config file > defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;
mod file;
mod path;
mod validate;

pub use builder::{ConfigLoader, LoadedConfig};
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use file::ConfigFile;
pub use path::default_config_path;
pub use validate::{keybind_overlaps, resolve_theme};
