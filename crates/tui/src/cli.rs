//! Command-line argument parsing for termfolio.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use std::path::PathBuf;
use termfolio_config::constants::{ENV_CONFIG_PATH, ENV_THEME};

/// Command-line arguments for termfolio.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --theme, --config-path)
/// 2. Environment variables (e.g., TERMFOLIO_THEME, TERMFOLIO_TITLE)
/// 3. Configuration file (config.json)
/// 4. Built-in defaults
#[derive(Debug, Parser)]
#[command(
    name = "termfolio",
    about = "A Neovim-styled portfolio page in your terminal",
    version,
    after_help = "Examples:\n  termfolio\n  termfolio --theme Catppuccin\n  termfolio --theme 3 --no-mouse\n  termfolio --config-path ./site.json --print-config\n"
)]
pub struct Cli {
    /// Path to a site configuration file (JSON)
    #[arg(long, env = ENV_CONFIG_PATH)]
    pub config_path: Option<PathBuf>,

    /// Starting theme, by name or 1-based index
    #[arg(long, short = 't', env = ENV_THEME)]
    pub theme: Option<String>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}
