//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Load `.env`, the config file, environment overrides, and CLI overrides
//!   through `termfolio_config::ConfigLoader`.
//!
//! Does NOT handle:
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > config file > defaults.
//! - `load_dotenv()` runs before anything reads the environment.

use anyhow::{Context, Result};
use serde::Serialize;
use termfolio_config::{ConfigLoader, LoadedConfig, SiteConfig};

use crate::cli::Cli;

/// Resolve the full configuration for this run.
pub fn load_config(cli: &Cli) -> Result<LoadedConfig> {
    let mut loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?;

    if let Some(path) = &cli.config_path {
        loader = loader.with_config_path(path.clone());
    }

    let mut loader = loader
        .from_file()
        .context("Failed to read configuration file")?
        .from_env();

    if let Some(theme) = cli.theme.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        loader = loader.with_theme(theme.to_string());
    }

    let config = loader.build().context("Invalid configuration")?;
    tracing::info!(
        links = config.site.links.len(),
        themes = config.themes.len(),
        source = ?config.source,
        "Configuration loaded"
    );
    Ok(config)
}

/// Shape of `--print-config` output.
#[derive(Debug, Serialize)]
pub struct PrintedConfig<'a> {
    pub site: &'a SiteConfig,
    pub themes: Vec<&'a str>,
    pub theme: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl<'a> From<&'a LoadedConfig> for PrintedConfig<'a> {
    fn from(config: &'a LoadedConfig) -> Self {
        Self {
            site: &config.site,
            themes: config.themes.iter().map(|t| t.name.as_str()).collect(),
            theme: config
                .themes
                .get(config.theme_index)
                .map_or("Default", |t| t.name.as_str()),
            source: config.source.as_ref().map(|p| p.display().to_string()),
        }
    }
}

/// Resolved configuration as pretty JSON.
pub fn config_json(config: &LoadedConfig) -> Result<String> {
    serde_json::to_string_pretty(&PrintedConfig::from(config))
        .context("Failed to serialize configuration")
}
