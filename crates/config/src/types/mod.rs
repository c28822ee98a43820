//! Configuration types for Termfolio.
//!
//! Responsibilities:
//! - Define the site content model (`Link`, `SiteConfig`).
//! - Define the page-wide keys (`GlobalKeybinds`).
//! - Define themes and the built-in theme catalog.
//!
//! Does NOT handle:
//! - Loading configuration from files or the environment (see `loader`).

mod keys;
mod link;
mod theme;

pub use keys::{COMMAND_LINE_KEY, GlobalKeybinds, requires_shift};
pub use link::{Link, SiteConfig};
pub use theme::{
    ColorParseError, Palette, PaletteSpec, Theme, ThemeSpec, builtin_themes, parse_hex_color,
};
