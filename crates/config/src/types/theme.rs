//! Theme types for Termfolio configuration.
//!
//! Responsibilities:
//! - Define the runtime `Theme` and its color `Palette`.
//! - Provide the built-in theme catalog.
//! - Parse user-supplied themes (`ThemeSpec`, hex colors) into runtime themes.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//! - Selecting the active theme (see the TUI crate's theme manager).
//!
//! Invariants:
//! - `Theme` is the runtime representation; `ThemeSpec` is the file representation.
//! - The built-in catalog is never empty and starts with `Default`.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a color string is not `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{value}': expected #RRGGBB")]
pub struct ColorParseError {
    pub value: String,
}

/// Parse a `#RRGGBB` hex string into an RGB color.
pub fn parse_hex_color(value: &str) -> Result<Color, ColorParseError> {
    let err = || ColorParseError {
        value: value.to_string(),
    };
    let hex = value.trim().strip_prefix('#').ok_or_else(err)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(err());
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Color::Rgb(r, g, b)),
        _ => Err(err()),
    }
}

/// Colors used by every part of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub cursor: Color,
    pub selection: Color,
    pub status_line: Color,
    pub status_line_text: Color,
    pub normal_mode: Color,
    pub normal_mode_text: Color,
    pub line_numbers: Color,
    pub accent: Color,
    pub hover: Color,
}

/// A named palette from the theme catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub palette: Palette,
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

impl Theme {
    /// The theme used when nothing else is selected.
    pub fn default_theme() -> Self {
        Self {
            name: "Default".to_string(),
            palette: Palette {
                background: rgb(0x1E1E2E),
                foreground: rgb(0xCDD6F4),
                cursor: rgb(0xF5E0DC),
                selection: rgb(0x313346),
                status_line: rgb(0x181825),
                status_line_text: rgb(0xCDD6F4),
                normal_mode: rgb(0x89B4FA),
                normal_mode_text: rgb(0x181825),
                line_numbers: rgb(0x6C7086),
                accent: rgb(0x89B4FA),
                hover: rgb(0x313346),
            },
        }
    }

    fn catppuccin() -> Self {
        Self {
            name: "Catppuccin".to_string(),
            palette: Palette {
                background: rgb(0x1E1E2E),
                foreground: rgb(0xCDD6F4),
                cursor: rgb(0xF5E0DC),
                selection: rgb(0x45475A),
                status_line: rgb(0x181825),
                status_line_text: rgb(0xCDD6F4),
                normal_mode: rgb(0xF5C2E7),
                normal_mode_text: rgb(0x181825),
                line_numbers: rgb(0x6C7086),
                accent: rgb(0xF5C2E7),
                hover: rgb(0x313244),
            },
        }
    }

    fn claude() -> Self {
        Self {
            name: "Claude".to_string(),
            palette: Palette {
                background: rgb(0x1C1C1C),
                foreground: rgb(0xE6E6E6),
                cursor: rgb(0xE86C52),
                selection: rgb(0x2D2D2D),
                status_line: rgb(0x141414),
                status_line_text: rgb(0x7EB6FF),
                normal_mode: rgb(0xE86C52),
                normal_mode_text: rgb(0x141414),
                line_numbers: rgb(0x666666),
                accent: rgb(0xE86C52),
                hover: rgb(0x2D2D2D),
            },
        }
    }

    fn light() -> Self {
        Self {
            name: "Light".to_string(),
            palette: Palette {
                background: rgb(0xF8F8F2),
                foreground: rgb(0x282A36),
                cursor: rgb(0xFF79C6),
                selection: rgb(0xE6E6E6),
                status_line: rgb(0xF1F1F1),
                status_line_text: rgb(0x44475A),
                normal_mode: rgb(0x50FA7B),
                normal_mode_text: rgb(0x282A36),
                line_numbers: rgb(0x6272A4),
                accent: rgb(0xBD93F9),
                hover: rgb(0xF1F1F1),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// The built-in theme catalog, in switcher order.
pub fn builtin_themes() -> Vec<Theme> {
    vec![
        Theme::default_theme(),
        Theme::catppuccin(),
        Theme::claude(),
        Theme::light(),
    ]
}

/// Hex color strings for a user-defined theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteSpec {
    pub background: String,
    pub foreground: String,
    pub cursor: String,
    pub selection: String,
    pub status_line: String,
    pub status_line_text: String,
    pub normal_mode: String,
    pub normal_mode_text: String,
    pub line_numbers: String,
    pub accent: String,
    pub hover: String,
}

/// A user-defined theme as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSpec {
    pub name: String,
    pub colors: PaletteSpec,
}

impl TryFrom<&ThemeSpec> for Theme {
    type Error = ColorParseError;

    fn try_from(spec: &ThemeSpec) -> Result<Self, Self::Error> {
        let c = &spec.colors;
        Ok(Self {
            name: spec.name.clone(),
            palette: Palette {
                background: parse_hex_color(&c.background)?,
                foreground: parse_hex_color(&c.foreground)?,
                cursor: parse_hex_color(&c.cursor)?,
                selection: parse_hex_color(&c.selection)?,
                status_line: parse_hex_color(&c.status_line)?,
                status_line_text: parse_hex_color(&c.status_line_text)?,
                normal_mode: parse_hex_color(&c.normal_mode)?,
                normal_mode_text: parse_hex_color(&c.normal_mode_text)?,
                line_numbers: parse_hex_color(&c.line_numbers)?,
                accent: parse_hex_color(&c.accent)?,
                hover: parse_hex_color(&c.hover)?,
            },
        })
    }
}
