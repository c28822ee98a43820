//! TUI-specific palette helpers and style builders.
//!
//! This module extends `termfolio_config::Palette` with helpers for building
//! ratatui `Style` objects consistently across the page.

use ratatui::style::{Modifier, Style};
use termfolio_config::Palette;

/// Trait extending Palette with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Page background with foreground text.
    fn base(&self) -> Style;
    /// Plain text.
    fn text(&self) -> Style;
    /// Gutter numbers, hints, and other secondary text.
    fn text_dim(&self) -> Style;
    /// Accent color + bold.
    fn title(&self) -> Style;
    fn accent(&self) -> Style;
    fn border(&self) -> Style;
    /// Selected row.
    fn highlight(&self) -> Style;
    /// Subtitle band.
    fn band(&self) -> Style;
    fn status_bar(&self) -> Style;
    /// The NORMAL/COMMAND badge.
    fn mode_badge(&self) -> Style;
    /// Current line number in the gutter.
    fn current_line(&self) -> Style;
    fn error(&self) -> Style;
}

impl ThemeExt for Palette {
    fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    fn text(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.line_numbers)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.accent).bg(self.background)
    }

    fn highlight(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.selection)
    }

    fn band(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.selection)
    }

    fn status_bar(&self) -> Style {
        Style::default()
            .fg(self.status_line_text)
            .bg(self.status_line)
    }

    fn mode_badge(&self) -> Style {
        Style::default()
            .fg(self.normal_mode_text)
            .bg(self.normal_mode)
            .add_modifier(Modifier::BOLD)
    }

    fn current_line(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    fn error(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }
}
