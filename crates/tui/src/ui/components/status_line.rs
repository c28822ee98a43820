//! Editor-style status line.
//!
//! Left: mode badge, file name, help hint. Right: theme name, filetype, and
//! cursor position.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use termfolio_config::Palette;
use termfolio_config::constants::{DEFAULT_FILE, DEFAULT_FILETYPE};

use crate::ui::theme::ThemeExt;

pub const HELP_HINT: &str = "Press Shift + ? for help | Shift + T for themes";

#[derive(Debug, Clone)]
pub struct StatusLine<'a> {
    pub mode: &'a str,
    pub theme_name: &'a str,
    pub palette: &'a Palette,
    pub line: usize,
    pub column: usize,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: &'a str, theme_name: &'a str, palette: &'a Palette) -> Self {
        Self {
            mode,
            theme_name,
            palette,
            line: 1,
            column: 1,
        }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar = self.palette.status_bar();
        buf.set_style(area, bar);

        let left = Line::from(vec![
            Span::styled(format!(" {} ", self.mode), self.palette.mode_badge()),
            Span::styled(format!(" {DEFAULT_FILE} "), bar),
            Span::styled(
                format!(" {HELP_HINT}"),
                self.palette.text_dim().bg(self.palette.status_line),
            ),
        ]);
        let right = Line::from(vec![
            Span::styled(format!("Theme: {} ", self.theme_name), bar),
            Span::styled(format!(" {DEFAULT_FILETYPE} "), bar),
            Span::styled(
                format!(" {}:{} ", self.line, self.column),
                self.palette.mode_badge(),
            ),
        ]);

        let right_width = (right.width() as u16).min(area.width);
        let left_area = Rect {
            width: area.width - right_width,
            ..area
        };
        let right_area = Rect {
            x: area.right() - right_width,
            width: right_width,
            ..area
        };
        Paragraph::new(left).render(left_area, buf);
        Paragraph::new(right).render(right_area, buf);
    }
}
