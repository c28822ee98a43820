//! The link list: one row per link with icon, title, and keybind.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use termfolio_config::{Link, Palette};

use crate::ui::icons::link_icon;
use crate::ui::theme::ThemeExt;

const MAX_ROW_WIDTH: u16 = 48;
const SELECTED_MARKER: &str = "▌";

#[derive(Debug, Clone)]
pub struct LinkList<'a> {
    links: &'a [Link],
    selected: usize,
    palette: &'a Palette,
}

impl<'a> LinkList<'a> {
    pub fn new(links: &'a [Link], selected: usize, palette: &'a Palette) -> Self {
        Self {
            links,
            selected,
            palette,
        }
    }

    /// Rows the list occupies inside `area`, one per visible link.
    pub fn row_areas(links: &[Link], area: Rect) -> Vec<Rect> {
        let width = area.width.min(MAX_ROW_WIDTH);
        let x = area.x + (area.width - width) / 2;
        (0..area.height)
            .take(links.len())
            .map(|row| Rect::new(x, area.y + row, width, 1))
            .collect()
    }

    fn row_line(&self, link: &'a Link, selected: bool, width: u16) -> Line<'a> {
        let palette = self.palette;
        let row_style = if selected {
            palette.highlight()
        } else {
            palette.text()
        };
        let marker = if selected { SELECTED_MARKER } else { " " };
        let icon = link_icon(link)
            .map(|icon| format!("{icon} "))
            .unwrap_or_default();

        let keybind_style = if selected {
            palette.accent().bg(palette.selection)
        } else {
            palette.text_dim()
        };

        let used = 2
            + icon.chars().count()
            + link.title.chars().count()
            + link.keybind.chars().count()
            + 1;
        let padding = usize::from(width).saturating_sub(used);

        Line::from(vec![
            Span::styled(marker, palette.accent().patch(row_style).fg(palette.accent)),
            Span::styled(" ", row_style),
            Span::styled(icon, row_style),
            Span::styled(link.title.as_str(), row_style),
            Span::styled(" ".repeat(padding), row_style),
            Span::styled(link.keybind.as_str(), keybind_style),
            Span::styled(" ", row_style),
        ])
    }
}

impl Widget for LinkList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, (link, row)) in self
            .links
            .iter()
            .zip(Self::row_areas(self.links, area))
            .enumerate()
        {
            let line = self.row_line(link, index == self.selected, row.width);
            buf.set_line(row.x, row.y, &line, row.width);
        }
    }
}
