//! ASCII-art page title.
//!
//! A wrapper around `tui-big-text` that picks the largest pixel size whose
//! rendering fits the available area. Long titles use only their first word.
//! When nothing fits, the raw title text is rendered instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use termfolio::ui::components::AsciiTitle;
//!
//! let title = AsciiTitle::new("Sree N").style(palette.title());
//! let height = title.height_for(area.width, 8);
//! frame.render_widget(title, area);
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};
use termfolio_config::constants::MAX_FULL_TITLE_LEN;
use tui_big_text::{BigText, PixelSize};

/// Candidate sizes, largest first.
const SIZES: [PixelSize; 3] = [PixelSize::Full, PixelSize::HalfHeight, PixelSize::Quadrant];

/// Terminal cells per glyph as (columns, rows).
pub fn glyph_cells(size: PixelSize) -> (u16, u16) {
    match size {
        PixelSize::HalfHeight => (8, 4),
        PixelSize::HalfWidth => (4, 8),
        PixelSize::Quadrant => (4, 4),
        _ => (8, 8),
    }
}

/// First word of `title`, or its first five characters when it starts with a space.
pub fn short_title(title: &str) -> &str {
    match title.split(' ').next() {
        Some(word) if !word.is_empty() => word,
        _ => {
            let end = title
                .char_indices()
                .nth(5)
                .map_or(title.len(), |(i, _)| i);
            &title[..end]
        }
    }
}

/// The text actually drawn as ASCII art.
pub fn display_title(title: &str) -> &str {
    if title.chars().count() > MAX_FULL_TITLE_LEN {
        short_title(title)
    } else {
        title
    }
}

/// Largest size at which `text` fits in `width` x `height` cells.
pub fn fit(text: &str, width: u16, height: u16) -> Option<PixelSize> {
    let chars = u16::try_from(text.chars().count()).ok()?;
    if chars == 0 {
        return None;
    }
    SIZES.into_iter().find(|&size| {
        let (cols, rows) = glyph_cells(size);
        chars.saturating_mul(cols) <= width && rows <= height
    })
}

/// The page title as big text.
#[derive(Debug, Clone)]
pub struct AsciiTitle<'a> {
    title: &'a str,
    style: Style,
}

impl<'a> AsciiTitle<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Rows needed at `width`, never more than `max_height`.
    pub fn height_for(&self, width: u16, max_height: u16) -> u16 {
        match fit(display_title(self.title), width, max_height) {
            Some(size) => glyph_cells(size).1,
            None => 1.min(max_height),
        }
    }
}

impl Widget for AsciiTitle<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = display_title(self.title);
        let Some(size) = fit(text, area.width, area.height) else {
            Paragraph::new(Line::from(self.title))
                .style(self.style)
                .centered()
                .render(area, buf);
            return;
        };

        let (cols, rows) = glyph_cells(size);
        let width = text.chars().count() as u16 * cols;
        let centered = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - rows) / 2,
            width,
            height: rows,
        };

        BigText::builder()
            .pixel_size(size)
            .style(self.style)
            .lines(vec![Line::from(text)])
            .build()
            .render(centered, buf);
    }
}
