//! Line-number gutter.
//!
//! Draws `1..=line_count` down the left edge, right-aligned, with the current
//! line bold. Rows past `line_count` show `~` like an editor's empty buffer.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

#[derive(Debug, Clone)]
pub struct LineNumberGutter {
    line_count: usize,
    current_line: usize,
    style: Style,
    current_style: Style,
}

impl LineNumberGutter {
    pub fn new(line_count: usize) -> Self {
        Self {
            line_count,
            current_line: 1,
            style: Style::default(),
            current_style: Style::default(),
        }
    }

    /// 1-based line drawn with `current_style`.
    pub fn current_line(mut self, line: usize) -> Self {
        self.current_line = line;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn current_style(mut self, style: Style) -> Self {
        self.current_style = style;
        self
    }

    /// Columns needed: the widest number plus one space of padding.
    pub fn width(&self) -> u16 {
        let digits = self.line_count.max(1).to_string().len() as u16;
        digits.max(3) + 1
    }
}

impl Widget for LineNumberGutter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let number_width = usize::from(area.width.saturating_sub(1));
        for row in 0..area.height {
            let line = usize::from(row) + 1;
            let (text, style) = if line <= self.line_count {
                let style = if line == self.current_line {
                    self.current_style
                } else {
                    self.style
                };
                (format!("{line:>number_width$}"), style)
            } else {
                ("~".to_string(), self.style)
            };
            buf.set_stringn(area.x, area.y + row, text, usize::from(area.width), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn numbers_then_tildes() {
        let gutter = LineNumberGutter::new(3);
        let area = Rect::new(0, 0, gutter.width(), 5);
        let mut buf = Buffer::empty(area);
        gutter.render(area, &mut buf);

        assert_eq!(row(&buf, 0), "  1 ");
        assert_eq!(row(&buf, 2), "  3 ");
        assert_eq!(row(&buf, 3), "~   ");
    }

    #[test]
    fn width_fits_line_count() {
        assert_eq!(LineNumberGutter::new(50).width(), 4);
        assert_eq!(LineNumberGutter::new(1000).width(), 5);
    }
}
