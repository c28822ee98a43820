//! "Theme Selector" overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use termfolio_config::{Palette, Theme};

use crate::ui::popup::centered_rect;
use crate::ui::theme::ThemeExt;

pub const THEME_SELECTOR_TITLE: &str = " Theme Selector ";
const SELECTOR_WIDTH: u16 = 44;
const CHECK: &str = "✓";
const SWATCH: &str = "██";

/// Where the overlay and its rows landed, for mouse hit-testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSelectorLayout {
    pub popup: Rect,
    pub rows: Vec<Rect>,
}

fn theme_row<'a>(
    theme: &'a Theme,
    active: bool,
    focused: bool,
    palette: &Palette,
    width: usize,
) -> Line<'a> {
    let row_style = if focused {
        palette.highlight()
    } else {
        palette.text()
    };
    let check = if active { CHECK } else { " " };
    let label = format!(" {check} {}", theme.name);
    let swatches = 3 * SWATCH.chars().count() + 2 + 1;
    let pad = width.saturating_sub(label.chars().count() + swatches);

    let row_bg = row_style.bg.unwrap_or(palette.background);
    let swatch = |color: Color| Style::default().fg(color).bg(row_bg);
    Line::from(vec![
        Span::styled(label, row_style),
        Span::styled(" ".repeat(pad), row_style),
        Span::styled(SWATCH, swatch(theme.palette.background)),
        Span::styled(" ", row_style),
        Span::styled(SWATCH, swatch(theme.palette.accent)),
        Span::styled(" ", row_style),
        Span::styled(SWATCH, swatch(theme.palette.foreground)),
        Span::styled(" ", row_style),
    ])
}

/// Render the theme switcher over `area`.
///
/// `current` is the applied theme (checked); `focus` is the cursor row.
/// `close_key` is named in the footer.
pub fn render_theme_selector(
    f: &mut Frame,
    area: Rect,
    themes: &[Theme],
    current: usize,
    focus: usize,
    close_key: &str,
    palette: &Palette,
) -> ThemeSelectorLayout {
    let inner_width = usize::from(SELECTOR_WIDTH - 2);
    let mut lines: Vec<Line> = themes
        .iter()
        .enumerate()
        .map(|(i, theme)| theme_row(theme, i == current, i == focus, palette, inner_width))
        .collect();
    lines.push(Line::default());
    let footer = format!("j/k move · Enter apply · {close_key} close");
    lines.push(Line::styled(footer, palette.text_dim()).centered());

    let height = lines.len() as u16 + 2;
    let popup = centered_rect(SELECTOR_WIDTH, height, area);

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(THEME_SELECTOR_TITLE)
                .title_style(palette.title())
                .borders(Borders::ALL)
                .border_style(palette.border())
                .style(palette.base()),
        ),
        popup,
    );

    let inner = Rect {
        x: popup.x + 1,
        y: popup.y + 1,
        width: popup.width.saturating_sub(2),
        height: popup.height.saturating_sub(2),
    };
    let rows = (0..inner.height)
        .take(themes.len())
        .map(|row| Rect::new(inner.x, inner.y + row, inner.width, 1))
        .collect();

    ThemeSelectorLayout { popup, rows }
}
