//! "Keyboard Shortcuts" overlay.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use termfolio_config::{GlobalKeybinds, Palette, SiteConfig};

use crate::input::keymap::{Keybinding, Section, section};
use crate::ui::icons::link_icon;
use crate::ui::popup::centered_rect;
use crate::ui::theme::ThemeExt;

pub const HELP_TITLE: &str = " Keyboard Shortcuts ";

const HELP_WIDTH: u16 = 52;

/// Footer naming the configured close key.
pub fn help_footer(keys: &GlobalKeybinds) -> String {
    format!("Press {} to close", keys.escape)
}

fn section_lines<'a>(
    title: &'a str,
    bindings: &'a [Keybinding],
    site: &'a SiteConfig,
    palette: &Palette,
    inner_width: usize,
) -> Vec<Line<'a>> {
    let mut lines = vec![Line::styled(title, palette.title())];
    for binding in bindings {
        let icon = binding
            .link_id
            .as_deref()
            .and_then(|id| site.link(id))
            .and_then(link_icon)
            .map(|icon| format!("{icon} "))
            .unwrap_or_default();
        let label = format!("  {icon}{}", binding.description);
        let pad = inner_width
            .saturating_sub(label.chars().count() + binding.keys.chars().count() + 1);
        lines.push(Line::from(vec![
            Span::styled(label, palette.text()),
            Span::raw(" ".repeat(pad)),
            Span::styled(binding.keys.as_str(), palette.accent()),
        ]));
    }
    lines
}

/// Render the help overlay over `area`; returns the overlay's rect.
pub fn render_help(f: &mut Frame, area: Rect, site: &SiteConfig, palette: &Palette) -> Rect {
    let navigation = section(site, Section::Navigation);
    let general = section(site, Section::General);

    let inner_width = usize::from(HELP_WIDTH - 2);
    let mut lines = section_lines(
        Section::Navigation.title(),
        &navigation,
        site,
        palette,
        inner_width,
    );
    lines.push(Line::default());
    lines.extend(section_lines(
        Section::General.title(),
        &general,
        site,
        palette,
        inner_width,
    ));
    lines.push(Line::default());
    lines.push(Line::styled(help_footer(&site.keybinds), palette.text_dim()).centered());

    let height = lines.len() as u16 + 2;
    let popup = centered_rect(HELP_WIDTH, height, area);

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(HELP_TITLE)
                .title_style(palette.title())
                .borders(Borders::ALL)
                .border_style(palette.border())
                .style(palette.base()),
        ),
        popup,
    );
    popup
}
