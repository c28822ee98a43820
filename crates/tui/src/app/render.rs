//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Lay out the page: gutter, title, subtitle, links, mode line, status line
//! - Draw the command line, toasts, and any open overlay
//! - Record link row and overlay areas for mouse hit-testing
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state (except for the recorded hit-test areas)

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use termfolio_config::Palette;
use termfolio_config::constants::DEFAULT_LINE_COUNT;

use crate::app::structs::App;
use crate::ui::components::{AsciiTitle, LineNumberGutter, LinkList, StatusLine};
use crate::ui::popup::{render_help, render_theme_selector};
use crate::ui::{ThemeExt, render_toasts};

/// Tallest the ASCII title may get.
const MAX_TITLE_HEIGHT: u16 = 8;

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        self.last_area = area;
        let palette = self.theme().palette;

        f.render_widget(Block::default().style(palette.base()), area);

        let command_height = u16::from(self.command_line.is_active());
        let [main, status, command] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(command_height),
        ])
        .areas(area);

        let gutter = LineNumberGutter::new(DEFAULT_LINE_COUNT)
            .current_line(1)
            .style(palette.text_dim())
            .current_style(palette.current_line());
        let [gutter_area, content] =
            Layout::horizontal([Constraint::Length(gutter.width()), Constraint::Min(0)])
                .areas(main);
        f.render_widget(gutter, gutter_area);

        self.render_page(f, content, &palette);

        f.render_widget(
            StatusLine::new(self.mode(), &self.theme().name, &palette),
            status,
        );
        if self.command_line.is_active() {
            self.render_command_line(f, command, &palette);
        }

        render_toasts(f, main, &self.toasts, &palette);

        self.popup_area = None;
        self.theme_row_areas.clear();
        if self.modals.help_open() {
            self.popup_area = Some(render_help(f, area, &self.site, &palette));
        } else if self.modals.theme_open() {
            let layout = render_theme_selector(
                f,
                area,
                self.themes.themes(),
                self.themes.index(),
                self.theme_focus,
                &self.site.keybinds.escape,
                &palette,
            );
            self.popup_area = Some(layout.popup);
            self.theme_row_areas = layout.rows;
        }
    }

    fn render_page(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let link_rows = self.site.links.len() as u16;
        // gap, subtitle, gap, links, gap, mode line
        let fixed = 4 + link_rows;
        let title = AsciiTitle::new(&self.site.title).style(palette.title());
        let title_height =
            title.height_for(area.width, area.height.saturating_sub(fixed).min(MAX_TITLE_HEIGHT));

        let [_, title_area, _, subtitle_area, _, links_area, _, mode_area, _] =
            Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(title_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(link_rows),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(area);

        f.render_widget(title, title_area);

        let subtitle = Line::from(vec![
            Span::styled(format!(" {} ", self.site.subtitle), palette.band()),
            Span::styled(" ▲", palette.accent()),
        ])
        .centered();
        f.render_widget(Paragraph::new(subtitle), subtitle_area);

        self.link_areas = LinkList::row_areas(&self.site.links, links_area);
        f.render_widget(
            LinkList::new(&self.site.links, self.navigation.selected(), palette),
            links_area,
        );

        let mut mode_line = vec![
            Span::styled("MODE: ", palette.text_dim()),
            Span::styled(self.mode(), palette.accent()),
        ];
        let keys = self.key_buffer.display();
        if !keys.is_empty() {
            mode_line.push(Span::styled("  KEYS: ", palette.text_dim()));
            mode_line.push(Span::styled(keys, palette.text()));
        }
        f.render_widget(Paragraph::new(Line::from(mode_line).centered()), mode_area);
    }

    fn render_command_line(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let line = Line::from(vec![
            Span::styled(":", palette.accent()),
            Span::styled(self.command_line.value(), palette.text()),
        ]);
        f.render_widget(Paragraph::new(line).style(palette.base()), area);

        let cursor = u16::try_from(self.command_line.cursor_position()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(cursor)
            .min(area.right().saturating_sub(1));
        f.set_cursor_position(Position::new(x, area.y));
    }
}
