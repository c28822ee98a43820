//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Hovering a link row selects it; a left click activates it
//! - Scrolling moves the selection
//! - In the theme switcher, clicking a row applies that theme
//! - Clicking outside an open overlay closes it
//!
//! Does NOT handle:
//! - Does NOT handle keyboard input
//! - Does NOT render the UI (row areas come from the last render)

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::action::Action;
use crate::app::structs::App;

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        if !self.mounted || !self.mouse_enabled || self.command_line.is_active() {
            return None;
        }
        if self.modals.is_any_open() {
            return self.handle_popup_mouse(mouse);
        }

        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                if let Some(index) = hit(&self.link_areas, position) {
                    self.navigation.select(index);
                }
                None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let index = hit(&self.link_areas, position)?;
                self.navigation.select(index);
                self.activate_selected()
            }
            MouseEventKind::ScrollDown => {
                self.navigation.move_down();
                None
            }
            MouseEventKind::ScrollUp => {
                self.navigation.move_up();
                None
            }
            _ => None,
        }
    }

    fn handle_popup_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved if self.modals.theme_open() => {
                if let Some(index) = hit(&self.theme_row_areas, position) {
                    self.theme_focus = index;
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let inside = self
                    .popup_area
                    .is_some_and(|area| area.contains(position));
                if !inside {
                    self.close_modals();
                } else if self.modals.theme_open()
                    && let Some(index) = hit(&self.theme_row_areas, position)
                {
                    self.theme_focus = index;
                    if self.set_theme(index) {
                        self.close_modals();
                    }
                }
            }
            _ => {}
        }
        None
    }
}

fn hit(areas: &[Rect], position: Position) -> Option<usize> {
    areas.iter().position(|area| area.contains(position))
}
