//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//! - Drive the key buffer debounce and toast expiry from the UI tick
//!
//! Non-responsibilities:
//! - Does NOT create Actions (handled by input handlers)
//! - Does NOT perform async operations

use std::time::Instant;

use ratatui::layout::Rect;

use crate::action::Action;
use crate::app::structs::App;
use crate::ui::{Toast, ToastLevel};

impl App {
    /// Pure state mutation based on Action.
    pub fn update(&mut self, action: Action) {
        self.update_at(action, Instant::now());
    }

    /// `update` with an explicit clock.
    pub fn update_at(&mut self, action: Action, now: Instant) {
        if !self.mounted {
            return;
        }

        match action {
            Action::Tick => {
                if self.key_buffer.tick(now) {
                    tracing::debug!("Key buffer cleared after inactivity");
                }
                self.toasts.retain(|t| !t.is_expired_at(now));
            }
            Action::Resize(width, height) => {
                self.last_area = Rect::new(0, 0, width, height);
            }
            Action::OpenLink { title, .. } => {
                self.toasts.push(Toast::info(format!("Opening {title}…")));
            }
            Action::LinkOpenFailed { title, error } => {
                tracing::error!(%title, %error, "Failed to open link");
                self.toasts
                    .push(Toast::error(format!("Could not open {title}: {error}")));
            }
            Action::Notify(level, message) => {
                self.toasts.push(Toast::new(message, level));
            }
            Action::Quit | Action::Input(_) | Action::Mouse(_) => {}
        }
    }

    /// Push an info toast.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.update(Action::Notify(ToastLevel::Info, message.into()));
    }
}
