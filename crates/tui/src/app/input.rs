//! Keyboard dispatcher.
//!
//! Responsibilities:
//! - Route each key press to the command line, an open overlay, or the page
//! - Apply the page's key handling in a fixed order (see `dispatch_key`)
//! - Return the side-effect Action, if any, to the main loop
//!
//! Non-responsibilities:
//! - Does NOT open links (returns `Action::OpenLink`)
//! - Does NOT render
//!
//! Invariants:
//! - Keys are handled strictly in delivery order
//! - At most one link activation per key press
//! - Nothing changes once the App is unmounted

pub mod components;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termfolio_config::COMMAND_LINE_KEY;

use crate::action::Action;
use crate::app::structs::App;
use crate::input::{KeyInput, match_keybind};

/// Outcome of dispatching one key press.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Side effect for the main loop.
    pub action: Option<Action>,
    /// The key's default behavior (page scrolling) is suppressed.
    pub default_prevented: bool,
}

impl Dispatch {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn prevented(action: Option<Action>) -> Self {
        Self {
            action,
            default_prevented: true,
        }
    }
}

impl App {
    /// Handle a raw terminal key press.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        self.handle_input_at(key, Instant::now())
    }

    /// `handle_input` with an explicit clock, for the key buffer debounce.
    pub fn handle_input_at(&mut self, key: KeyEvent, now: Instant) -> Option<Action> {
        if !self.mounted || key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.command_line.is_active() {
            if let Some(input) = KeyInput::from_key_event(&key) {
                self.dispatch_key(&input.in_text_input(), now);
            }
            return self.handle_command_line_key(key);
        }

        let input = KeyInput::from_key_event(&key)?;

        if input.key == COMMAND_LINE_KEY.to_string() && !self.modals.is_any_open() {
            self.open_command_line();
            return None;
        }

        self.dispatch_key(&input, now).action
    }

    /// Dispatch one normalized key.
    ///
    /// With an overlay open, only the overlay's listener sees the key.
    /// Otherwise, in order:
    /// 1. keys inside a text input are ignored;
    /// 2. navigation keys have their default prevented;
    /// 3. the help key (Shift+? by default) toggles help;
    /// 4. the theme key (T, or Shift+t, by default) toggles the theme switcher;
    /// 5. the close key (Escape by default) resets the key buffer and closes overlays;
    /// 6. anything else is recorded, moves the selection (j/k/arrows),
    ///    activates the selection (Enter), then runs the keybind matcher.
    pub fn dispatch_key(&mut self, input: &KeyInput, now: Instant) -> Dispatch {
        if !self.mounted {
            return Dispatch::ignored();
        }

        if self.modals.is_any_open() {
            let dispatch = self.handle_modal_key(input);
            tracing::debug!(key = %input.key, ?dispatch, "Overlay key");
            return dispatch;
        }

        if input.target_is_text_input {
            tracing::debug!(key = %input.key, "Ignoring key inside text input");
            return Dispatch::ignored();
        }

        let default_prevented = input.is_navigation();

        let keys = &self.site.keybinds;
        if input.is_help(keys) {
            self.toggle_help();
            return Dispatch::prevented(None);
        }
        if input.is_theme_toggle(keys) {
            self.toggle_theme();
            return Dispatch::prevented(None);
        }
        if input.is_escape(keys) {
            self.close_modals();
            return Dispatch::prevented(None);
        }

        self.key_buffer.record_key(&input.key, now);

        if input.is_down() {
            self.navigation.move_down();
        } else if input.is_up() {
            self.navigation.move_up();
        }

        let mut action = if input.is_enter() {
            self.activate_selected()
        } else {
            None
        };

        if action.is_none() {
            let sequence = self.key_buffer.joined();
            if let Some(link) = match_keybind(&sequence, &self.site.links) {
                tracing::debug!(%sequence, keybind = %link.keybind, "Keybind matched");
                action = Some(self.activate_link(link));
                self.key_buffer.reset();
            }
        }

        Dispatch {
            action,
            default_prevented,
        }
    }
}
