//! Overlay handles and the overlays' own key listeners.
//!
//! Responsibilities:
//! - Toggle and close the help and theme overlays
//! - Apply a theme by index
//! - Handle keys while an overlay is open (capture priority over global keys)
//!
//! Non-responsibilities:
//! - Does NOT render overlays (handled by ui::popup)

use crate::app::input::Dispatch;
use crate::app::structs::App;
use crate::input::KeyInput;

impl App {
    /// Flip the help overlay; closes the theme overlay.
    pub fn toggle_help(&mut self) {
        self.modals.toggle_help();
        self.key_buffer.reset();
        tracing::debug!(open = self.modals.help_open(), "Toggled help");
    }

    /// Flip the theme overlay; closes help. The switcher cursor starts at the active theme.
    pub fn toggle_theme(&mut self) {
        self.modals.toggle_theme();
        self.key_buffer.reset();
        if self.modals.theme_open() {
            self.theme_focus = self.themes.index();
        }
        tracing::debug!(open = self.modals.theme_open(), "Toggled theme switcher");
    }

    pub fn close_modals(&mut self) {
        self.modals.close_all();
        self.key_buffer.reset();
    }

    /// Apply theme `index` if it is inside the catalog; anything else is ignored.
    pub fn set_theme<I: TryInto<usize>>(&mut self, index: I) -> bool {
        let applied = self.themes.set_theme(index);
        if applied {
            tracing::debug!(theme = %self.themes.current().name, "Theme applied");
        }
        applied
    }

    /// Key handling while an overlay is open. Keybinds and selection never see these keys.
    pub(crate) fn handle_modal_key(&mut self, input: &KeyInput) -> Dispatch {
        let keys = &self.site.keybinds;
        if input.is_escape(keys) {
            self.close_modals();
            return Dispatch::prevented(None);
        }
        if input.is_help(keys) {
            self.toggle_help();
            return Dispatch::prevented(None);
        }
        if input.is_theme_toggle(keys) {
            self.toggle_theme();
            return Dispatch::prevented(None);
        }

        if self.modals.theme_open() {
            return self.handle_theme_switcher_key(input);
        }
        Dispatch::ignored()
    }

    fn handle_theme_switcher_key(&mut self, input: &KeyInput) -> Dispatch {
        let last = self.themes.len().saturating_sub(1);
        if input.is_down() {
            self.theme_focus = (self.theme_focus + 1).min(last);
        } else if input.is_up() {
            self.theme_focus = self.theme_focus.saturating_sub(1);
        } else if input.is_enter() {
            if self.set_theme(self.theme_focus) {
                self.close_modals();
            }
        } else {
            return Dispatch::ignored();
        }
        Dispatch::prevented(None)
    }
}
