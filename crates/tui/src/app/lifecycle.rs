//! Core App lifecycle methods.
//!
//! Responsibilities:
//! - App construction (new, default)
//! - Teardown (`unmount`)
//!
//! Does NOT handle:
//! - Does NOT handle runtime updates (see actions.rs)
//! - Does NOT handle input (see input.rs)
//! - Does NOT render (see render.rs)

use ratatui::layout::Rect;
use termfolio_config::constants::{COMMAND_MODE, DEFAULT_MODE};
use termfolio_config::{LoadedConfig, Theme};

use crate::app::command_line::CommandLine;
use crate::app::state::{ModalState, NavigationState};
use crate::app::structs::App;
use crate::app::theme_manager::ThemeManager;
use crate::input::KeyBuffer;

impl Default for App {
    fn default() -> Self {
        Self::new(LoadedConfig::default())
    }
}

impl App {
    /// Create a mounted App from resolved configuration. Mouse support starts enabled.
    pub fn new(config: LoadedConfig) -> Self {
        let LoadedConfig {
            site,
            themes,
            theme_index,
            ..
        } = config;
        let themes = ThemeManager::new(themes, theme_index);

        Self {
            navigation: NavigationState::new(site.links.len()),
            site,
            key_buffer: KeyBuffer::new(),
            modals: ModalState::default(),
            theme_focus: themes.index(),
            themes,
            command_line: CommandLine::default(),
            toasts: Vec::new(),
            mouse_enabled: true,
            link_areas: Vec::new(),
            popup_area: None,
            theme_row_areas: Vec::new(),
            last_area: Rect::default(),
            mounted: true,
        }
    }

    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Tear down the session: cancel the pending debounce and stop reacting to input.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.key_buffer.cancel_timer();
        self.command_line.close();
        tracing::debug!("App unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn theme(&self) -> &Theme {
        self.themes.current()
    }

    /// Editor mode shown in the status line.
    pub fn mode(&self) -> &'static str {
        if self.command_line.is_active() {
            COMMAND_MODE
        } else {
            DEFAULT_MODE
        }
    }
}
