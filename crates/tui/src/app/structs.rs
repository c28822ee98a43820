//! App struct definition.
//!
//! Responsibilities:
//! - Define the main App struct and its fields
//!
//! Does NOT handle:
//! - Does NOT implement behavior methods (see lifecycle.rs, input.rs, actions.rs)

use ratatui::layout::Rect;
use termfolio_config::SiteConfig;

use crate::app::command_line::CommandLine;
use crate::app::state::{ModalState, NavigationState};
use crate::app::theme_manager::ThemeManager;
use crate::input::KeyBuffer;
use crate::ui::Toast;

/// Main application state. One per session.
pub struct App {
    pub site: SiteConfig,
    pub navigation: NavigationState,
    pub key_buffer: KeyBuffer,
    pub modals: ModalState,
    pub themes: ThemeManager,
    /// Cursor inside the theme switcher; starts at the active theme when it opens.
    pub theme_focus: usize,
    pub command_line: CommandLine,
    pub toasts: Vec<Toast>,
    pub mouse_enabled: bool,
    /// Screen areas of the link rows from the last render, for mouse hit-testing.
    pub link_areas: Vec<Rect>,
    /// Open overlay's area from the last render.
    pub popup_area: Option<Rect>,
    /// Theme switcher rows from the last render.
    pub theme_row_areas: Vec<Rect>,
    pub last_area: Rect,
    pub(crate) mounted: bool,
}
