//! Action protocol for async TUI event handling.
//!
//! Actions flow through a channel from the input listener and side-effect
//! tasks to the main loop, where `App` turns them into state changes.
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by `App::update`)
//! - Async task execution (handled by the runtime module)

use crossterm::event::{KeyEvent, MouseEvent};

use crate::ui::ToastLevel;

/// Unified action type for async TUI event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // System
    /// Quit the application
    Quit,
    /// Periodic UI tick; drives the key buffer debounce and toast expiry
    Tick,
    /// Terminal resized to (width, height)
    Resize(u16, u16),

    // Input
    /// Raw keyboard press
    Input(KeyEvent),
    /// Raw mouse event
    Mouse(MouseEvent),

    // Side effects
    /// Open a link target in the system handler
    OpenLink { title: String, url: String },
    /// Opening a link failed
    LinkOpenFailed { title: String, error: String },

    // UI
    /// Show a transient notification
    Notify(ToastLevel, String),
}
