//! Test helpers for TUI testing.
//!
//! Provides utility functions for simulating keyboard and mouse input and
//! creating test fixtures for the TUI application.

#![allow(dead_code)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use termfolio::App;
use termfolio::action::Action;
use termfolio_config::{GlobalKeybinds, Link, LoadedConfig, SiteConfig};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create a character key event with Shift held.
pub fn shift_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create an Up arrow key event.
pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

/// Create a Backspace key event.
pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Create a key release event.
pub fn release(c: char) -> KeyEvent {
    KeyEvent::new_with_kind(KeyCode::Char(c), KeyModifiers::NONE, KeyEventKind::Release)
}

/// Create a mouse event of `kind` at (`column`, `row`).
pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Left click at (`column`, `row`).
pub fn click(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// Feed every character of `text` to the app, returning the last action.
pub fn type_keys(app: &mut App, text: &str) -> Option<Action> {
    let mut last = None;
    for c in text.chars() {
        last = app.handle_input(key(c));
    }
    last
}

/// Feed every character of `text`, collecting each action produced.
pub fn type_collect(app: &mut App, text: &str) -> Vec<Action> {
    text.chars().filter_map(|c| app.handle_input(key(c))).collect()
}

/// An app with a small custom catalog.
pub fn app_with_links(links: Vec<Link>) -> App {
    let site = SiteConfig {
        links,
        ..SiteConfig::default()
    };
    App::new(LoadedConfig {
        site,
        ..LoadedConfig::default()
    })
}

/// An app with the default catalog and custom page-wide keys.
pub fn app_with_keybinds(keybinds: GlobalKeybinds) -> App {
    let site = SiteConfig {
        keybinds,
        ..SiteConfig::default()
    };
    App::new(LoadedConfig {
        site,
        ..LoadedConfig::default()
    })
}

/// Title of an `OpenLink` action.
pub fn opened_title(action: &Option<Action>) -> Option<&str> {
    match action {
        Some(Action::OpenLink { title, .. }) => Some(title.as_str()),
        _ => None,
    }
}
