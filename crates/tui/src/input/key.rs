//! Browser-style key names for terminal key events.
//!
//! Responsibilities:
//! - Convert crossterm `KeyEvent`s into `KeyInput`s named the way keybinds are written
//!   (`ArrowUp`, `Enter`, `Escape`, printable characters as themselves).
//! - Classify keys for the dispatcher (help, theme toggle, escape, movement).
//!
//! Does NOT handle:
//! - Deciding what a key does (see `app::input`).
//!
//! Invariants:
//! - Characters that need Shift on a US layout always report `shift = true`,
//!   because terminals usually fold Shift into the character itself.
//! - Chorded Ctrl/Alt keys never produce a `KeyInput`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termfolio_config::GlobalKeybinds;
pub use termfolio_config::requires_shift;

/// Keys whose default scrolling behavior is suppressed.
const NAVIGATION_KEYS: [&str; 9] = [
    "ArrowUp",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "j",
    "k",
    "h",
    "l",
    " ",
];

/// A single key press as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// Browser-style key name.
    pub key: String,
    pub shift: bool,
    /// Focus is inside a text input (the command line).
    pub target_is_text_input: bool,
}

impl KeyInput {
    /// A key press with no modifiers, outside any text input.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            shift: false,
            target_is_text_input: false,
        }
    }

    /// A typed character, with Shift inferred from the US layout.
    pub fn from_char(c: char) -> Self {
        Self::new(c.to_string()).with_shift(requires_shift(c))
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    pub fn in_text_input(mut self) -> Self {
        self.target_is_text_input = true;
        self
    }

    /// Convert a terminal key event. Returns `None` for releases, repeats of
    /// chorded keys, and keys with no browser-style name.
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        if event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        let shift = event.modifiers.contains(KeyModifiers::SHIFT);
        let input = match event.code {
            KeyCode::Char(c) => return Some(Self::from_char(c).with_shift(shift || requires_shift(c))),
            KeyCode::Up => Self::new("ArrowUp"),
            KeyCode::Down => Self::new("ArrowDown"),
            KeyCode::Left => Self::new("ArrowLeft"),
            KeyCode::Right => Self::new("ArrowRight"),
            KeyCode::Enter => Self::new("Enter"),
            KeyCode::Esc => Self::new("Escape"),
            KeyCode::Tab => Self::new("Tab"),
            KeyCode::BackTab => return Some(Self::new("Tab").with_shift(true)),
            KeyCode::Backspace => Self::new("Backspace"),
            KeyCode::Delete => Self::new("Delete"),
            KeyCode::Home => Self::new("Home"),
            KeyCode::End => Self::new("End"),
            KeyCode::PageUp => Self::new("PageUp"),
            KeyCode::PageDown => Self::new("PageDown"),
            KeyCode::F(n) => Self::new(format!("F{n}")),
            _ => return None,
        };
        Some(input.with_shift(shift))
    }

    /// The configured help key with Shift (`?` by default).
    pub fn is_help(&self, keys: &GlobalKeybinds) -> bool {
        keys.is_help(&self.key, self.shift)
    }

    /// The configured theme key with Shift (`T`, or `t` with Shift, by default).
    pub fn is_theme_toggle(&self, keys: &GlobalKeybinds) -> bool {
        keys.is_theme_toggle(&self.key, self.shift)
    }

    pub fn is_escape(&self, keys: &GlobalKeybinds) -> bool {
        keys.is_escape(&self.key)
    }

    pub fn is_up(&self) -> bool {
        self.key == "k" || self.key == "ArrowUp"
    }

    pub fn is_down(&self) -> bool {
        self.key == "j" || self.key == "ArrowDown"
    }

    pub fn is_enter(&self) -> bool {
        self.key == "Enter"
    }

    /// Arrow keys, their vim letters, and space.
    pub fn is_navigation(&self) -> bool {
        NAVIGATION_KEYS.contains(&self.key.as_str())
    }
}

/// Map arrow keys to their vim letters; other keys pass through.
pub fn to_vim_key(key: &str) -> &str {
    match key {
        "ArrowUp" => "k",
        "ArrowDown" => "j",
        "ArrowLeft" => "h",
        "ArrowRight" => "l",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn arrows_get_browser_names() {
        let input = KeyInput::from_key_event(&press(KeyCode::Down, KeyModifiers::NONE)).unwrap();
        assert_eq!(input.key, "ArrowDown");
        assert!(input.is_down());
        assert!(input.is_navigation());
    }

    #[test]
    fn question_mark_reports_shift_without_modifier() {
        let input =
            KeyInput::from_key_event(&press(KeyCode::Char('?'), KeyModifiers::NONE)).unwrap();
        assert!(input.shift);
        assert!(input.is_help(&GlobalKeybinds::default()));
    }

    #[test]
    fn lowercase_t_with_shift_toggles_theme() {
        let input =
            KeyInput::from_key_event(&press(KeyCode::Char('t'), KeyModifiers::SHIFT)).unwrap();
        let keys = GlobalKeybinds::default();
        assert!(input.is_theme_toggle(&keys));
        assert!(!KeyInput::from_char('t').is_theme_toggle(&keys));
        assert!(KeyInput::from_char('T').is_theme_toggle(&keys));
    }

    #[test]
    fn releases_and_chords_are_dropped() {
        let release = KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(KeyInput::from_key_event(&release).is_none());
        assert!(KeyInput::from_key_event(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)).is_none());
        assert!(KeyInput::from_key_event(&press(KeyCode::Null, KeyModifiers::NONE)).is_none());
    }

    #[test]
    fn space_is_a_navigation_key() {
        let input =
            KeyInput::from_key_event(&press(KeyCode::Char(' '), KeyModifiers::NONE)).unwrap();
        assert_eq!(input.key, " ");
        assert!(input.is_navigation());
        assert!(!input.shift);
    }

    #[test]
    fn vim_key_mapping() {
        assert_eq!(to_vim_key("ArrowUp"), "k");
        assert_eq!(to_vim_key("ArrowRight"), "l");
        assert_eq!(to_vim_key("g"), "g");
        assert_eq!(to_vim_key("Enter"), "Enter");
    }
}
