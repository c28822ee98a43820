//! Page-wide keys and how a key press is matched against them.
//!
//! Responsibilities:
//! - Define `GlobalKeybinds` (help, theme toggle, close) with their defaults.
//! - Decide whether a browser-style key name triggers one of them.
//! - Report which typed characters the page consumes before keybind matching.
//!
//! Invariants:
//! - Help and theme toggle require Shift; a key that already needs Shift on a
//!   US layout (`?`, uppercase letters) counts as shifted.
//! - `Esc` and `Escape` name the same key.

use serde::{Deserialize, Serialize};

/// Opens the command line from the page.
pub const COMMAND_LINE_KEY: char = ':';

const SHIFTED_SYMBOLS: &str = "~!@#$%^&*()_+{}|:\"<>?";

const ESCAPE_NAMES: [&str; 2] = ["Escape", "Esc"];

/// Whether typing `c` needs Shift on a US keyboard.
pub fn requires_shift(c: char) -> bool {
    c.is_ascii_uppercase() || SHIFTED_SYMBOLS.contains(c)
}

/// Keys handled by the page before link keybinds, as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalKeybinds {
    /// Pressed with Shift to toggle the help overlay.
    pub help: String,
    /// Pressed with Shift to toggle the theme switcher.
    pub toggle_theme: String,
    /// Closes overlays and clears the key buffer.
    pub escape: String,
}

impl Default for GlobalKeybinds {
    fn default() -> Self {
        Self {
            help: "?".to_string(),
            toggle_theme: "T".to_string(),
            escape: "Escape".to_string(),
        }
    }
}

impl GlobalKeybinds {
    pub fn is_help(&self, key: &str, shift: bool) -> bool {
        shift && key.eq_ignore_ascii_case(&self.help)
    }

    /// `T`, or `t` with Shift, for the default binding.
    pub fn is_theme_toggle(&self, key: &str, shift: bool) -> bool {
        shift && key.eq_ignore_ascii_case(&self.toggle_theme)
    }

    pub fn is_escape(&self, key: &str) -> bool {
        key == self.escape
            || (ESCAPE_NAMES.contains(&key) && ESCAPE_NAMES.contains(&self.escape.as_str()))
    }

    /// Whether typing `c` on the page is consumed before it reaches the key buffer.
    pub fn claims_char(&self, c: char) -> bool {
        if c == COMMAND_LINE_KEY {
            return true;
        }
        let key = c.to_string();
        let shift = requires_shift(c);
        self.is_help(&key, shift) || self.is_theme_toggle(&key, shift) || self.is_escape(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys_match_like_a_browser() {
        let keys = GlobalKeybinds::default();
        assert!(keys.is_help("?", true));
        assert!(!keys.is_help("?", false));
        assert!(keys.is_theme_toggle("T", true));
        assert!(keys.is_theme_toggle("t", true));
        assert!(!keys.is_theme_toggle("t", false));
        assert!(keys.is_escape("Escape"));
        assert!(!keys.is_escape("q"));
    }

    #[test]
    fn configured_escape_replaces_default() {
        let keys = GlobalKeybinds {
            escape: "q".to_string(),
            ..GlobalKeybinds::default()
        };
        assert!(keys.is_escape("q"));
        assert!(!keys.is_escape("Escape"));

        let alias = GlobalKeybinds {
            escape: "Esc".to_string(),
            ..GlobalKeybinds::default()
        };
        assert!(alias.is_escape("Escape"));
    }

    #[test]
    fn claimed_chars_follow_configuration() {
        let keys = GlobalKeybinds::default();
        assert!(keys.claims_char('?'));
        assert!(keys.claims_char('T'));
        assert!(keys.claims_char(':'));
        assert!(!keys.claims_char('t'));
        assert!(!keys.claims_char('G'));
        assert!(!keys.claims_char('g'));

        let custom = GlobalKeybinds {
            help: "h".to_string(),
            toggle_theme: "T".to_string(),
            escape: "q".to_string(),
        };
        assert!(custom.claims_char('H'));
        assert!(!custom.claims_char('h'));
        assert!(custom.claims_char('q'));
    }

    #[test]
    fn partial_keybinds_keep_defaults() {
        let keys: GlobalKeybinds = serde_json::from_str(r#"{"escape": "q"}"#).unwrap();
        assert_eq!(keys.escape, "q");
        assert_eq!(keys.help, "?");
        assert_eq!(keys.toggle_theme, "T");
    }
}