//! Keyboard input primitives for the portfolio page.
//!
//! Responsibilities:
//! - Normalize terminal key events into browser-style key names (`key`).
//! - Track recent keys and the debounced display buffer (`key_buffer`).
//! - Match recent keys against link keybinds (`matcher`).
//! - Describe the keybinding catalog for the help overlay (`keymap`).
//!
//! Non-responsibilities:
//! - Mutating application state (handled by `App`).

pub mod key;
pub mod key_buffer;
pub mod keymap;
pub mod matcher;

pub use key::{KeyInput, requires_shift, to_vim_key};
pub use key_buffer::KeyBuffer;
pub use matcher::match_keybind;
