//! Text input component used by the command line.
//!
//! Wraps `tui_input::Input` so callers deal in key events and strings only.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

/// Single-line text field.
#[derive(Debug, Clone, Default)]
pub struct SingleLineInput {
    input: Input,
}

impl SingleLineInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an editing key. Keys with no editing meaning are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let req = match key.code {
                KeyCode::Left => Some(InputRequest::GoToPrevWord),
                KeyCode::Right => Some(InputRequest::GoToNextWord),
                // Ctrl+U: clear to beginning of line
                KeyCode::Char('u') => Some(InputRequest::DeleteLine),
                // Ctrl+W: delete previous word
                KeyCode::Char('w') => Some(InputRequest::DeletePrevWord),
                KeyCode::Char('a') => Some(InputRequest::GoToStart),
                KeyCode::Char('e') => Some(InputRequest::GoToEnd),
                _ => None,
            };
            if let Some(r) = req {
                self.input.handle(r);
            }
            return;
        }

        let req = match key.code {
            KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
            KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
            KeyCode::Delete => Some(InputRequest::DeleteNextChar),
            KeyCode::Left => Some(InputRequest::GoToPrevChar),
            KeyCode::Right => Some(InputRequest::GoToNextChar),
            KeyCode::Home => Some(InputRequest::GoToStart),
            KeyCode::End => Some(InputRequest::GoToEnd),
            _ => None,
        };

        if let Some(r) = req {
            self.input.handle(r);
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Cursor position as a character index.
    pub fn cursor_position(&self) -> usize {
        self.input.cursor()
    }

    pub fn clear(&mut self) {
        self.input = Input::default();
    }
}
