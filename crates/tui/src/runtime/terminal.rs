//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen, with optional mouse capture.
//! - Restore the terminal on drop, including during panics.
//!
//! Invariants / Assumptions:
//! - Must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use std::io;

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};

/// Guard that ensures terminal state is restored on drop.
pub struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen; capture the mouse when `mouse` is set.
    pub fn enter(mouse: bool, title: &str) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, Drop restores whatever was switched on.
        let guard = Self { mouse };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, SetTitle(title))?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
    }
}
