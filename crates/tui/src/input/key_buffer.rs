//! Recent-key tracking for multi-key keybinds.
//!
//! Two views of the same keystrokes are kept:
//! - the raw recent keys (last `MAX_RECENT_KEYS`), which keybind matching reads;
//! - the display buffer of vim-style keys, shown as `KEYS:` and cleared after
//!   `KEY_BUFFER_TIMEOUT_MS` of inactivity.
//!
//! Time is passed in explicitly so the debounce can be driven by the UI tick
//! and by tests without sleeping.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use termfolio_config::constants::{KEY_BUFFER_TIMEOUT_MS, MAX_KEY_BUFFER_LEN, MAX_RECENT_KEYS};

use crate::input::key::to_vim_key;

#[derive(Debug, Clone)]
pub struct KeyBuffer {
    recent: VecDeque<String>,
    display: String,
    deadline: Option<Instant>,
    timeout: Duration,
}

impl Default for KeyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBuffer {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_millis(KEY_BUFFER_TIMEOUT_MS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            recent: VecDeque::with_capacity(MAX_RECENT_KEYS + 1),
            display: String::new(),
            deadline: None,
            timeout,
        }
    }

    /// Record a key press at `now` and restart the inactivity timer.
    ///
    /// If the display buffer is already longer than `MAX_KEY_BUFFER_LEN`, it
    /// restarts with just this key.
    pub fn record_key(&mut self, key: &str, now: Instant) {
        self.recent.push_back(key.to_string());
        while self.recent.len() > MAX_RECENT_KEYS {
            self.recent.pop_front();
        }

        if self.display.chars().count() > MAX_KEY_BUFFER_LEN {
            self.display.clear();
        }
        self.display.push_str(to_vim_key(key));

        self.deadline = Some(now + self.timeout);
    }

    /// Clear the display buffer if the inactivity timer has fired.
    ///
    /// Returns true exactly once per quiet period.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.display.clear();
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop both views and any pending timer.
    pub fn reset(&mut self) {
        self.recent.clear();
        self.display.clear();
        self.deadline = None;
    }

    /// Cancel the pending timer without touching the buffers.
    pub fn cancel_timer(&mut self) {
        self.deadline = None;
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn recent_keys(&self) -> impl Iterator<Item = &str> {
        self.recent.iter().map(String::as_str)
    }

    /// Raw recent keys concatenated, oldest first.
    pub fn joined(&self) -> String {
        self.recent.iter().map(String::as_str).collect()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_timer_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
