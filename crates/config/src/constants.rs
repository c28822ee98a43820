//! Centralized constants for the Termfolio workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Key Buffer Defaults
// =============================================================================

/// Maximum number of raw keys kept for keybind matching.
pub const MAX_RECENT_KEYS: usize = 5;

/// Display buffer length past which the next key starts a fresh buffer.
pub const MAX_KEY_BUFFER_LEN: usize = 10;

/// Inactivity window after which the display buffer is cleared, in milliseconds.
pub const KEY_BUFFER_TIMEOUT_MS: u64 = 1500;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds.
///
/// The tick drives the key buffer debounce, so it must be well below
/// `KEY_BUFFER_TIMEOUT_MS`.
pub const DEFAULT_UI_TICK_MS: u64 = 50;

/// Number of rows in the line-number gutter.
pub const DEFAULT_LINE_COUNT: usize = 50;

/// Editor mode shown in the status line while browsing.
pub const DEFAULT_MODE: &str = "NORMAL";

/// Editor mode shown while the command line is focused.
pub const COMMAND_MODE: &str = "COMMAND";

/// Pseudo file name shown in the status line.
pub const DEFAULT_FILE: &str = "~/index.html";

/// Pseudo filetype shown in the status line.
pub const DEFAULT_FILETYPE: &str = "html";

/// Titles longer than this render only their first word as ASCII art.
pub const MAX_FULL_TITLE_LEN: usize = 10;

// =============================================================================
// Environment Variables
// =============================================================================

/// Path to the site configuration file.
pub const ENV_CONFIG_PATH: &str = "TERMFOLIO_CONFIG";

/// Theme to start with (name or 1-based index).
pub const ENV_THEME: &str = "TERMFOLIO_THEME";

/// Title override.
pub const ENV_TITLE: &str = "TERMFOLIO_TITLE";

/// Subtitle override.
pub const ENV_SUBTITLE: &str = "TERMFOLIO_SUBTITLE";
