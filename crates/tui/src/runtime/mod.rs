//! Runtime components for the TUI application.
//!
//! - Terminal management (`TerminalGuard`)
//! - Configuration loading (`load_config`)
//! - The global input listener (`InputListener`)
//! - Async side effects (opening links)
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `termfolio::app` and `termfolio::ui`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.
//! - Side effects run in tracked tokio tasks to avoid blocking the UI.

pub mod config;
pub mod listener;
pub mod side_effects;
pub mod terminal;
