//! Termfolio library.
//!
//! The application state machine, key handling, widgets, and runtime pieces
//! behind the `termfolio` binary.
//!
//! # Example
//!
//! ```rust
//! use termfolio::{Action, App};
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let mut app = App::default();
//! let mut opened = None;
//! for c in "ggh".chars() {
//!     opened = app.handle_input(KeyEvent::from(KeyCode::Char(c)));
//! }
//! assert!(matches!(opened, Some(Action::OpenLink { .. })));
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod input;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, Dispatch};
pub use input::KeyInput;
pub use ui::toast::{Toast, ToastLevel};
