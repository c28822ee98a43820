//! Application state and rendering.
//!
//! The module is organized into submodules:
//! - `structs`: The `App` struct
//! - `lifecycle`: Construction and lifecycle (`new`, `unmount`)
//! - `state`: Navigation and modal state types
//! - `theme_manager`: Active theme selection
//! - `navigation`: Link selection and activation handles
//! - `popups`: Overlay toggles and the overlays' own key listeners
//! - `input`: The keyboard dispatcher
//! - `command_line`: The `:` prompt and its commands
//! - `mouse`: Mouse hover and click handling
//! - `actions`: Action handling
//! - `render`: Rendering logic

mod actions;
pub mod command_line;
pub mod input;
mod lifecycle;
mod mouse;
mod navigation;
mod popups;
mod render;
pub mod state;
mod structs;
pub mod theme_manager;

pub use command_line::{Command, CommandError, CommandLine};
pub use input::Dispatch;
pub use state::{ModalState, NavigationState};
pub use structs::App;
pub use theme_manager::ThemeManager;
