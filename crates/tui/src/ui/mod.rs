//! UI rendering modules for the TUI.
//!
//! Widgets and overlays are free of `App`; `app::render` wires them together.

pub mod components;
pub mod icons;
pub mod popup;
pub mod theme;
pub mod toast;

pub use icons::{available_icon_ids, has_icon, icon_for_link, link_icon};
pub use theme::ThemeExt;
pub use toast::{Toast, ToastLevel, render_toasts};
