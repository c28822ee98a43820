//! Widgets that make up the portfolio page.
//!
//! - [`AsciiTitle`]: Big-text page title with size fitting and raw fallback
//! - [`LineNumberGutter`]: Editor-style line numbers with `~` filler
//! - [`LinkList`]: The selectable link rows
//! - [`StatusLine`]: Mode badge, file, hints, theme, and position

pub mod big_text;
pub mod line_numbers;
pub mod link_list;
pub mod status_line;

pub use big_text::AsciiTitle;
pub use line_numbers::LineNumberGutter;
pub use link_list::LinkList;
pub use status_line::{HELP_HINT, StatusLine};
