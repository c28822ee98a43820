//! Overlay rendering for the help and theme switcher modals.
//!
//! Overlays are centered over the page, cleared underneath, and sized to their
//! content (clamped to the screen).

mod help;
mod theme_selector;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub use help::{HELP_TITLE, help_footer, render_help};
pub use theme_selector::{THEME_SELECTOR_TITLE, ThemeSelectorLayout, render_theme_selector};

/// A `width` x `height` rect centered in `r`, clamped to `r`.
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(r.height))])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Length(width.min(r.width))])
        .flex(Flex::Center)
        .areas(row);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_and_clamps() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(40, 20, area), Rect::new(30, 10, 40, 20));

        let small = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect(40, 20, small), small);
    }
}
