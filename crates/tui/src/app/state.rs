//! Selection and overlay state owned by `App`.
//!
//! Responsibilities:
//! - Keep the selected link index inside the list bounds (`NavigationState`)
//! - Keep the help and theme overlays mutually exclusive (`ModalState`)
//!
//! Does NOT handle:
//! - Does NOT decide which key triggers which transition (see `app::input`)
//! - Does NOT render anything
//!
//! Invariants:
//! - `selected < len` for a non-empty list; an empty list pins `selected` at 0
//! - At most one overlay is open

use termfolio_config::Link;

/// Selected row within the link list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    selected: usize,
    len: usize,
}

impl NavigationState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1).min(self.last());
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Select `index`, clamped to the list bounds.
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.last());
    }

    /// The link under the cursor, or `None` for an empty list.
    pub fn activate_selected<'a>(&self, links: &'a [Link]) -> Option<&'a Link> {
        links.get(self.selected)
    }

    fn last(&self) -> usize {
        self.len.saturating_sub(1)
    }
}

/// Visibility of the help and theme overlays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    help_open: bool,
    theme_open: bool,
}

impl ModalState {
    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn theme_open(&self) -> bool {
        self.theme_open
    }

    pub fn toggle_help(&mut self) {
        self.help_open = !self.help_open;
        self.theme_open = false;
    }

    pub fn toggle_theme(&mut self) {
        self.theme_open = !self.theme_open;
        self.help_open = false;
    }

    pub fn close_all(&mut self) {
        self.help_open = false;
        self.theme_open = false;
    }

    pub fn is_any_open(&self) -> bool {
        self.help_open || self.theme_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut nav = NavigationState::new(3);
        nav.move_up();
        assert_eq!(nav.selected(), 0);
        nav.move_down();
        nav.move_down();
        nav.move_down();
        assert_eq!(nav.selected(), 2);
        nav.select(99);
        assert_eq!(nav.selected(), 2);
        nav.select(1);
        assert_eq!(nav.selected(), 1);
    }

    #[test]
    fn empty_list_pins_selection() {
        let mut nav = NavigationState::new(0);
        nav.move_down();
        nav.select(4);
        assert_eq!(nav.selected(), 0);
        assert!(nav.activate_selected(&[]).is_none());
    }

    #[test]
    fn opening_one_modal_closes_the_other() {
        let mut modals = ModalState::default();
        modals.toggle_help();
        modals.toggle_theme();
        assert!(!modals.help_open());
        assert!(modals.theme_open());

        modals.toggle_theme();
        assert!(!modals.is_any_open());
    }

    #[test]
    fn close_all_closes_both() {
        let mut modals = ModalState::default();
        modals.toggle_help();
        modals.close_all();
        assert_eq!(modals, ModalState::default());
    }
}
