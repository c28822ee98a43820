//! Link selection and activation handles.
//!
//! Responsibilities:
//! - Move and set the selection
//! - Turn a link into an `OpenLink` action
//!
//! Non-responsibilities:
//! - Does NOT open anything (handled by runtime side effects)

use termfolio_config::Link;

use crate::action::Action;
use crate::app::structs::App;

impl App {
    /// Request that `link` be opened.
    pub fn activate_link(&self, link: &Link) -> Action {
        tracing::info!(id = %link.id, url = %link.url, "Activating link");
        Action::OpenLink {
            title: link.title.clone(),
            url: link.url.clone(),
        }
    }

    /// Activate the link under the cursor; nothing for an empty list.
    pub fn activate_selected(&self) -> Option<Action> {
        self.navigation
            .activate_selected(&self.site.links)
            .map(|link| self.activate_link(link))
    }

    pub fn select_link(&mut self, index: usize) {
        self.navigation.select(index);
    }

    pub fn selected_index(&self) -> usize {
        self.navigation.selected()
    }
}
