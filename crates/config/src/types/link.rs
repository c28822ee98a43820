//! Link and site content types.
//!
//! Responsibilities:
//! - Define the `Link` catalog entry and the `SiteConfig` content model.
//! - Provide the built-in site used when no configuration file is present.
//!
//! Does NOT handle:
//! - Validation of user-supplied values (see `loader::validate`).
//! - Keybind matching (see the TUI crate's input module).

use serde::{Deserialize, Serialize};

use super::keys::GlobalKeybinds;

/// A navigable link on the portfolio page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Stable identifier, also used for icon lookup.
    pub id: String,
    /// Text shown in the list.
    pub title: String,
    /// Target opened on activation.
    pub url: String,
    /// Literal key sequence that activates the link (e.g. `ggh`).
    pub keybind: String,
    /// Explicit icon glyph, overriding the lookup by `id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Link {
    /// Create a link without an explicit icon.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        keybind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            keybind: keybind.into(),
            icon: None,
        }
    }
}

/// Content of the portfolio page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Terminal window title.
    pub page_title: String,
    /// Rendered as ASCII art.
    pub title: String,
    pub subtitle: String,
    /// Link catalog, in display and match order.
    pub links: Vec<Link>,
    pub keybinds: GlobalKeybinds,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_title: "Sree N | @eersnington".to_string(),
            title: "Sree N".to_string(),
            subtitle: "TypeScript & Go SWE | Developing apps for 8yrs+".to_string(),
            links: vec![
                Link::new("github", "GitHub", "https://github.com/eersnington", "ggh"),
                Link::new("twitter", "Twitter", "https://twitter.com/eersnington", "gx"),
                Link::new(
                    "linkedin",
                    "LinkedIn",
                    "https://www.linkedin.com/in/sreenington",
                    "gli",
                ),
                Link::new(
                    "youtube",
                    "YouTube",
                    "https://youtube.com/@CrazyDanTHEMinecrafter",
                    "gyt",
                ),
                Link::new("email", "Contact Me", "mailto:sreeaadhi07@gmail.com", "gcm"),
            ],
            keybinds: GlobalKeybinds::default(),
        }
    }
}

impl SiteConfig {
    /// Find a link by its identifier.
    pub fn link(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.id == id)
    }
}
