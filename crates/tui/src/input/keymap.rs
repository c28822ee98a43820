//! Keybinding catalog shown in the help overlay.
//!
//! Responsibilities:
//! - List every key the page reacts to, grouped into sections.
//! - Derive the Navigation section from the site's link catalog.
//!
//! Does NOT handle:
//! - Resolving keys (see `app::input` and `input::matcher`).
//!
//! Invariants:
//! - Navigation entries follow link catalog order.
//! - General entries are stable and ordered for rendering.

use termfolio_config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Navigation,
    General,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::General => "General",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub section: Section,
    pub keys: String,
    pub description: String,
    /// Link id for navigation entries, used for icon lookup.
    pub link_id: Option<String>,
}

impl Keybinding {
    fn general(keys: impl Into<String>, description: &str) -> Self {
        Self {
            section: Section::General,
            keys: keys.into(),
            description: description.to_string(),
            link_id: None,
        }
    }
}

/// All keybindings for `site`, navigation first.
pub fn keybindings(site: &SiteConfig) -> Vec<Keybinding> {
    let mut bindings: Vec<Keybinding> = site
        .links
        .iter()
        .map(|link| Keybinding {
            section: Section::Navigation,
            keys: link.keybind.clone(),
            description: link.title.clone(),
            link_id: Some(link.id.clone()),
        })
        .collect();

    let keys = &site.keybinds;
    bindings.extend([
        Keybinding::general(format!("Shift + {}", keys.help), "Toggle Help"),
        Keybinding::general(format!("Shift + {}", keys.toggle_theme), "Toggle Theme"),
        Keybinding::general(keys.escape.clone(), "Close/Cancel"),
        Keybinding::general("j / k", "Move selection"),
        Keybinding::general("Enter", "Open selected link"),
        Keybinding::general(":", "Command line"),
        Keybinding::general("Ctrl+C / :q", "Quit"),
    ]);
    bindings
}

/// Bindings for one section, in catalog order.
pub fn section(site: &SiteConfig, section: Section) -> Vec<Keybinding> {
    keybindings(site)
        .into_iter()
        .filter(|binding| binding.section == section)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_config::Link;

    #[test]
    fn navigation_follows_link_order() {
        let site = SiteConfig::default();
        let nav = section(&site, Section::Navigation);
        let keys: Vec<_> = nav.iter().map(|b| b.keys.as_str()).collect();
        assert_eq!(keys, ["ggh", "gx", "gli", "gyt", "gcm"]);
        assert_eq!(nav[4].description, "Contact Me");
        assert_eq!(nav[0].link_id.as_deref(), Some("github"));
    }

    #[test]
    fn general_uses_configured_display_strings() {
        let mut site = SiteConfig::default();
        site.links = vec![Link::new("blog", "Blog", "https://blog.example", "gb")];
        site.keybinds.escape = "Esc".to_string();

        let general = section(&site, Section::General);
        assert_eq!(general[0].keys, "Shift + ?");
        assert_eq!(general[1].keys, "Shift + T");
        assert_eq!(general[2].keys, "Esc");
        assert_eq!(general[2].description, "Close/Cancel");
    }
}
