//! Icon glyphs for links, keyed by link id.
//!
//! Glyphs come from the Nerd Fonts Font Awesome range, which most
//! editor-oriented terminal fonts ship.

use termfolio_config::Link;

const ICONS: [(&str, &str); 5] = [
    ("github", "\u{f09b}"),
    ("twitter", "\u{f099}"),
    ("linkedin", "\u{f0e1}"),
    ("youtube", "\u{f16a}"),
    ("email", "\u{f0e0}"),
];

pub fn icon_for_link(id: &str) -> Option<&'static str> {
    ICONS
        .iter()
        .find(|(icon_id, _)| *icon_id == id)
        .map(|(_, glyph)| *glyph)
}

pub fn has_icon(id: &str) -> bool {
    icon_for_link(id).is_some()
}

pub fn available_icon_ids() -> impl Iterator<Item = &'static str> {
    ICONS.iter().map(|(id, _)| *id)
}

/// The link's explicit icon, else the lookup by id.
pub fn link_icon(link: &Link) -> Option<&str> {
    link.icon.as_deref().or_else(|| icon_for_link(&link.id))
}
