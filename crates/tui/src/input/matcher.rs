//! Suffix matching of recent keys against link keybinds.

use termfolio_config::Link;

/// Find the first link (in catalog order) whose keybind is a suffix of `sequence`.
///
/// Links with an empty keybind never match.
pub fn match_keybind<'a>(sequence: &str, links: &'a [Link]) -> Option<&'a Link> {
    links
        .iter()
        .find(|link| !link.keybind.is_empty() && sequence.ends_with(link.keybind.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_config::SiteConfig;

    #[test]
    fn matches_suffix() {
        let site = SiteConfig::default();
        let link = match_keybind("xxggh", &site.links).unwrap();
        assert_eq!(link.id, "github");
        assert!(match_keybind("gg", &site.links).is_none());
    }

    #[test]
    fn first_link_wins_on_overlap() {
        let links = vec![
            Link::new("a", "A", "https://a.example", "gx"),
            Link::new("b", "B", "https://b.example", "x"),
        ];
        assert_eq!(match_keybind("gx", &links).unwrap().id, "a");
        assert_eq!(match_keybind("zx", &links).unwrap().id, "b");
    }

    #[test]
    fn empty_keybind_never_matches() {
        let links = vec![Link::new("a", "A", "https://a.example", "")];
        assert!(match_keybind("anything", &links).is_none());
        assert!(match_keybind("", &links).is_none());
    }
}
