//! Validation of loaded configuration values.
//!
//! Responsibilities:
//! - Reject link catalogs with empty or duplicate ids, empty keybinds, or bad URLs.
//! - Reject keybinds that use a key the page consumes first (`:`, help, theme toggle, close).
//! - Assemble the theme catalog from built-ins and user themes.
//! - Resolve a theme selector (name or 1-based index) to a catalog index.
//! - Report keybinds that are suffixes of one another.
//!
//! Invariants:
//! - Overlapping keybinds are reported, never rejected; catalog order decides.

use std::collections::HashSet;

use super::error::ConfigError;
use crate::types::{GlobalKeybinds, Link, Theme, ThemeSpec, builtin_themes};

/// Validate the link catalog against the page-wide keys.
pub(crate) fn validate_links(links: &[Link], keys: &GlobalKeybinds) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for (index, link) in links.iter().enumerate() {
        if link.id.trim().is_empty() {
            return Err(ConfigError::EmptyLinkId { index });
        }
        if !seen.insert(link.id.as_str()) {
            return Err(ConfigError::DuplicateLinkId(link.id.clone()));
        }
        if link.keybind.is_empty() {
            return Err(ConfigError::EmptyKeybind {
                id: link.id.clone(),
            });
        }
        if let Some(key) = link.keybind.chars().find(|&c| keys.claims_char(c)) {
            return Err(ConfigError::UnreachableKeybind {
                id: link.id.clone(),
                keybind: link.keybind.clone(),
                key,
            });
        }
        url::Url::parse(&link.url).map_err(|e| ConfigError::InvalidUrl {
            id: link.id.clone(),
            url: link.url.clone(),
            message: e.to_string(),
        })?;
    }
    Ok(())
}

/// Pairs of link ids whose keybinds overlap by suffix, in catalog order.
///
/// With `gx` before `ggx`, typing `ggx` activates `gx`.
pub fn keybind_overlaps(links: &[Link]) -> Vec<(String, String)> {
    let mut overlaps = Vec::new();
    for (i, first) in links.iter().enumerate() {
        for second in &links[i + 1..] {
            if first.keybind.is_empty() || second.keybind.is_empty() {
                continue;
            }
            if first.keybind.ends_with(&second.keybind) || second.keybind.ends_with(&first.keybind)
            {
                overlaps.push((first.id.clone(), second.id.clone()));
            }
        }
    }
    overlaps
}

/// Built-in themes followed by user themes.
pub(crate) fn build_theme_catalog(specs: &[ThemeSpec]) -> Result<Vec<Theme>, ConfigError> {
    let mut themes = builtin_themes();
    for spec in specs {
        if themes
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(&spec.name))
        {
            return Err(ConfigError::DuplicateTheme(spec.name.clone()));
        }
        let theme = Theme::try_from(spec).map_err(|source| ConfigError::InvalidColor {
            theme: spec.name.clone(),
            source,
        })?;
        themes.push(theme);
    }
    Ok(themes)
}

/// Resolve a theme selector to an index into `themes`.
///
/// Names match case-insensitively; numbers are 1-based.
pub fn resolve_theme(selector: &str, themes: &[Theme]) -> Result<usize, ConfigError> {
    let selector = selector.trim();
    if let Some(index) = themes
        .iter()
        .position(|t| t.name.eq_ignore_ascii_case(selector))
    {
        return Ok(index);
    }

    match selector.parse::<usize>() {
        Ok(n) if (1..=themes.len()).contains(&n) => Ok(n - 1),
        _ => Err(ConfigError::UnknownTheme {
            selector: selector.to_string(),
            available: themes
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SiteConfig;

    #[test]
    fn test_default_links_are_valid() {
        assert!(validate_links(&SiteConfig::default().links, &GlobalKeybinds::default()).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let links = vec![
            Link::new("a", "A", "https://a.example", "ga"),
            Link::new("a", "A again", "https://b.example", "gb"),
        ];
        assert!(matches!(
            validate_links(&links, &GlobalKeybinds::default()),
            Err(ConfigError::DuplicateLinkId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_rejects_empty_keybind_and_bad_url() {
        let empty = vec![Link::new("a", "A", "https://a.example", "")];
        assert!(matches!(
            validate_links(&empty, &GlobalKeybinds::default()),
            Err(ConfigError::EmptyKeybind { .. })
        ));

        let bad_url = vec![Link::new("a", "A", "not a url", "ga")];
        assert!(matches!(
            validate_links(&bad_url, &GlobalKeybinds::default()),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_keybinds_the_page_consumes() {
        let keys = GlobalKeybinds::default();
        for keybind in ["g?", "g:", "gT"] {
            let links = vec![Link::new("a", "A", "https://a.example", keybind)];
            assert!(
                matches!(
                    validate_links(&links, &keys),
                    Err(ConfigError::UnreachableKeybind { ref id, .. }) if id == "a"
                ),
                "{keybind} should be rejected"
            );
        }

        let shifted_letter = vec![Link::new("a", "A", "https://a.example", "gG")];
        assert!(validate_links(&shifted_letter, &keys).is_ok());
    }

    #[test]
    fn test_configured_escape_key_is_reserved() {
        let keys = GlobalKeybinds {
            escape: "q".to_string(),
            ..GlobalKeybinds::default()
        };
        let links = vec![Link::new("a", "A", "https://a.example", "gq")];
        assert!(matches!(
            validate_links(&links, &keys),
            Err(ConfigError::UnreachableKeybind { key: 'q', .. })
        ));
    }

    #[test]
    fn test_keybind_overlaps_reports_suffix_pairs() {
        let links = vec![
            Link::new("x", "X", "https://x.example", "gx"),
            Link::new("xx", "XX", "https://xx.example", "ggx"),
            Link::new("y", "Y", "https://y.example", "gy"),
        ];
        assert_eq!(
            keybind_overlaps(&links),
            vec![("x".to_string(), "xx".to_string())]
        );
        assert!(keybind_overlaps(&SiteConfig::default().links).is_empty());
    }

    #[test]
    fn test_resolve_theme_by_name_and_index() {
        let themes = builtin_themes();
        assert_eq!(resolve_theme("claude", &themes).unwrap(), 2);
        assert_eq!(resolve_theme(" Light ", &themes).unwrap(), 3);
        assert_eq!(resolve_theme("1", &themes).unwrap(), 0);
        assert!(resolve_theme("0", &themes).is_err());
        assert!(resolve_theme("5", &themes).is_err());
        assert!(matches!(
            resolve_theme("solarized", &themes),
            Err(ConfigError::UnknownTheme { .. })
        ));
    }
}
