//! Property-based tests for configuration parsing.
//!
//! Test coverage:
//! - Hex colors: every `#RRGGBB` string parses to the matching RGB triple.
//! - Theme selectors: every in-range 1-based index resolves, everything else fails.
//! - Keybind overlaps: a keybind prefixed with extra keys always overlaps the original.

use proptest::prelude::*;
use ratatui::style::Color;

use termfolio_config::types::parse_hex_color;
use termfolio_config::{Link, builtin_themes, keybind_overlaps, resolve_theme};

proptest! {
    #[test]
    fn prop_hex_colors_parse(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), upper in any::<bool>()) {
        let text = if upper {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        };
        prop_assert_eq!(parse_hex_color(&text), Ok(Color::Rgb(r, g, b)));
    }

    #[test]
    fn prop_short_hex_is_rejected(hex in "[0-9a-fA-F]{0,5}") {
        let text = format!("#{hex}");
        prop_assert!(parse_hex_color(&text).is_err());
    }

    #[test]
    fn prop_theme_index_selector(n in 0usize..20) {
        let themes = builtin_themes();
        let result = resolve_theme(&n.to_string(), &themes);
        if (1..=themes.len()).contains(&n) {
            prop_assert_eq!(result.unwrap(), n - 1);
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn prop_prefixed_keybind_overlaps(base in "[a-z]{1,3}", prefix in "[a-z]{1,3}") {
        let links = vec![
            Link::new("short", "Short", "https://a.example", base.clone()),
            Link::new("long", "Long", "https://b.example", format!("{prefix}{base}")),
        ];
        prop_assert_eq!(
            keybind_overlaps(&links),
            vec![("short".to_string(), "long".to_string())]
        );
    }
}
