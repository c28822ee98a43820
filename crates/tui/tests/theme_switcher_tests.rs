//! Tests for the theme switcher overlay and theme selection.

mod helpers;

use helpers::*;
use termfolio::App;
use termfolio_config::{LoadedConfig, builtin_themes};

fn open_switcher(app: &mut App) {
    app.handle_input(key('T'));
    assert!(app.modals.theme_open());
}

#[test]
fn test_switcher_focus_starts_at_active_theme() {
    let mut app = App::default();
    app.set_theme(2);

    open_switcher(&mut app);

    assert_eq!(app.theme_focus, 2);
}

#[test]
fn test_j_k_move_focus_without_applying() {
    let mut app = App::default();
    open_switcher(&mut app);

    app.handle_input(key('j'));
    app.handle_input(down_key());

    assert_eq!(app.theme_focus, 2);
    assert_eq!(app.themes.index(), 0);
    // the page selection is untouched while the overlay is open
    assert_eq!(app.selected_index(), 0);
}

#[test]
fn test_focus_is_clamped() {
    let mut app = App::default();
    open_switcher(&mut app);

    app.handle_input(key('k'));
    assert_eq!(app.theme_focus, 0);

    for _ in 0..10 {
        app.handle_input(key('j'));
    }
    assert_eq!(app.theme_focus, 3);
}

#[test]
fn test_enter_applies_focused_theme_and_closes() {
    let mut app = App::default();
    open_switcher(&mut app);

    app.handle_input(key('j'));
    let action = app.handle_input(enter_key());

    assert_eq!(action, None);
    assert_eq!(app.theme().name, "Catppuccin");
    assert!(!app.modals.theme_open());
    assert!(!app.modals.is_any_open());
}

#[test]
fn test_reopened_switcher_focuses_applied_theme() {
    let mut app = App::default();
    open_switcher(&mut app);
    app.handle_input(key('j'));
    app.handle_input(key('j'));
    app.handle_input(enter_key());

    open_switcher(&mut app);

    assert!(app.modals.theme_open());
    assert_eq!(app.theme_focus, 2);
}

#[test]
fn test_enter_does_not_open_link_while_switcher_open() {
    let mut app = App::default();
    open_switcher(&mut app);

    assert_eq!(app.handle_input(enter_key()), None);
}

#[test]
fn test_escape_keeps_applied_theme() {
    let mut app = App::default();
    open_switcher(&mut app);
    app.handle_input(key('j'));
    app.handle_input(key('j'));
    app.handle_input(enter_key());

    app.handle_input(esc_key());

    assert!(!app.modals.is_any_open());
    assert_eq!(app.theme().name, "Claude");
}

#[test]
fn test_set_theme_ignores_out_of_range() {
    let mut app = App::default();
    app.set_theme(1);

    assert!(!app.set_theme(4));
    assert!(!app.set_theme(-1i32));
    assert!(!app.set_theme(usize::MAX));
    assert_eq!(app.themes.index(), 1);

    assert!(app.set_theme(3u8));
    assert_eq!(app.theme().name, "Light");
}

#[test]
fn test_starting_theme_comes_from_config() {
    let app = App::new(LoadedConfig {
        theme_index: 3,
        ..LoadedConfig::default()
    });

    assert_eq!(app.theme().name, "Light");
    assert_eq!(app.theme_focus, 3);
}

#[test]
fn test_out_of_range_starting_theme_falls_back_to_first() {
    let app = App::new(LoadedConfig {
        theme_index: 42,
        ..LoadedConfig::default()
    });

    assert_eq!(app.themes.index(), 0);
}

#[test]
fn test_empty_catalog_gets_default_theme() {
    let app = App::new(LoadedConfig {
        themes: Vec::new(),
        ..LoadedConfig::default()
    });

    assert_eq!(app.themes.len(), 1);
    assert_eq!(app.theme(), &builtin_themes()[0]);
}
