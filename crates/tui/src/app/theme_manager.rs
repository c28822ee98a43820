//! Active theme selection over the loaded catalog.

use termfolio_config::Theme;

/// Index into a non-empty theme catalog.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    themes: Vec<Theme>,
    index: usize,
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(termfolio_config::builtin_themes(), 0)
    }
}

impl ThemeManager {
    /// Build a manager; an empty catalog falls back to the default theme and an
    /// out-of-range index falls back to 0.
    pub fn new(mut themes: Vec<Theme>, index: usize) -> Self {
        if themes.is_empty() {
            themes.push(Theme::default_theme());
        }
        let index = if index < themes.len() { index } else { 0 };
        Self { themes, index }
    }

    /// Apply theme `index` if it is inside the catalog; anything else is ignored.
    ///
    /// Accepts signed indices so callers can pass unchecked arithmetic.
    pub fn set_theme<I: TryInto<usize>>(&mut self, index: I) -> bool {
        match index.try_into() {
            Ok(i) if i < self.themes.len() => {
                self.index = i;
                true
            }
            _ => false,
        }
    }

    /// Advance to the next theme, wrapping around.
    pub fn cycle(&mut self) {
        self.index = (self.index + 1) % self.themes.len();
    }

    pub fn current(&self) -> &Theme {
        &self.themes[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
