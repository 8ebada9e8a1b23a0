//! Font picker options and matching of detected PDF font names against them.

use common::{editor_const::BUILTIN_FONTS, fonts::FontInfo};

#[derive(Debug, Clone, PartialEq)]
pub struct FontOption {
    pub value: String,
    pub label: String,
}

impl FontOption {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self { value: name.clone(), label: name }
    }
}

/// How a detected font name was mapped to an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontMatch {
    Exact(usize),
    Substring(usize),
    /// No option matched; the detected name was appended as a new option.
    Registered(usize),
}

impl FontMatch {
    pub fn index(&self) -> usize {
        match *self {
            FontMatch::Exact(i) | FontMatch::Substring(i) | FontMatch::Registered(i) => i,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FontOptions {
    options: Vec<FontOption>,
    /// Leading options that survive a reload of the server font list.
    builtin_count: usize,
}

impl FontOptions {
    pub fn with_builtins(builtins: &[&str]) -> Self {
        Self {
            options: builtins.iter().map(|name| FontOption::new(*name)).collect(),
            builtin_count: builtins.len(),
        }
    }

    pub fn options(&self) -> &[FontOption] {
        &self.options
    }

    pub fn get(&self, index: usize) -> Option<&FontOption> {
        self.options.get(index)
    }

    /// Replaces every non-builtin option with the server's font list.
    pub fn load_server_fonts(&mut self, fonts: &[FontInfo]) {
        self.options.truncate(self.builtin_count);
        self.options.extend(fonts.iter().map(|f| FontOption::new(f.name.clone())));
    }

    /// Exact value/label match first, then a case-insensitive match on an
    /// option containing the detected name, and finally registration of the
    /// detected name so it is never dropped from the picker.
    pub fn resolve(&mut self, detected: &str) -> FontMatch {
        if let Some(i) = self.options.iter().position(|o| o.value == detected || o.label == detected) {
            return FontMatch::Exact(i);
        }
        let needle = detected.to_lowercase();
        if let Some(i) = self
            .options
            .iter()
            .position(|o| o.value.to_lowercase().contains(&needle) || o.label.to_lowercase().contains(&needle))
        {
            return FontMatch::Substring(i);
        }
        self.options.push(FontOption::new(detected));
        FontMatch::Registered(self.options.len() - 1)
    }
}

impl Default for FontOptions {
    fn default() -> Self {
        Self::with_builtins(&BUILTIN_FONTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options(names: &[&str]) -> FontOptions {
        FontOptions::with_builtins(names)
    }

    #[test]
    fn substring_match_finds_longer_option() {
        let mut fonts = options(&["Arial", "SolaimanLipiBold"]);
        let m = fonts.resolve("SolaimanLipi");
        assert_eq!(m, FontMatch::Substring(1));
        assert_eq!(fonts.options().len(), 2);
    }

    #[test]
    fn unknown_font_is_registered_and_selected() {
        let mut fonts = options(&["Arial", "SolaimanLipiBold"]);
        let m = fonts.resolve("XYZFont");
        assert_eq!(m, FontMatch::Registered(2));
        assert_eq!(fonts.get(m.index()).map(|o| o.value.as_str()), Some("XYZFont"));
    }

    #[test]
    fn exact_match_wins_over_substring() {
        let mut fonts = options(&["ArialNarrow", "Arial"]);
        assert_eq!(fonts.resolve("Arial"), FontMatch::Exact(1));
    }

    #[test]
    fn substring_match_ignores_case() {
        let mut fonts = options(&["helv", "Kalpurush-Regular"]);
        assert_eq!(fonts.resolve("KALPURUSH"), FontMatch::Substring(1));
    }

    #[test]
    fn registered_font_is_found_exactly_next_time() {
        let mut fonts = options(&["Arial"]);
        fonts.resolve("XYZFont");
        assert_eq!(fonts.resolve("XYZFont"), FontMatch::Exact(1));
    }

    #[test]
    fn reloading_server_fonts_keeps_builtins() {
        let mut fonts = FontOptions::default();
        fonts.load_server_fonts(&[FontInfo { name: "SolaimanLipi".into() }]);
        fonts.load_server_fonts(&[FontInfo { name: "Nikosh".into() }]);
        let names: Vec<_> = fonts.options().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(names, vec!["helv", "tiro", "cour", "Nikosh"]);
    }
}
