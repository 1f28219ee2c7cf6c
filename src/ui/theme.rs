//! Theme management and ANSI escape sequence generation.
//!
//! The explorer has two theme modes, light and dark, toggled at runtime. Each
//! mode is backed by a [`Theme`] palette: the built-in ones are embedded from
//! `themes/*.toml`, and either can be replaced by a custom TOML file through
//! the plugin configuration.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#111827"
//! header_bg = "#f3f4f6"        # optional
//! selection_fg = "#ffffff"
//! selection_bg = "#2563eb"
//! text_normal = "#111827"
//! text_dim = "#6b7280"
//! border = "#d1d5db"
//! search_bar_border = "#2563eb"
//! match_highlight_fg = "#111827"
//! match_highlight_bg = "#fde68a"
//! empty_state_fg = "#2563eb"
//! badge_fg = "#1e3a8a"
//! rating_fg = "#b45309"
//! poster_fg = "#ffffff"
//! poster_bg = "#3b82f6"
//! overlay_border = "#f59e0b"
//! ```

use crate::domain::error::{ExplorerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#2563eb"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Secondary text: footer, summary line, card metadata.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Genre badge text.
    pub badge_fg: String,
    /// `★ rating` text.
    pub rating_fg: String,
    /// Initials poster block.
    pub poster_fg: String,
    pub poster_bg: String,

    /// Frame of the detail overlay.
    pub overlay_border: String,
}

impl Theme {
    /// Loads a built-in theme by name (`light` or `dark`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use movie_explorer::ui::Theme;
    ///
    /// let theme = Theme::from_name("dark").unwrap();
    /// assert_eq!(theme.name, "dark");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "light" => include_str!("../../themes/light.toml"),
            "dark" => include_str!("../../themes/dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Theme`] if the file cannot be read or the TOML
    /// does not describe a complete palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ExplorerError::Theme(format!("failed to read theme file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| ExplorerError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, falling back to white on bad input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    ///
    /// ```rust
    /// use movie_explorer::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#2563eb"), "\u{1b}[38;2;37;99;235m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the built-in light theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("light").expect("Built-in light theme should always parse")
    }
}

/// Which of the two palettes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Parses `light` or `dark` (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Label of the toggle button: names the mode a toggle switches to.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "🌙 Dark",
            Self::Dark => "☀ Light",
        }
    }
}

/// The light and dark palettes, owned by the application state.
#[derive(Debug, Clone)]
pub struct ThemeSet {
    light: Theme,
    dark: Theme,
}

impl ThemeSet {
    #[must_use]
    pub const fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Returns the palette for `mode`.
    #[must_use]
    pub const fn get(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for ThemeSet {
    /// Built-in light and dark palettes.
    ///
    /// # Panics
    ///
    /// Panics if the built-in dark theme fails to parse (should never occur).
    fn default() -> Self {
        Self {
            light: Theme::default(),
            dark: Theme::from_name("dark").expect("Built-in dark theme should always parse"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        let set = ThemeSet::default();
        assert_eq!(set.get(ThemeMode::Light).name, "light");
        assert_eq!(set.get(ThemeMode::Dark).name, "dark");
    }

    #[test]
    fn mode_toggles_and_parses() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::from_name(" Dark "), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name("sepia"), None);
    }

    #[test]
    fn hex_parsing_falls_back_to_white() {
        assert_eq!(Theme::hex_to_rgb("#000000"), (0, 0, 0));
        assert_eq!(Theme::hex_to_rgb("zzzzzz"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("#fff"), (255, 255, 255));
    }

    #[test]
    fn loads_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "custom".to_string();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded.name, "custom");
    }

    #[test]
    fn missing_or_invalid_theme_file_is_an_error() {
        assert!(matches!(
            Theme::from_file("/nonexistent/theme.toml"),
            Err(ExplorerError::Theme(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"partial\"\n").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(ExplorerError::Theme(_))));
    }
}
