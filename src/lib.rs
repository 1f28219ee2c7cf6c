//! Movie Explorer: a Zellij plugin for browsing and searching a movie catalog.
//!
//! Movie Explorer provides:
//! - Case-insensitive substring search over title, year, and genre
//! - A location (`/?q=...`) as the single source of truth for the active query
//! - Round-trippable percent-encoding of the query parameter
//! - A card grid with match highlighting and a detail overlay
//! - Light and dark palettes, replaceable through TOML files
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, pipes, pane title
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Query Layer   │   │ Catalog Layer │
//! │ (ui/)         │   │ (query/)      │   │ (catalog/)    │
//! │ - Rendering   │   │ - Search      │   │ - Dataset     │
//! │ - Theming     │   │ - URL codec   │   │ - Validation  │
//! │ - Components  │   │ - Location    │   │ - Id lookup   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │  ← Movie, errors
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use movie_explorer::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::Navigate { location: "/?q=Sci-Fi".into() })?;
//! assert_eq!(state.results.len(), 3);
//! # Ok::<(), movie_explorer::ExplorerError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod query;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{DecodeError, ExplorerError, Movie, Result};
pub use ui::{Theme, ThemeMode, ThemeSet};

use catalog::Catalog;
use query::Location;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/movie-explorer.wasm" {
///     location "/?q=Sci-Fi"
///     theme "dark"
///     dark_theme_file "~/.config/movie-explorer/dark.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Location to open on load. Default: `/`.
    pub location: Option<String>,

    /// Initial theme mode name, `light` or `dark`. Default: light.
    pub theme_name: Option<String>,

    /// TOML palette replacing the built-in light theme.
    pub light_theme_file: Option<String>,

    /// TOML palette replacing the built-in dark theme.
    pub dark_theme_file: Option<String>,

    /// `EnvFilter` directive for tracing.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use movie_explorer::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("location".to_string(), "/?q=1994".to_string());
    /// map.insert("theme".to_string(), " ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.location.as_deref(), Some("/?q=1994"));
    /// assert_eq!(config.theme_name, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            location: get("location"),
            theme_name: get("theme"),
            light_theme_file: get("light_theme_file"),
            dark_theme_file: get("dark_theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Resolves the configured theme mode.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] for a name other than `light` or `dark`.
    pub fn theme_mode(&self) -> Result<ThemeMode> {
        self.theme_name.as_deref().map_or(Ok(ThemeMode::default()), |name| {
            ThemeMode::from_name(name)
                .ok_or_else(|| ExplorerError::Config(format!("unknown theme '{name}', expected light or dark")))
        })
    }
}

/// Loads a palette override, falling back to the built-in palette on error.
fn load_palette(file: Option<&str>, builtin: Theme) -> Theme {
    let Some(file) = file else {
        return builtin;
    };

    let path = infrastructure::expand_tilde(file);
    Theme::from_file(&path).unwrap_or_else(|e| {
        tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using built-in");
        builtin
    })
}

/// Builds the initial application state from configuration.
///
/// Every configuration problem degrades to a default with a log line: an
/// unknown theme name starts in light mode, an unreadable palette file keeps
/// the built-in palette, and a malformed location shows the full catalog.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing movie explorer plugin");

    let defaults = ThemeSet::default();
    let themes = ThemeSet::new(
        load_palette(config.light_theme_file.as_deref(), defaults.get(ThemeMode::Light).clone()),
        load_palette(config.dark_theme_file.as_deref(), defaults.get(ThemeMode::Dark).clone()),
    );

    let theme_mode = config.theme_mode().unwrap_or_else(|e| {
        tracing::debug!(error = %e, "using default theme mode");
        ThemeMode::default()
    });

    let catalog = Catalog::builtin().unwrap_or_else(|e| {
        tracing::error!(error = %e, "built-in dataset failed to load");
        Catalog::empty()
    });

    let mut state = AppState::new(catalog, themes, theme_mode);
    if let Some(location) = &config.location {
        state.navigate(Location::parse(location));
        state.settle_input_mode();
    }

    tracing::debug!(
        catalog_size = state.engine.all().len(),
        location = %state.location,
        theme = theme_mode.as_str(),
        "app state initialized"
    );
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_starts_home_in_light_mode() {
        let state = initialize(&Config::default());
        assert_eq!(state.location.to_string(), "/");
        assert_eq!(state.theme_mode, ThemeMode::Light);
        assert_eq!(state.results.len(), 12);
    }

    #[test]
    fn configured_location_and_theme_apply() {
        let mut map = BTreeMap::new();
        map.insert("location".to_string(), "/?q=Sci-Fi".to_string());
        map.insert("theme".to_string(), "Dark".to_string());

        let state = initialize(&Config::from_zellij(&map));
        assert_eq!(state.query.as_deref(), Some("Sci-Fi"));
        assert_eq!(state.results.len(), 3);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
        assert_eq!(state.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_is_a_config_error() {
        let config = Config {
            theme_name: Some("sepia".to_string()),
            ..Config::default()
        };
        assert!(matches!(config.theme_mode(), Err(ExplorerError::Config(_))));
        assert_eq!(initialize(&config).theme_mode, ThemeMode::Light);
    }

    #[test]
    fn palette_override_and_fallback() {
        let mut custom = Theme::default();
        custom.name = "paper".to_string();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes()).unwrap();

        let config = Config {
            light_theme_file: file.path().to_str().map(String::from),
            dark_theme_file: Some("/nonexistent/dark.toml".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.themes.get(ThemeMode::Light).name, "paper");
        assert_eq!(state.themes.get(ThemeMode::Dark).name, "dark");
    }
}
