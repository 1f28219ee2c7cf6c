//! Application state management and view model computation.
//!
//! [`AppState`] is the single root state holder of the plugin. It owns the
//! query engine, the current location, the theme palettes, and every piece of
//! transient UI state. Nothing in the crate keeps global mutable state; the
//! renderer receives the state (or the view model computed from it) explicitly.
//!
//! # Derived State
//!
//! The results shown in the grid are always derived from the location: every
//! navigation decodes `q`, re-runs the search, and replaces `results`. The
//! draft text in the search bar is separate and only reaches the location when
//! submitted.
//!
//! # Example
//!
//! ```rust
//! use movie_explorer::app::AppState;
//! use movie_explorer::catalog::Catalog;
//! use movie_explorer::query::Location;
//! use movie_explorer::ui::theme::{ThemeMode, ThemeSet};
//!
//! let mut state = AppState::new(Catalog::builtin()?, ThemeSet::default(), ThemeMode::Light);
//! state.navigate(Location::parse("/?q=matrix"));
//! assert_eq!(state.results.len(), 1);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.summary, "Showing 1 result(s) for \"matrix\".");
//! # Ok::<(), movie_explorer::ExplorerError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::catalog::Catalog;
use crate::domain::Movie;
use crate::query::{match_ranges, Location, QueryEngine, Route};
use crate::ui::helpers::{truncate, wrap_text};
use crate::ui::theme::{Theme, ThemeMode, ThemeSet};
use crate::ui::viewmodel::{
    CardItem, DetailInfo, EmptyState, FooterInfo, GridInfo, HeaderInfo, SearchBarInfo,
    UIViewModel, CARD_HEIGHT, CARD_WIDTH, OVERLAY_MAX_WIDTH,
};

/// Columns taken by the poster block and spacing in front of a card title.
const CARD_POSTER_WIDTH: usize = 6;

/// Content of the detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    /// The movie that was opened.
    Movie(Movie),

    /// No movie has this id; rendered as a placeholder.
    Missing {
        /// The identifier that was requested.
        id: String,
    },
}

/// Last known pane size, used for grid navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: usize,
    pub cols: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { rows: 24, cols: 80 }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search engine over the immutable catalog.
    pub engine: QueryEngine<Catalog>,

    /// Current location; the source of truth for the active query.
    pub location: Location,

    /// Route resolved from `location`.
    pub route: Route,

    /// Decoded query of `location`, or `None` when absent or undecodable.
    pub query: Option<String>,

    /// Movies matching `query`, in catalog order.
    pub results: Vec<Movie>,

    /// Index of the selected card within `results`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Draft text in the search bar.
    pub search_input: String,

    /// Open detail overlay, if any.
    pub detail: Option<DetailView>,

    /// Active palette.
    pub theme_mode: ThemeMode,

    /// Light and dark palettes.
    pub themes: ThemeSet,

    /// Pane size from the last render.
    pub viewport: Viewport,
}

impl AppState {
    /// Creates the state at the home location with the full catalog shown.
    #[must_use]
    pub fn new(catalog: Catalog, themes: ThemeSet, theme_mode: ThemeMode) -> Self {
        let mut state = Self {
            engine: QueryEngine::new(catalog),
            location: Location::home(),
            route: Route::Home,
            query: None,
            results: Vec::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            detail: None,
            theme_mode,
            themes,
            viewport: Viewport::default(),
        };
        state.apply_search();
        state
    }

    /// Moves to a new location and recomputes everything derived from it.
    ///
    /// A `q` parameter that fails to decode is logged and treated as no query,
    /// so a damaged location shows the full catalog instead of an error. The
    /// search draft is re-synchronized, the selection resets to the first card,
    /// and any open overlay is closed.
    pub fn navigate(&mut self, location: Location) {
        let _span = tracing::debug_span!("navigate", location = %location).entered();

        let query = location.query().unwrap_or_else(|e| {
            tracing::warn!(error = %e, location = %location, "malformed query parameter, showing all movies");
            None
        });

        self.route = location.route();
        self.location = location;
        self.search_input = query.clone().unwrap_or_default();
        self.query = query;
        self.detail = None;
        self.selected_index = 0;
        self.apply_search();
    }

    /// Picks the input mode matching the active query.
    ///
    /// The search bar stays open, navigating results, while a query is active.
    pub fn settle_input_mode(&mut self) {
        self.input_mode = if self.query.is_some() {
            InputMode::Search(SearchFocus::Navigating)
        } else {
            InputMode::Normal
        };
    }

    /// Re-runs the search for the current query and clamps the selection.
    pub fn apply_search(&mut self) {
        self.results = self
            .engine
            .search(self.query.as_deref())
            .into_iter()
            .cloned()
            .collect();

        if self.results.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.results.len() - 1);
        }

        tracing::debug!(
            result_count = self.results.len(),
            route = ?self.route,
            "results recomputed"
        );
    }

    /// Records the pane size so grid navigation knows the column count.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.viewport = Viewport { rows, cols };
    }

    /// Cards per grid row at the current width.
    #[must_use]
    pub fn grid_columns(&self) -> usize {
        Self::columns_for(self.viewport.cols)
    }

    fn columns_for(cols: usize) -> usize {
        (cols / CARD_WIDTH).max(1)
    }

    /// Moves one card right, wrapping to the first card after the last.
    pub fn move_selection_right(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.results.len();
    }

    /// Moves one card left, wrapping to the last card before the first.
    pub fn move_selection_left(&mut self) {
        if self.results.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.results.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves one grid row down.
    ///
    /// From a row above the last, lands on the same column (or the last card if
    /// the next row is short). From the last row, wraps to the top row.
    pub fn move_selection_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let columns = self.grid_columns();
        let last_row = (self.results.len() - 1) / columns;

        if self.selected_index / columns < last_row {
            self.selected_index = (self.selected_index + columns).min(self.results.len() - 1);
        } else {
            self.selected_index %= columns;
        }
    }

    /// Moves one grid row up, wrapping from the top row to the last row.
    pub fn move_selection_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let columns = self.grid_columns();

        if self.selected_index >= columns {
            self.selected_index -= columns;
        } else {
            let last_row_start = ((self.results.len() - 1) / columns) * columns;
            self.selected_index = (last_row_start + self.selected_index).min(self.results.len() - 1);
        }
    }

    /// Returns the selected movie, if any card is visible.
    #[must_use]
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.results.get(self.selected_index)
    }

    /// Opens the detail overlay for `id`.
    ///
    /// An unknown id opens a "not found" placeholder instead of failing.
    pub fn open_detail(&mut self, id: &str) {
        let view = match self.engine.open_detail(id) {
            Ok(movie) => DetailView::Movie(movie.clone()),
            Err(e) => {
                tracing::debug!(error = %e, "showing missing movie placeholder");
                DetailView::Missing { id: id.to_string() }
            }
        };
        self.detail = Some(view);
    }

    /// Opens the overlay for the selected card. Returns `false` if none.
    pub fn open_selected(&mut self) -> bool {
        let Some(id) = self.selected_movie().map(|movie| movie.id.clone()) else {
            return false;
        };
        self.open_detail(&id);
        true
    }

    /// Switches between the light and dark palettes.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        tracing::debug!(theme = self.theme_mode.as_str(), "theme toggled");
    }

    /// The active palette.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.get(self.theme_mode)
    }

    /// Computes the view model for a pane of `rows` × `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let (grid, empty_state) = match &self.route {
            Route::Home if self.results.is_empty() => (
                None,
                Some(EmptyState {
                    message: "No results. Try a different query or clear the search.".to_string(),
                    subtitle: "Tip: try Drama, 1994, or Sci-Fi.".to_string(),
                }),
            ),
            Route::Home => (Some(self.compute_grid(rows, cols)), None),
            Route::NotFound { path } => (
                None,
                Some(EmptyState {
                    message: format!("Page not found: {path}"),
                    subtitle: "Press g to go home.".to_string(),
                }),
            ),
        };

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            summary: self.compute_summary(),
            grid,
            empty_state,
            detail: self.compute_detail(cols),
            footer: self.compute_footer(),
        }
    }

    /// Computes the window of cards that fits the pane, keeping the selected
    /// card's row roughly centered.
    fn compute_grid(&self, rows: usize, cols: usize) -> GridInfo {
        let columns = Self::columns_for(cols);
        let visible_rows = (self.calculate_available_rows(rows) / CARD_HEIGHT).max(1);
        let total_rows = (self.results.len() + columns - 1) / columns;

        let selected_row = self.selected_index / columns;
        let mut start_row = selected_row.saturating_sub(visible_rows / 2);
        if start_row + visible_rows > total_rows {
            start_row = total_rows.saturating_sub(visible_rows);
        }

        let start = start_row * columns;
        let end = ((start_row + visible_rows) * columns).min(self.results.len());

        let cards = self.results[start..end]
            .iter()
            .enumerate()
            .map(|(offset, movie)| self.compute_card(movie, start + offset == self.selected_index))
            .collect();

        GridInfo {
            cards,
            columns,
            card_width: CARD_WIDTH,
        }
    }

    fn compute_card(&self, movie: &Movie, is_selected: bool) -> CardItem {
        let max_title = CARD_WIDTH.saturating_sub(CARD_POSTER_WIDTH + 1);
        let title = truncate(&movie.title, max_title);
        let shown = title.chars().count();

        let highlight_ranges = match_ranges(&movie.title, self.query.as_deref())
            .into_iter()
            .filter(|&(start, _)| start < shown)
            .map(|(start, end)| (start, end.min(shown)))
            .collect();

        CardItem {
            title,
            initials: movie.initials(),
            genre: movie.genre.clone(),
            year: movie.year.to_string(),
            rating: movie.rating_label(),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: "🎬 Movie Explorer".to_string(),
            location: self.location.to_string(),
            theme_label: self.theme_mode.toggle_label().to_string(),
        }
    }

    fn compute_summary(&self) -> String {
        match (&self.route, &self.query) {
            (Route::NotFound { .. }, _) => String::new(),
            (Route::Home, Some(query)) => {
                format!("Showing {} result(s) for \"{query}\".", self.results.len())
            }
            (Route::Home, None) => "Showing featured movies.".to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.search_input.clone(),
                placeholder: "Search movies by title, year, or genre...".to_string(),
                is_typing: focus == SearchFocus::Typing,
            }),
            InputMode::Normal => None,
        }
    }

    fn compute_detail(&self, cols: usize) -> Option<DetailInfo> {
        let detail = self.detail.as_ref()?;

        Some(match detail {
            DetailView::Movie(movie) => {
                let inner_width = cols.min(OVERLAY_MAX_WIDTH).saturating_sub(8);
                DetailInfo::Movie {
                    title: movie.title.clone(),
                    initials: movie.initials(),
                    meta: format!(
                        "{} · {} · {} · {}",
                        movie.genre,
                        movie.year,
                        movie.rating_label(),
                        movie.runtime_label()
                    ),
                    overview_lines: wrap_text(&movie.overview, inner_width),
                    helper: "This is a demo dataset.".to_string(),
                }
            }
            DetailView::Missing { id } => DetailInfo::Missing { id: id.clone() },
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.detail.is_some() {
            "Esc/Enter: close  t: theme  q: quit"
        } else if matches!(self.route, Route::NotFound { .. }) {
            "g: home  t: theme  q: quit"
        } else {
            match self.input_mode {
                InputMode::Search(SearchFocus::Typing) => {
                    "Enter: search  Esc: cancel  Ctrl+n/p: move  Type to edit query"
                }
                InputMode::Search(SearchFocus::Navigating) => {
                    "hjkl/arrows: move  Enter: details  /: edit query  Esc: clear search  t: theme"
                }
                InputMode::Normal => {
                    "hjkl/arrows: move  Enter: details  /: search  t: theme  g: home  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Rows left for the grid after the header, summary, and footer chrome
    /// (plus the 3-line search box in search mode).
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(7),
            InputMode::Search(_) => total_rows.saturating_sub(10),
        }
    }
}
