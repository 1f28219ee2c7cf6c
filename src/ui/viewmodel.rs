//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only; no catalog or
//! query logic runs while rendering.

/// Width of one card cell in the grid, in terminal columns.
pub const CARD_WIDTH: usize = 36;

/// Height of one card row in the grid, including the spacing line.
pub const CARD_HEIGHT: usize = 3;

/// Widest the detail overlay gets, in columns.
pub const OVERLAY_MAX_WIDTH: usize = 72;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Brand, current location, and theme toggle label.
    pub header: HeaderInfo,

    /// Search input box, shown while in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// One-line description of what is being shown.
    pub summary: String,

    /// Card grid for the catalog route. `None` on the not-found route.
    pub grid: Option<GridInfo>,

    /// Message shown instead of the grid when nothing matched or the route is
    /// unknown.
    pub empty_state: Option<EmptyState>,

    /// Detail overlay drawn on top of everything else.
    pub detail: Option<DetailInfo>,

    /// Key hints.
    pub footer: FooterInfo,
}

/// Header bar contents.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    /// Canonical location string, e.g. `/?q=Sci-Fi`.
    pub location: String,
    /// Label naming the theme a toggle switches to.
    pub theme_label: String,
}

/// Search bar contents.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Draft query text, not yet submitted.
    pub query: String,
    /// Shown in place of the query when it is empty.
    pub placeholder: String,
    /// Whether keystrokes currently edit the query.
    pub is_typing: bool,
}

/// The visible window of the card grid.
#[derive(Debug, Clone)]
pub struct GridInfo {
    /// Cards in the window, row-major.
    pub cards: Vec<CardItem>,
    /// Cards per row.
    pub columns: usize,
    /// Width of one card cell in columns.
    pub card_width: usize,
}

/// One movie card.
#[derive(Debug, Clone)]
pub struct CardItem {
    pub title: String,
    pub initials: String,
    pub genre: String,
    pub year: String,
    pub rating: String,
    pub is_selected: bool,
    /// Character ranges of `title` matching the active query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Centered message for empty results or unknown routes.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Contents of the detail overlay.
#[derive(Debug, Clone)]
pub enum DetailInfo {
    /// A movie was found for the requested id.
    Movie {
        title: String,
        initials: String,
        /// `genre · year · ★ rating · ⏱ runtime`.
        meta: String,
        /// Overview wrapped to the overlay width.
        overview_lines: Vec<String>,
        helper: String,
    },

    /// The requested id is not in the catalog.
    Missing { id: String },
}

/// Footer contents.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}
