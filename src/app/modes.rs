//! Input mode state machine types.
//!
//! The application is either in **Normal** mode (grid navigation and commands)
//! or in **Search** mode. Search mode has two focus states: typing a draft
//! query, or navigating the results of the submitted one.
//!
//! ```text
//!            /                 Enter (non-empty)
//! Normal ─────────▶ Typing ─────────────────────▶ Navigating
//!   ▲                 │  ▲          /                 │
//!   │   Esc / Enter   │  └────────────────────────────┤
//!   └─────(no query)──┘                               │
//!   └──────────────────────── Esc (clears query) ─────┘
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keystrokes edit the draft query. Enter submits it to the location.
    Typing,

    /// The submitted query is shown; keys move through the results.
    Navigating,
}

/// Current input handling mode.
///
/// Controls how the plugin shim maps keys to events and which key hints the
/// footer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Grid navigation and single-key commands.
    Normal,

    /// Search bar visible, with the given focus.
    Search(SearchFocus),
}
