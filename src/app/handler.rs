//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place application state changes. It takes an
//! [`Event`] from the plugin shim (key presses, pipe messages), applies it to
//! [`AppState`], and returns whether a re-render is needed together with the
//! [`Action`]s the runtime should execute.
//!
//! # Event Types
//!
//! - **Grid**: `KeyDown`, `KeyUp`, `KeyLeft`, `KeyRight`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `Char`,
//!   `Backspace`, `SubmitSearch`, `ExitSearch`
//! - **Detail**: `OpenSelected`, `OpenDetail`, `CloseDetail`, `Escape`
//! - **Location**: `GoHome`, `Navigate`
//! - **Misc**: `ToggleTheme`, `CloseFocus`
//!
//! Every event that changes the location emits [`Action::PublishLocation`] so
//! the pane title stays in step with the results.
//!
//! # Example
//!
//! ```rust
//! use movie_explorer::app::{handle_event, Action, AppState, Event};
//! use movie_explorer::catalog::Catalog;
//! use movie_explorer::ui::theme::{ThemeMode, ThemeSet};
//!
//! let mut state = AppState::new(Catalog::builtin()?, ThemeSet::default(), ThemeMode::Light);
//! let (_, actions) = handle_event(&mut state, &Event::Navigate { location: "/?q=1994".into() })?;
//! assert_eq!(state.results.len(), 3);
//! assert_eq!(actions, vec![Action::PublishLocation("/?q=1994".into())]);
//! # Ok::<(), movie_explorer::ExplorerError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::query::Location;

/// Events triggered by user input or pipe messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection one grid row down.
    KeyDown,
    /// Moves the selection one grid row up.
    KeyUp,
    /// Moves the selection one card left.
    KeyLeft,
    /// Moves the selection one card right.
    KeyRight,

    /// Opens the search bar with typing focus.
    SearchMode,
    /// Returns focus to the search bar (from navigating).
    FocusSearchBar,
    /// Leaves the search bar without submitting. The draft is discarded.
    FocusResults,
    /// Appends a character to the draft query.
    Char(char),
    /// Removes the last character from the draft query.
    Backspace,
    /// Commits the draft query to the location.
    SubmitSearch,
    /// Clears the active query and closes the search bar.
    ExitSearch,

    /// Closes the detail overlay if one is open.
    Escape,
    /// Opens the detail overlay for the selected card.
    OpenSelected,
    /// Opens the detail overlay for a specific movie id.
    OpenDetail {
        id: String,
    },
    /// Closes the detail overlay.
    CloseDetail,

    /// Switches between the light and dark palettes.
    ToggleTheme,
    /// Navigates to `/` with no query.
    GoHome,
    /// Navigates to an arbitrary location string.
    ///
    /// Sent by the `navigate` pipe message and by the `location` config key.
    Navigate {
        location: String,
    },

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag is `true` when the state changed in a way that needs a
/// re-render.
///
/// # Errors
///
/// No event currently fails; the `Result` keeps the signature uniform with
/// the rest of the application layer. A malformed location is not an error:
/// it is logged and shown as the full catalog.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::KeyLeft => {
            state.move_selection_left();
            Ok((true, vec![]))
        }
        Event::KeyRight => {
            state.move_selection_right();
            Ok((true, vec![]))
        }
        Event::SearchMode | Event::FocusSearchBar => {
            tracing::debug!(draft = %state.search_input, "focusing search bar");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.search_input = state.query.clone().unwrap_or_default();
            state.settle_input_mode();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            state.search_input.push(*c);
            tracing::trace!(draft = %state.search_input, char = %c, "search draft updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            Ok((state.search_input.pop().is_some(), vec![]))
        }
        Event::SubmitSearch => {
            tracing::debug!(query = %state.search_input, "submitting search");
            let location = state.location.with_query(Some(&state.search_input));
            Ok((true, go_to(state, location)))
        }
        Event::ExitSearch => {
            tracing::debug!(query = ?state.query, "exiting search mode");
            let location = state.location.with_query(None);
            Ok((true, go_to(state, location)))
        }
        Event::Escape | Event::CloseDetail => {
            if state.detail.take().is_some() {
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::OpenSelected => {
            if state.open_selected() {
                return Ok((true, vec![]));
            }
            tracing::debug!("no movie selected");
            Ok((false, vec![]))
        }
        Event::OpenDetail { id } => {
            state.open_detail(id);
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            state.toggle_theme();
            Ok((true, vec![]))
        }
        Event::GoHome => Ok((true, go_to(state, Location::home()))),
        Event::Navigate { location } => Ok((true, go_to(state, Location::parse(location)))),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Navigates, settles the input mode, and publishes the new location.
fn go_to(state: &mut AppState, location: Location) -> Vec<Action> {
    state.navigate(location);
    state.settle_input_mode();
    vec![Action::PublishLocation(state.location.to_string())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::DetailView;
    use crate::catalog::Catalog;
    use crate::ui::theme::{ThemeMode, ThemeSet};

    fn state() -> AppState {
        AppState::new(Catalog::builtin().unwrap(), ThemeSet::default(), ThemeMode::Light)
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn typing_does_not_change_results_until_submit() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        type_str(&mut state, "drama");
        assert_eq!(state.results.len(), 12);

        let (render, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::PublishLocation("/?q=drama".to_string())]);
        assert_eq!(state.results.len(), 2);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    }

    #[test]
    fn submitting_empty_draft_goes_home() {
        let mut state = state();
        handle_event(&mut state, &Event::Navigate { location: "/?q=1994".into() }).unwrap();
        handle_event(&mut state, &Event::FocusSearchBar).unwrap();
        for _ in 0..4 {
            handle_event(&mut state, &Event::Backspace).unwrap();
        }
        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();
        assert_eq!(actions, vec![Action::PublishLocation("/".to_string())]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.results.len(), 12);
    }

    #[test]
    fn leaving_search_bar_discards_draft() {
        let mut state = state();
        handle_event(&mut state, &Event::Navigate { location: "/?q=Sci-Fi".into() }).unwrap();
        handle_event(&mut state, &Event::FocusSearchBar).unwrap();
        type_str(&mut state, "xyz");
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.search_input, "Sci-Fi");
        assert_eq!(state.results.len(), 3);
    }

    #[test]
    fn exit_search_clears_query_and_keeps_other_params() {
        let mut state = state();
        handle_event(&mut state, &Event::Navigate { location: "/?page=2&q=matrix".into() }).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(actions, vec![Action::PublishLocation("/?page=2".to_string())]);
        assert_eq!(state.query, None);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn chars_are_ignored_outside_typing() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert_eq!(state.search_input, "");
    }

    #[test]
    fn escape_closes_detail_only() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::Escape).unwrap(), (false, vec![]));

        handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert!(matches!(state.detail, Some(DetailView::Movie(_))));
        assert_eq!(handle_event(&mut state, &Event::Escape).unwrap(), (true, vec![]));
        assert!(state.detail.is_none());
    }

    #[test]
    fn navigation_closes_open_detail() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenDetail { id: "tt0133093".into() }).unwrap();
        assert!(state.detail.is_some());
        handle_event(&mut state, &Event::GoHome).unwrap();
        assert!(state.detail.is_none());
    }

    #[test]
    fn navigate_publishes_canonical_location() {
        let mut state = state();
        let (_, actions) = handle_event(
            &mut state,
            &Event::Navigate { location: "  /?q=back%20to#top ".into() },
        )
        .unwrap();
        assert_eq!(actions, vec![Action::PublishLocation("/?q=back%20to".to_string())]);
        assert_eq!(state.results.len(), 1);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = state();
        assert_eq!(
            handle_event(&mut state, &Event::CloseFocus).unwrap(),
            (false, vec![Action::CloseFocus])
        );
    }
}
