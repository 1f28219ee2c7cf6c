//! End-to-end event flows: key-driven searching, pipe-driven navigation, and
//! the view model they produce.

#![allow(clippy::unwrap_used)]

use movie_explorer::app::DetailView;
use movie_explorer::ui::{DetailInfo, UIViewModel};
use movie_explorer::{handle_event, initialize, Action, AppState, Config, Event, InputMode, SearchFocus};

fn fresh() -> AppState {
    initialize(&Config::default())
}

fn send(state: &mut AppState, event: Event) -> Vec<Action> {
    handle_event(state, &event).unwrap().1
}

fn type_query(state: &mut AppState, text: &str) {
    send(state, Event::SearchMode);
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

fn frame(state: &AppState) -> UIViewModel {
    state.compute_viewmodel(40, 120)
}

#[test]
fn search_open_and_close_a_movie() {
    let mut state = fresh();

    type_query(&mut state, "Sci-Fi 1999");
    assert_eq!(frame(&state).search_bar.unwrap().query, "Sci-Fi 1999");

    let actions = send(&mut state, Event::SubmitSearch);
    assert_eq!(actions, vec![Action::PublishLocation("/?q=Sci-Fi%201999".into())]);
    // "sci-fi 1999" is not a substring of any single field.
    assert!(state.results.is_empty());

    send(&mut state, Event::FocusSearchBar);
    for _ in 0..5 {
        send(&mut state, Event::Backspace);
    }
    send(&mut state, Event::SubmitSearch);
    assert_eq!(state.location.to_string(), "/?q=Sci-Fi");
    assert_eq!(frame(&state).summary, "Showing 3 result(s) for \"Sci-Fi\".");

    send(&mut state, Event::KeyRight);
    send(&mut state, Event::OpenSelected);
    match &state.detail {
        Some(DetailView::Movie(movie)) => assert_eq!(movie.title, "Inception"),
        other => panic!("expected Inception, got {other:?}"),
    }

    send(&mut state, Event::CloseDetail);
    assert!(state.detail.is_none());
    assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));

    let actions = send(&mut state, Event::ExitSearch);
    assert_eq!(actions, vec![Action::PublishLocation("/".into())]);
    assert_eq!(frame(&state).summary, "Showing featured movies.");
}

#[test]
fn pipe_navigation_replaces_results_and_draft() {
    let mut state = fresh();
    type_query(&mut state, "unsent draft");

    send(&mut state, Event::Navigate { location: "/?q=crime".into() });
    assert_eq!(state.search_input, "crime");
    assert_eq!(state.results.len(), 2);
    assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
}

#[test]
fn damaged_location_shows_everything() {
    let mut state = fresh();
    let actions = send(&mut state, Event::Navigate { location: "/?q=%E0%A4%A".into() });

    assert_eq!(state.results.len(), 12);
    assert_eq!(state.query, None);
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(actions, vec![Action::PublishLocation("/?q=%E0%A4%A".into())]);
}

#[test]
fn opening_a_missing_movie_shows_a_placeholder() {
    let mut state = fresh();
    send(&mut state, Event::OpenDetail { id: "tt0000001".into() });

    match frame(&state).detail {
        Some(DetailInfo::Missing { id }) => assert_eq!(id, "tt0000001"),
        other => panic!("expected placeholder, got {other:?}"),
    }
}

#[test]
fn not_found_route_and_home() {
    let mut state = fresh();
    send(&mut state, Event::Navigate { location: "/movies/42".into() });

    let vm = frame(&state);
    assert!(vm.grid.is_none());
    assert_eq!(vm.empty_state.unwrap().subtitle, "Press g to go home.");

    let actions = send(&mut state, Event::GoHome);
    assert_eq!(actions, vec![Action::PublishLocation("/".into())]);
    assert_eq!(frame(&state).grid.unwrap().cards.len(), 12);
}

#[test]
fn selection_resets_after_navigation() {
    let mut state = fresh();
    for _ in 0..4 {
        send(&mut state, Event::KeyRight);
    }
    assert_eq!(state.selected_index, 4);

    send(&mut state, Event::Navigate { location: "/?q=the".into() });
    assert_eq!(state.selected_index, 0);
    assert!(frame(&state).grid.unwrap().cards[0].is_selected);
}

#[test]
fn theme_toggle_flips_header_label() {
    let mut state = fresh();
    assert_eq!(frame(&state).header.theme_label, "🌙 Dark");
    send(&mut state, Event::ToggleTheme);
    assert_eq!(frame(&state).header.theme_label, "☀ Light");
}
