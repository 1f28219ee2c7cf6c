//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the Movie Explorer library and
//! the Zellij plugin system. It turns Zellij input (key presses and pipe
//! messages) into library [`Event`]s and library [`Action`]s into Zellij API
//! calls. All state lives in the library's `AppState`.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: `ChangeApplicationState` (pane title, hiding) and
//!    `ReadCliPipes` (external navigation)
//! 3. **Update / Pipe**: Map input to events, delegate to `handle_event`
//! 4. **Render**: Record the pane size, then render the view model
//!
//! # Address Bar
//!
//! The pane title always shows the current location (e.g. `/?q=Sci-Fi`).
//! Every location change is published there through `rename_plugin_pane`.
//!
//! # Pipe Messages
//!
//! ```text
//! zellij pipe --name navigate -- '/?q=Sci-Fi'   # go to a location
//! zellij pipe --name open -- tt0133093          # open a movie's detail overlay
//! zellij pipe --name location                   # print the current location
//! ```
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! Normal mode and search results:
//! - `h`/`j`/`k`/`l`, arrows: Move through the grid
//! - `Enter`: Open movie details
//! - `/`: Search (edit the query)
//! - `t`: Toggle light/dark theme
//! - `g`: Go home
//! - `q`: Close plugin
//! - `Esc`: Clear the active search
//!
//! While typing a query:
//! - `Enter`: Submit
//! - `Esc`: Cancel edit
//! - Any other character: Type
//!
//! With the detail overlay open:
//! - `Esc` / `Enter`: Close overlay

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use movie_explorer::{handle_event, Action, Config, Event, InputMode, SearchFocus};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from the library layer.
    app: movie_explorer::AppState,

    /// Whether `ChangeApplicationState` was granted; the pane title can only
    /// be set once it is.
    can_rename: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: movie_explorer::initialize(&Config::default()),
            can_rename: false,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the state, requests permissions, and
    /// subscribes to key input.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        movie_explorer::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = movie_explorer::initialize(&config);

        request_permission(&[
            PermissionType::ChangeApplicationState,
            PermissionType::ReadCliPipes,
        ]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!(location = %self.app.location, "plugin load complete");
    }

    /// Handles Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let span = tracing::debug_span!("plugin_update_event", event_type = %Self::get_event_name(&event));
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                return self.handle_permission_result(status);
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Handles `zellij pipe` messages.
    ///
    /// CLI pipes are answered with the resulting canonical location and then
    /// unblocked so the command returns.
    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        let span = tracing::debug_span!("plugin_pipe", name = %pipe_message.name);
        let _guard = span.entered();

        let payload = pipe_message.payload.as_deref().map(str::trim).unwrap_or_default();

        let should_render = match pipe_message.name.as_str() {
            "navigate" => self.dispatch(&Event::Navigate {
                location: payload.to_string(),
            }),
            "open" if !payload.is_empty() => self.dispatch(&Event::OpenDetail {
                id: payload.to_string(),
            }),
            "location" => false,
            other => {
                tracing::debug!(message_name = %other, "ignoring pipe message with unknown name");
                false
            }
        };

        if let PipeSource::Cli(pipe_id) = &pipe_message.source {
            cli_pipe_output(pipe_id, &format!("{}\n", self.app.location));
            unblock_cli_pipe_input(pipe_id);
        }

        should_render
    }

    /// Records the pane size for grid navigation, then renders.
    fn render(&mut self, rows: usize, cols: usize) {
        self.app.resize(rows, cols);
        movie_explorer::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs an event through the library and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        if self.app.detail.is_some() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter => Some(Event::CloseDetail),
                BareKey::Char('t') => Some(Event::ToggleTheme),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            };
        }

        if self.app.input_mode == InputMode::Search(SearchFocus::Typing) {
            return Some(match key.bare_key {
                BareKey::Enter => Event::SubmitSearch,
                BareKey::Esc => Event::FocusResults,
                BareKey::Backspace => Event::Backspace,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            });
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Left | BareKey::Char('h') => Event::KeyLeft,
            BareKey::Right | BareKey::Char('l') => Event::KeyRight,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::Escape,
            },
            BareKey::Char('t') => Event::ToggleTheme,
            BareKey::Char('g') => Event::GoHome,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Publishes the initial location once the pane may be renamed.
    fn handle_permission_result(&mut self, status: PermissionStatus) -> bool {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                self.can_rename = true;
                let location = self.app.location.to_string();
                self.execute_action(&Action::PublishLocation(location));
                true
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - pane title and pipes unavailable");
                false
            }
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PublishLocation(location) => {
                if !self.can_rename {
                    tracing::debug!(location = %location, "pane rename not permitted yet");
                    return;
                }
                rename_plugin_pane(get_plugin_ids().plugin_id, location);
            }
        }
    }
}
