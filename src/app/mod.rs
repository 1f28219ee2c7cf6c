//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the catalog and
//! query layers. Data flows one way:
//!
//! ```text
//! Key / Pipe Message → Event → handle_event → AppState mutation → Actions → Zellij
//!                                                  │
//!                                                  └→ compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use state::{AppState, DetailView, Viewport};
