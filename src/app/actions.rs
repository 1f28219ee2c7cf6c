//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never calls Zellij directly. It returns a `Vec<Action>`
//! and the plugin shim turns each one into the matching API call, which keeps
//! the whole application layer testable without a running multiplexer.

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Writes a new canonical location to the pane title.
    ///
    /// The pane title acts as the address bar: it always shows the location
    /// the current results were derived from.
    PublishLocation(String),
}
