//! Domain layer for the Movie Explorer plugin.
//!
//! Core types that do not depend on Zellij APIs: the [`Movie`] record and the
//! error taxonomy.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Movie record and display helpers

pub mod error;
pub mod movie;

pub use error::{DecodeError, ExplorerError, Result};
pub use movie::Movie;
