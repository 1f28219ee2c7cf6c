//! Infrastructure layer for filesystem and environment interactions.
//!
//! The Zellij plugin sandbox mounts the host filesystem under `/host`; the
//! helpers here translate user-facing paths into sandbox paths.

pub mod paths;

pub use paths::{ensure_data_dir, expand_tilde, get_data_dir};
