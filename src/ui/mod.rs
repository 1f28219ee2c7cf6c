//! User interface rendering layer.
//!
//! Turns application state into ANSI-styled output:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready types for one frame
//! - [`renderer`]: Top-level rendering entry point
//! - [`components`]: Header, search bar, grid, overlay, and footer renderers
//! - [`helpers`]: Cursor, highlighting, and text-fitting utilities
//! - [`theme`]: Light and dark palettes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::{Theme, ThemeMode, ThemeSet};
pub use viewmodel::{
    CardItem, DetailInfo, EmptyState, FooterInfo, GridInfo, HeaderInfo, SearchBarInfo,
    UIViewModel,
};
