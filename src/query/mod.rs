//! Query engine layer.
//!
//! Everything between the location string and the list of movies on screen:
//! parsing the location, decoding the `q` parameter, and filtering the catalog.
//!
//! # Data Flow
//!
//! ```text
//! "/?q=Sci-Fi"  →  Location::parse  →  Location::query  →  QueryEngine::search
//!                                        (codec)             (substring match)
//! ```
//!
//! # Modules
//!
//! - [`codec`]: Canonical query ⇄ parameter encoding
//! - [`engine`]: Substring search over a [`DatasetProvider`](crate::catalog::DatasetProvider)
//! - [`location`]: Location parsing, rewriting, and routing
//! - [`highlight`]: Match ranges for rendering

pub mod codec;
pub mod engine;
pub mod highlight;
pub mod location;

pub use codec::{query_to_url_param, url_param_to_query, QUERY_PARAM};
pub use engine::{normalize_query, QueryEngine, ResultSet};
pub use highlight::match_ranges;
pub use location::{Location, Route, HOME_PATH};
