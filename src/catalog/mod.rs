//! Dataset provider layer.
//!
//! Holds the immutable, ordered movie catalog and exposes full-scan and
//! lookup-by-id access. The catalog is fixed when the plugin loads.
//!
//! # Modules
//!
//! - [`provider`]: The [`DatasetProvider`] trait
//! - [`memory`]: In-memory [`Catalog`] implementation
//! - [`builtin`]: Embedded demo dataset

pub mod builtin;
pub mod memory;
pub mod provider;

pub use builtin::parse_dataset;
pub use memory::Catalog;
pub use provider::DatasetProvider;
