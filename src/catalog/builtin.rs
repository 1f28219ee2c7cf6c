//! Embedded demo dataset.
//!
//! The dataset lives in `data/movies.toml` and is compiled into the plugin so
//! the explorer works without any file access.

use crate::catalog::memory::Catalog;
use crate::domain::error::{ExplorerError, Result};
use crate::domain::Movie;
use serde::Deserialize;

const BUILTIN_DATASET: &str = include_str!("../../data/movies.toml");

/// On-disk shape of a dataset file: a `[[movies]]` array of tables.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    movies: Vec<Movie>,
}

/// Parses a TOML dataset into a validated catalog.
///
/// # Errors
///
/// Returns [`ExplorerError::Catalog`] if the TOML is malformed or a record
/// breaks a catalog invariant.
pub fn parse_dataset(source: &str) -> Result<Catalog> {
    let file: DatasetFile = toml::from_str(source)
        .map_err(|e| ExplorerError::Catalog(format!("failed to parse dataset: {e}")))?;

    Catalog::new(file.movies)
}

impl Catalog {
    /// Loads the built-in twelve-title demo catalog.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded dataset is broken, which the unit tests guard
    /// against.
    pub fn builtin() -> Result<Self> {
        parse_dataset(BUILTIN_DATASET)
    }
}

impl Default for Catalog {
    /// Returns the built-in catalog.
    ///
    /// # Panics
    ///
    /// Panics if the embedded dataset fails to parse (should never occur).
    fn default() -> Self {
        Self::builtin().expect("Built-in movie dataset should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DatasetProvider;

    #[test]
    fn builtin_dataset_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.all()[0].title, "The Shawshank Redemption");
        assert_eq!(catalog.all()[11].title, "Back to the Future");
    }

    #[test]
    fn overview_defaults_to_empty() {
        let catalog = parse_dataset(
            r#"
            [[movies]]
            id = "x1"
            title = "Untold"
            year = 2020
            genre = "Drama"
            rating = 5.0
            runtime = 90
            "#,
        )
        .unwrap();
        assert_eq!(catalog.all()[0].overview, "");
    }

    #[test]
    fn malformed_dataset_is_a_catalog_error() {
        let err = parse_dataset("movies = 3").unwrap_err();
        assert!(matches!(err, ExplorerError::Catalog(_)));
    }
}
