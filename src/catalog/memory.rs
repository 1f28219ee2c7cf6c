//! In-memory catalog.
//!
//! [`Catalog`] keeps the movies in a `Vec` (preserving load order) plus a
//! `HashMap` from id to position for O(1) lookups. It is validated once on
//! construction and never mutated afterwards.

use crate::catalog::provider::DatasetProvider;
use crate::domain::error::{ExplorerError, Result};
use crate::domain::movie::{Movie, MAX_RATING};
use std::collections::HashMap;

/// The fixed, ordered collection of all movies.
///
/// Construct it with [`Catalog::new`] (validates the records) or
/// [`Catalog::builtin`] (the embedded dataset). There is no API to add, remove,
/// or edit entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Movies in catalog order.
    movies: Vec<Movie>,

    /// Position of each movie in `movies`, keyed by id.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from movies in display order.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Catalog`] if:
    /// - two movies share an id, or an id is empty
    /// - a title is empty
    /// - a rating falls outside `0..=10`
    /// - a runtime is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use movie_explorer::catalog::{Catalog, DatasetProvider};
    /// use movie_explorer::Movie;
    ///
    /// let movie = Movie {
    ///     id: "tt0133093".to_string(),
    ///     title: "The Matrix".to_string(),
    ///     year: 1999,
    ///     genre: "Sci-Fi".to_string(),
    ///     rating: 8.7,
    ///     runtime: 136,
    ///     overview: String::new(),
    /// };
    /// let catalog = Catalog::new(vec![movie.clone(), movie]);
    /// assert!(catalog.is_err());
    /// ```
    pub fn new(movies: Vec<Movie>) -> Result<Self> {
        let mut index = HashMap::with_capacity(movies.len());

        for (position, movie) in movies.iter().enumerate() {
            Self::validate(movie)?;

            if index.insert(movie.id.clone(), position).is_some() {
                return Err(ExplorerError::Catalog(format!(
                    "duplicate movie id '{}'",
                    movie.id
                )));
            }
        }

        tracing::debug!(movie_count = movies.len(), "catalog constructed");

        Ok(Self { movies, index })
    }

    /// Creates a catalog with no movies.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            movies: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn validate(movie: &Movie) -> Result<()> {
        if movie.id.is_empty() {
            return Err(ExplorerError::Catalog(format!(
                "movie '{}' has an empty id",
                movie.title
            )));
        }
        if movie.title.trim().is_empty() {
            return Err(ExplorerError::Catalog(format!(
                "movie '{}' has an empty title",
                movie.id
            )));
        }
        if !(0.0..=MAX_RATING).contains(&movie.rating) {
            return Err(ExplorerError::Catalog(format!(
                "movie '{}' has rating {} outside 0-{MAX_RATING}",
                movie.id, movie.rating
            )));
        }
        if movie.runtime == 0 {
            return Err(ExplorerError::Catalog(format!(
                "movie '{}' has a zero runtime",
                movie.id
            )));
        }
        Ok(())
    }
}

impl DatasetProvider for Catalog {
    fn all(&self) -> &[Movie] {
        &self.movies
    }

    fn get_by_id(&self, id: &str) -> Option<&Movie> {
        self.index.get(id).and_then(|&position| self.movies.get(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, title: &str) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            year: 1999,
            genre: "Sci-Fi".to_string(),
            rating: 8.7,
            runtime: 136,
            overview: String::new(),
        }
    }

    #[test]
    fn preserves_order_and_indexes_ids() {
        let catalog = Catalog::new(vec![movie("b", "Second"), movie("a", "First")]).unwrap();
        let titles: Vec<&str> = catalog.all().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["Second", "First"]);
        assert_eq!(catalog.get_by_id("a").map(|m| m.title.as_str()), Some("First"));
        assert!(catalog.get_by_id("c").is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![movie("a", "One"), movie("a", "Two")]).unwrap_err();
        assert!(err.to_string().contains("duplicate movie id 'a'"));
    }

    #[test]
    fn rejects_invalid_records() {
        assert!(Catalog::new(vec![movie("", "No Id")]).is_err());
        assert!(Catalog::new(vec![movie("a", "  ")]).is_err());

        let mut bad_rating = movie("a", "Rated");
        bad_rating.rating = 11.0;
        assert!(Catalog::new(vec![bad_rating]).is_err());

        let mut no_runtime = movie("a", "Short");
        no_runtime.runtime = 0;
        assert!(Catalog::new(vec![no_runtime]).is_err());
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.get_by_id("anything").is_none());
    }
}
