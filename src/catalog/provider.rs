//! Dataset provider abstraction.
//!
//! [`DatasetProvider`] is the read-only contract the query engine is written
//! against. The in-memory [`Catalog`](crate::catalog::Catalog) is the only
//! implementation today; a larger backing store could slot in behind the same
//! two methods without touching the engine or the application layer.

use crate::domain::Movie;

/// Read-only access to an ordered, immutable set of movies.
///
/// # Contract
///
/// - [`all`](Self::all) returns every movie in catalog order, and the same
///   order on every call for the lifetime of the provider.
/// - [`get_by_id`](Self::get_by_id) returns the unique movie with that id, or
///   `None`. Not finding a movie is a normal outcome, not an error.
///
/// # Examples
///
/// ```
/// use movie_explorer::catalog::{Catalog, DatasetProvider};
///
/// let catalog = Catalog::builtin()?;
/// let first = &catalog.all()[0];
/// assert_eq!(catalog.get_by_id(&first.id), Some(first));
/// assert!(catalog.get_by_id("missing").is_none());
/// # Ok::<(), movie_explorer::ExplorerError>(())
/// ```
pub trait DatasetProvider {
    /// Returns the full ordered movie sequence.
    fn all(&self) -> &[Movie];

    /// Looks up a movie by its identifier.
    fn get_by_id(&self, id: &str) -> Option<&Movie>;

    /// Number of movies in the dataset.
    fn len(&self) -> usize {
        self.all().len()
    }

    /// Whether the dataset holds no movies at all.
    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}
