//! Substring search over the catalog.
//!
//! [`QueryEngine`] wraps a [`DatasetProvider`] and answers free-text queries.
//! A movie matches when the lowercased query is a substring of its lowercased
//! title, its year written as decimal digits, or its lowercased genre. Results
//! keep catalog order; there is no scoring.
//!
//! The lowercased fields are computed once when the engine is built and kept
//! in a [`SearchKey`] per movie, aligned with `provider.all()`.

use crate::catalog::DatasetProvider;
use crate::domain::error::{ExplorerError, Result};
use crate::domain::Movie;

/// Ordered subsequence of the catalog that matched a query.
pub type ResultSet<'a> = Vec<&'a Movie>;

/// Precomputed comparison forms of the searchable fields of one movie.
#[derive(Debug, Clone)]
struct SearchKey {
    title: String,
    year: String,
    genre: String,
}

impl SearchKey {
    fn new(movie: &Movie) -> Self {
        Self {
            title: movie.title.to_lowercase(),
            year: movie.year.to_string(),
            genre: movie.genre.to_lowercase(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.contains(needle) || self.year.contains(needle) || self.genre.contains(needle)
    }
}

/// Folds a query into its comparison form.
///
/// Returns `None` when the query is absent or empty, meaning "no filter". The
/// caller's string is left untouched; only the returned copy is lowercased.
/// Whitespace is significant and is not trimmed.
#[must_use]
pub fn normalize_query(query: Option<&str>) -> Option<String> {
    query.filter(|q| !q.is_empty()).map(str::to_lowercase)
}

/// Free-text search engine over a dataset provider.
///
/// The engine holds no query state between calls, so `search` is a pure
/// function of its argument and the immutable dataset.
///
/// # Examples
///
/// ```
/// use movie_explorer::catalog::Catalog;
/// use movie_explorer::query::QueryEngine;
///
/// let engine = QueryEngine::new(Catalog::builtin()?);
/// let results = engine.search(Some("matrix"));
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].title, "The Matrix");
/// # Ok::<(), movie_explorer::ExplorerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QueryEngine<P> {
    provider: P,
    keys: Vec<SearchKey>,
}

impl<P: DatasetProvider> QueryEngine<P> {
    /// Builds an engine and its search keys from a provider.
    pub fn new(provider: P) -> Self {
        let keys = provider.all().iter().map(SearchKey::new).collect();
        Self { provider, keys }
    }

    /// Returns the underlying provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns every movie in catalog order.
    pub fn all(&self) -> &[Movie] {
        self.provider.all()
    }

    /// Returns the movies matching `query`, in catalog order.
    ///
    /// An absent or empty query returns the whole catalog.
    pub fn search(&self, query: Option<&str>) -> ResultSet<'_> {
        let _span = tracing::debug_span!(
            "search",
            catalog_size = self.keys.len(),
            query_len = query.map_or(0, str::len)
        )
        .entered();

        let Some(needle) = normalize_query(query) else {
            return self.all().iter().collect();
        };

        let results: ResultSet<'_> = self
            .all()
            .iter()
            .zip(&self.keys)
            .filter(|(_, key)| key.matches(&needle))
            .map(|(movie, _)| movie)
            .collect();

        tracing::debug!(result_count = results.len(), "search completed");
        results
    }

    /// Looks up a movie for the detail overlay.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::NotFound`] when no movie has this id. Callers
    /// are expected to render a placeholder rather than propagate it.
    pub fn open_detail(&self, id: &str) -> Result<&Movie> {
        self.provider.get_by_id(id).ok_or_else(|| {
            tracing::debug!(movie_id = %id, "detail lookup missed");
            ExplorerError::NotFound { id: id.to_string() }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn engine() -> QueryEngine<Catalog> {
        QueryEngine::new(Catalog::builtin().unwrap())
    }

    fn titles(results: &ResultSet<'_>) -> Vec<String> {
        results.iter().map(|m| m.title.clone()).collect()
    }

    #[test]
    fn normalize_folds_case_without_trimming() {
        assert_eq!(normalize_query(Some(" Sci-Fi ")).as_deref(), Some(" sci-fi "));
        assert_eq!(normalize_query(Some("")), None);
        assert_eq!(normalize_query(None), None);
    }

    #[test]
    fn genre_match_keeps_catalog_order() {
        assert_eq!(
            titles(&engine().search(Some("sci-fi"))),
            ["The Matrix", "Inception", "Back to the Future"]
        );
    }

    #[test]
    fn year_match_is_substring_of_digits() {
        assert_eq!(
            titles(&engine().search(Some("1994"))),
            ["The Shawshank Redemption", "Forrest Gump", "Pulp Fiction"]
        );
        assert_eq!(engine().search(Some("200")).len(), 3);
    }

    #[test]
    fn title_match_is_case_insensitive() {
        assert_eq!(engine().search(Some("LORD OF")).len(), 2);
        assert_eq!(titles(&engine().search(Some("gump"))), ["Forrest Gump"]);
    }

    #[test]
    fn whitespace_is_part_of_the_needle() {
        assert_eq!(engine().search(Some(" matrix")).len(), 1);
        assert!(engine().search(Some("matrix ")).is_empty());
    }

    #[test]
    fn overview_is_not_searched() {
        assert!(engine().search(Some("hobbit")).is_empty());
    }

    #[test]
    fn open_detail_reports_missing_ids() {
        let engine = engine();
        assert_eq!(engine.open_detail("tt0133093").unwrap().title, "The Matrix");
        assert!(matches!(
            engine.open_detail("tt9999999"),
            Err(ExplorerError::NotFound { ref id }) if id == "tt9999999"
        ));
    }
}
