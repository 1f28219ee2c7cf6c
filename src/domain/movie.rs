//! Movie domain model.
//!
//! A [`Movie`] is one catalog entry. Movies are loaded once at startup and never
//! change afterwards, so the type only exposes read-side helpers used by the
//! renderer.

use serde::{Deserialize, Serialize};

/// Highest rating a movie may carry.
pub const MAX_RATING: f32 = 10.0;

/// One entry of the movie catalog.
///
/// # Fields
///
/// - `id`: Opaque identifier, unique across the catalog (IMDb-style `tt...` ids
///   in the built-in dataset)
/// - `title`: Display title, never empty
/// - `year`: Release year
/// - `genre`: Short genre tag such as `Drama` or `Sci-Fi`
/// - `rating`: Score between 0 and 10
/// - `runtime`: Length in minutes, always positive
/// - `overview`: Synopsis, may be empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub rating: f32,
    pub runtime: u32,
    #[serde(default)]
    pub overview: String,
}

impl Movie {
    /// Returns the poster initials: the first letter of the first two words of
    /// the title, uppercased.
    ///
    /// # Examples
    ///
    /// ```
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
    /// assert_eq!(movie.initials(), "TM");
    /// ```
    #[must_use]
    pub fn initials(&self) -> String {
        self.title
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Formats the rating the way cards and the detail overlay show it.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("★ {:.1}", self.rating)
    }

    /// Formats the runtime as minutes, e.g. `⏱ 136m`.
    #[must_use]
    pub fn runtime_label(&self) -> String {
        format!("⏱ {}m", self.runtime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            id: "tt1".to_string(),
            title: title.to_string(),
            year: 2000,
            genre: "Drama".to_string(),
            rating: 9.0,
            runtime: 120,
            overview: String::new(),
        }
    }

    #[test]
    fn initials_use_first_two_words() {
        assert_eq!(movie("The Lord of the Rings").initials(), "TL");
        assert_eq!(movie("Inception").initials(), "I");
        assert_eq!(movie("pulp fiction").initials(), "PF");
    }

    #[test]
    fn labels() {
        let m = movie("Inception");
        assert_eq!(m.rating_label(), "★ 9.0");
        assert_eq!(m.runtime_label(), "⏱ 120m");
    }
}
