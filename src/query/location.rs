//! Location strings and routing.
//!
//! A [`Location`] plays the role of the address bar: a path plus an ordered list
//! of `key=value` parameters, written `/path?key=value&...`. Parameter values
//! are stored in their encoded form; the search text lives under
//! [`QUERY_PARAM`] and is decoded through the codec on demand.
//!
//! Routing has two routes: `/` is the catalog, anything else falls through to
//! a "page not found" view.

use super::codec::{query_to_url_param, url_param_to_query, QUERY_PARAM};
use crate::domain::error::DecodeError;
use std::fmt;

/// Path of the catalog route.
pub const HOME_PATH: &str = "/";

/// A parsed location: path and raw (still encoded) parameters.
///
/// # Examples
///
/// ```
/// use movie_explorer::query::Location;
///
/// let location = Location::parse("/?q=Sci-Fi%201999");
/// assert_eq!(location.query(), Ok(Some("Sci-Fi 1999".to_string())));
///
/// let cleared = location.with_query(None);
/// assert_eq!(cleared.to_string(), "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    params: Vec<(String, String)>,
}

impl Location {
    /// The catalog route with no parameters.
    #[must_use]
    pub fn home() -> Self {
        Self {
            path: HOME_PATH.to_string(),
            params: Vec::new(),
        }
    }

    /// Parses a location string.
    ///
    /// Parsing never fails: surrounding whitespace and any `#fragment` are
    /// dropped, an empty path becomes `/`, empty `&&` segments are skipped, and
    /// a segment without `=` is a key with an empty value. Malformed escapes are
    /// only reported when a value is decoded.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let input = input.split_once('#').map_or(input, |(before, _)| before);

        let (path, raw_params) = input.split_once('?').unwrap_or((input, ""));

        let path = if path.is_empty() {
            HOME_PATH.to_string()
        } else {
            path.to_string()
        };

        let params = raw_params
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
                (key.to_string(), value.to_string())
            })
            .collect();

        Self { path, params }
    }

    /// Returns the path component.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the raw value of the first parameter named `key`.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Decodes the search query carried by this location.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the `q` parameter is not valid percent-encoding.
    pub fn query(&self) -> Result<Option<String>, DecodeError> {
        url_param_to_query(self.param(QUERY_PARAM))
    }

    /// Returns the catalog location for a new search.
    ///
    /// The path is reset to `/`. Other parameters are kept in place. The first
    /// `q` is replaced and any later duplicates are dropped; if there was none,
    /// `q` is appended. An absent or empty query removes `q` entirely.
    #[must_use]
    pub fn with_query(&self, query: Option<&str>) -> Self {
        let encoded = query_to_url_param(query);
        let mut params = Vec::with_capacity(self.params.len() + 1);
        let mut placed = false;

        for (key, value) in &self.params {
            if key != QUERY_PARAM {
                params.push((key.clone(), value.clone()));
            } else if !placed {
                placed = true;
                if let Some(encoded) = &encoded {
                    params.push((key.clone(), encoded.clone()));
                }
            }
        }

        if !placed {
            if let Some(encoded) = encoded {
                params.push((QUERY_PARAM.to_string(), encoded));
            }
        }

        Self {
            path: HOME_PATH.to_string(),
            params,
        }
    }

    /// Resolves the route this location points at.
    #[must_use]
    pub fn route(&self) -> Route {
        Route::resolve(self)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::home()
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;

        for (i, (key, value)) in self.params.iter().enumerate() {
            let separator = if i == 0 { '?' } else { '&' };
            write!(f, "{separator}{key}={value}")?;
        }

        Ok(())
    }
}

/// Which view a location selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The searchable catalog grid.
    Home,

    /// Wildcard fallback for every other path.
    NotFound {
        /// The path that did not match.
        path: String,
    },
}

impl Route {
    /// Matches a location against the route table.
    #[must_use]
    pub fn resolve(location: &Location) -> Self {
        if location.path() == HOME_PATH {
            Self::Home
        } else {
            Self::NotFound {
                path: location.path().to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_path() {
        assert_eq!(Location::parse("").path(), "/");
        assert_eq!(Location::parse("?q=x").path(), "/");
        assert_eq!(Location::parse("  /movies/42 \n").path(), "/movies/42");
    }

    #[test]
    fn parse_drops_fragment_and_empty_segments() {
        let location = Location::parse("/?a=1&&q=matrix#top");
        assert_eq!(location.param("a"), Some("1"));
        assert_eq!(location.param("q"), Some("matrix"));
        assert_eq!(location.to_string(), "/?a=1&q=matrix");
    }

    #[test]
    fn key_without_value() {
        let location = Location::parse("/?q");
        assert_eq!(location.param("q"), Some(""));
        assert_eq!(location.query(), Ok(None));
    }

    #[test]
    fn with_query_keeps_siblings_in_place() {
        let location = Location::parse("/?page=2&q=old&sort=year&q=dup");
        assert_eq!(
            location.with_query(Some("new one")).to_string(),
            "/?page=2&q=new%20one&sort=year"
        );
        assert_eq!(location.with_query(Some("")).to_string(), "/?page=2&sort=year");
    }

    #[test]
    fn with_query_appends_and_resets_path() {
        let location = Location::parse("/elsewhere?page=2");
        assert_eq!(location.with_query(Some("Drama")).to_string(), "/?page=2&q=Drama");
    }

    #[test]
    fn malformed_query_surfaces_error() {
        let location = Location::parse("/?q=%E2%82");
        assert!(location.query().is_err());
        assert_eq!(Location::parse("/?q=50%").query(), Err(DecodeError::MalformedEscape { position: 2 }));
    }

    #[test]
    fn routes() {
        assert_eq!(Location::parse("/?q=x").route(), Route::Home);
        assert_eq!(
            Location::parse("/movies").route(),
            Route::NotFound { path: "/movies".to_string() }
        );
    }
}
