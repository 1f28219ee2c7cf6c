//! Error types for the Movie Explorer plugin.
//!
//! [`ExplorerError`] is the crate-wide error type and [`Result`] the matching
//! alias. Location decoding has its own narrower [`DecodeError`] so that the
//! query codec can be used without pulling in the rest of the taxonomy.

use thiserror::Error;

/// Failure to decode a percent-encoded location parameter.
///
/// Callers on the navigation path recover from this by treating the location
/// as carrying no query. The codec itself never guesses at a repair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A `%` was not followed by two hexadecimal digits.
    ///
    /// `position` is the byte offset of the offending `%` in the parameter.
    #[error("malformed percent escape at byte {position}")]
    MalformedEscape {
        /// Byte offset of the `%` that starts the bad escape.
        position: usize,
    },

    /// The escapes were well formed but the decoded bytes are not UTF-8.
    #[error("decoded parameter is not valid UTF-8")]
    InvalidUtf8,
}

/// The main error type for Movie Explorer operations.
///
/// # Examples
///
/// ```
/// use movie_explorer::ExplorerError;
///
/// let err = ExplorerError::NotFound { id: "tt0000000".to_string() };
/// assert_eq!(err.to_string(), "Movie not found: tt0000000");
/// ```
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// No movie in the catalog carries the requested identifier.
    ///
    /// Raised by detail lookups. A stale or hand-edited id is an expected
    /// input, so the application renders a placeholder instead of failing.
    #[error("Movie not found: {id}")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// A location parameter failed to decode.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The dataset violates a catalog invariant (duplicate id, empty title, ...).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Movie Explorer operations.
pub type Result<T> = std::result::Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_converts_into_explorer_error() {
        let err: ExplorerError = DecodeError::MalformedEscape { position: 3 }.into();
        assert!(matches!(
            err,
            ExplorerError::Decode(DecodeError::MalformedEscape { position: 3 })
        ));
        assert_eq!(err.to_string(), "Decode error: malformed percent escape at byte 3");
    }
}
