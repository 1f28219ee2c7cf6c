//! Canonical mapping between a search query and its location parameter.
//!
//! Encoding uses `urlencoding`: ASCII letters, digits and `-_.~` pass through,
//! every other byte becomes `%XX` with uppercase hex. Because the encoding is
//! canonical, encode-then-decode is the identity for any string and
//! decode-then-encode is the identity for any parameter this module produced.
//!
//! `+` is a literal plus sign in both directions. It encodes to `%2B`, and a raw
//! `+` inside a parameter decodes to `+`, never to a space.
//!
//! An empty query and an absent query are the same thing: both map to "no
//! parameter".

use crate::domain::error::DecodeError;

/// Location query key carrying the search text.
pub const QUERY_PARAM: &str = "q";

/// Encodes a query for the location string.
///
/// Returns `None` for an absent or empty query, which means the parameter is
/// omitted from the location.
///
/// # Examples
///
/// ```
/// use movie_explorer::query::query_to_url_param;
///
/// assert_eq!(query_to_url_param(Some("Sci-Fi 1999")).as_deref(), Some("Sci-Fi%201999"));
/// assert_eq!(query_to_url_param(Some("a+b")).as_deref(), Some("a%2Bb"));
/// assert_eq!(query_to_url_param(Some("")), None);
/// assert_eq!(query_to_url_param(None), None);
/// ```
#[must_use]
pub fn query_to_url_param(query: Option<&str>) -> Option<String> {
    query
        .filter(|q| !q.is_empty())
        .map(|q| urlencoding::encode(q).into_owned())
}

/// Decodes a location parameter back into a query.
///
/// `None` stays `None`, and a present but empty parameter also maps to `None`.
///
/// # Errors
///
/// - [`DecodeError::MalformedEscape`] if a `%` is not followed by two hex digits
/// - [`DecodeError::InvalidUtf8`] if the decoded bytes are not UTF-8
///
/// # Examples
///
/// ```
/// use movie_explorer::query::url_param_to_query;
/// use movie_explorer::DecodeError;
///
/// assert_eq!(url_param_to_query(Some("Sci-Fi%201999")), Ok(Some("Sci-Fi 1999".to_string())));
/// assert_eq!(url_param_to_query(Some("a+b")), Ok(Some("a+b".to_string())));
/// assert_eq!(
///     url_param_to_query(Some("matrix%2")),
///     Err(DecodeError::MalformedEscape { position: 6 })
/// );
/// ```
pub fn url_param_to_query(param: Option<&str>) -> Result<Option<String>, DecodeError> {
    let Some(param) = param.filter(|p| !p.is_empty()) else {
        return Ok(None);
    };

    check_escapes(param)?;

    let decoded = urlencoding::decode(param).map_err(|_| DecodeError::InvalidUtf8)?;
    Ok(Some(decoded.into_owned()))
}

/// Rejects `%` sequences that are not followed by two hex digits.
///
/// `urlencoding::decode` passes such sequences through untouched; here they are
/// an error so a damaged location never turns into a silently different query.
fn check_escapes(param: &str) -> Result<(), DecodeError> {
    let bytes = param.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                return Err(DecodeError::MalformedEscape { position: i });
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    Ok(())
}
