//! Match positions for highlighting search hits in titles.

use super::engine::normalize_query;

/// Returns the character ranges of `text` that match `query`.
///
/// Ranges are `(start, end)` in character indices with an exclusive end, in
/// ascending order and non-overlapping. Matching uses the same case folding as
/// the search itself. If lowercasing changes the character count of `text`
/// (a few non-ASCII letters do), no ranges are returned rather than risk
/// highlighting the wrong characters.
///
/// # Examples
///
/// ```
/// use movie_explorer::query::match_ranges;
///
/// assert_eq!(match_ranges("The Lord of the Rings", Some("the")), vec![(0, 3), (12, 15)]);
/// assert!(match_ranges("Inception", None).is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: Option<&str>) -> Vec<(usize, usize)> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    let folded = text.to_lowercase();
    if folded.chars().count() != text.chars().count() {
        return Vec::new();
    }

    let needle_chars = needle.chars().count();
    let mut ranges = Vec::new();
    let mut search_from = 0;

    while let Some(offset) = folded[search_from..].find(&needle) {
        let byte_start = search_from + offset;
        let char_start = folded[..byte_start].chars().count();
        ranges.push((char_start, char_start + needle_chars));
        search_from = byte_start + needle.len();
    }

    ranges
}
