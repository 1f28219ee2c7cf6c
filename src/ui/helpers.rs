//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used by several components: cursor positioning, match
//! highlighting, and text fitting. Everything here works on character
//! indices, not byte indices, so multi-byte titles are never split.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for query matches.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. When `is_selected` is `true` the text is printed plain so
/// the selection colors win. After each highlighted section the `restore`
/// escape is re-applied so the surrounding card styling continues.
///
/// # Example
///
/// ```rust
/// use movie_explorer::ui::helpers::render_highlighted_text;
/// use movie_explorer::ui::Theme;
///
/// let theme = Theme::default();
/// render_highlighted_text("The Matrix", &[(4, 10)], &theme, false, "");
/// ```
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
    restore: &str,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{restore}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Display width of `text`, counted in characters.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` characters, ending with `...` when cut.
///
/// ```rust
/// use movie_explorer::ui::helpers::truncate;
///
/// assert_eq!(truncate("The Matrix", 20), "The Matrix");
/// assert_eq!(truncate("The Lord of the Rings", 10), "The Lor...");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }

    let mut shortened: String = text.chars().take(max - 3).collect();
    shortened.push_str("...");
    shortened
}

/// Word-wraps `text` into lines of at most `width` characters.
///
/// Words longer than a line are split. A zero width yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if line_width > 0 {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if line_width == 0 { word.len() } else { line_width + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line_width += word.len();
        line.extend(word);
    }

    if line_width > 0 {
        lines.push(line);
    }
    lines
}
