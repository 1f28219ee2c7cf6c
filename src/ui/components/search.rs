//! Search bar component renderer.
//!
//! Renders the bordered input box holding the draft query. While typing, a
//! block cursor follows the text; while navigating results the box is drawn
//! with the plain border color.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line search box at `row` and returns the next free row.
///
/// ```text
/// [margin] ┌──────────────────────────────┐ [margin]
/// [margin] │ 🔍 Sci-Fi█                   │ [margin]
/// [margin] └──────────────────────────────┘ [margin]
/// ```
///
/// An empty draft shows the placeholder in the dim text color.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let frame = if search.is_typing {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(frame));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let prefix = " 🔍 ";
    let cursor = if search.is_typing { "█" } else { "" };
    let room = inner_width.saturating_sub(text_width(prefix) + text_width(cursor) + 1);

    let (text, color) = if search.query.is_empty() {
        (truncate(&search.placeholder, room), &theme.colors.text_dim)
    } else {
        (tail(&search.query, room), &theme.colors.text_normal)
    };

    let content_len = text_width(prefix) + text_width(&text) + text_width(cursor);
    let padding = inner_width.saturating_sub(content_len);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(frame));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{prefix}");
    if search.query.is_empty() {
        print!("{cursor}");
        print!("{}", Theme::fg(color));
        print!("{text}");
    } else {
        print!("{}", Theme::fg(color));
        print!("{text}");
        print!("{cursor}");
    }
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(frame));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(frame));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Keeps the last `max` characters so the end of a long draft stays visible.
fn tail(text: &str, max: usize) -> String {
    let len = text_width(text);
    text.chars().skip(len.saturating_sub(max)).collect()
}

#[cfg(test)]
mod tests {
    use super::tail;

    #[test]
    fn tail_keeps_the_end() {
        assert_eq!(tail("the lord of the rings", 5), "rings");
        assert_eq!(tail("short", 10), "short");
    }
}
