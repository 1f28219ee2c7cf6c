//! Movie card grid renderer.
//!
//! Each card takes [`CARD_HEIGHT`] rows and one [`GridInfo::card_width`]-wide
//! cell:
//!
//! ```text
//!  TM  The Matrix
//!      Sci-Fi  1999  ★ 8.7
//! [spacing]
//! ```
//!
//! The two-line block on the left is the poster placeholder showing the
//! title's initials.

use crate::ui::helpers::{self, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardItem, GridInfo, CARD_HEIGHT};

/// Width of the poster block, padding included.
const POSTER_WIDTH: usize = 4;

/// Renders the visible window of cards starting at `row`.
///
/// Returns the row after the last card line.
pub fn render_grid(row: usize, grid: &GridInfo, theme: &Theme) -> usize {
    let columns = grid.columns.max(1);

    for (i, card) in grid.cards.iter().enumerate() {
        let card_row = row + (i / columns) * CARD_HEIGHT;
        let card_col = (i % columns) * grid.card_width + 1;
        render_card(card_row, card_col, card, theme, grid.card_width);
    }

    row + ((grid.cards.len() + columns - 1) / columns) * CARD_HEIGHT
}

fn render_card(row: usize, col: usize, card: &CardItem, theme: &Theme, width: usize) {
    let body_width = width.saturating_sub(POSTER_WIDTH + 2);
    let base = if card.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(row, col);
    render_poster_line(&card.initials, theme);
    print!(" ");
    print!("{base}");
    print!("{}", Theme::bold());
    print!(" ");
    helpers::render_highlighted_text(
        &card.title,
        &card.highlight_ranges,
        theme,
        card.is_selected,
        &format!("{base}{}", Theme::bold()),
    );
    print!("{}", " ".repeat(body_width.saturating_sub(text_width(&card.title) + 1)));
    print!("{}", Theme::reset());

    position_cursor(row + 1, col);
    render_poster_line("", theme);
    print!(" ");
    print!("{base}");
    print!(" ");

    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.badge_fg));
    }
    print!("{}", card.genre);
    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("  {}  ", card.year);
    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.rating_fg));
    }
    print!("{}", card.rating);

    let meta_len = 1 + text_width(&card.genre) + 2 + text_width(&card.year) + 2 + text_width(&card.rating);
    print!("{}", " ".repeat(body_width.saturating_sub(meta_len)));
    print!("{}", Theme::reset());
}

/// Prints one row of the poster block, centering `label` in it.
fn render_poster_line(label: &str, theme: &Theme) {
    let label_len = text_width(label);
    let left = POSTER_WIDTH.saturating_sub(label_len) / 2;
    let right = POSTER_WIDTH.saturating_sub(label_len + left);

    print!("{}", Theme::fg(&theme.colors.poster_fg));
    print!("{}", Theme::bg(&theme.colors.poster_bg));
    print!("{}", Theme::bold());
    print!("{}{label}{}", " ".repeat(left), " ".repeat(right));
    print!("{}", Theme::reset());
}
