//! Composable UI component renderers.
//!
//! Each component prints one part of the interface at a given row and returns
//! the next free row, so [`render_layout`] can stack them top to bottom.
//!
//! # Components
//!
//! - [`header`]: Brand, location, and theme toggle
//! - [`search`]: Search input box
//! - [`grid`]: Movie cards
//! - [`empty`]: No-results and not-found messages
//! - [`detail`]: Movie detail overlay
//! - [`footer`]: Key hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Summary]
//! [blank line]
//! [Grid or Empty State]
//! [Border]
//! [Footer]
//! [Detail Overlay, drawn last on top]
//! ```

mod detail;
mod empty;
mod footer;
mod grid;
mod header;
mod search;

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use grid::render_grid;
use header::render_header;
use search::render_search_bar;

/// Renders a horizontal border line at `row` and returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the one-line results summary.
fn render_summary(row: usize, summary: &str, theme: &Theme, cols: usize) -> usize {
    let text = truncate(summary, cols.saturating_sub(2));
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" {text}");
    print!("{}", " ".repeat(cols.saturating_sub(text_width(&text) + 1)));
    print!("{}", Theme::reset());
    row + 2
}

/// Renders a full frame for `vm`.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_summary(current_row, &vm.summary, theme, cols);

    if let Some(grid) = &vm.grid {
        render_grid(current_row, grid, theme);
    } else if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);

    if let Some(detail) = &vm.detail {
        render_detail(detail, theme, rows, cols);
    }
}
