//! Detail overlay renderer.
//!
//! Draws a framed box over the centre of the pane. Everything underneath
//! stays rendered; the overlay simply paints over it.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailInfo, OVERLAY_MAX_WIDTH};

/// Renders the overlay for `detail`, vertically centered in `rows`.
pub fn render_detail(detail: &DetailInfo, theme: &Theme, rows: usize, cols: usize) {
    let box_width = cols.min(OVERLAY_MAX_WIDTH).saturating_sub(4);
    let inner_width = box_width.saturating_sub(2);
    let left = (cols.saturating_sub(box_width)) / 2 + 1;

    let lines = overlay_lines(detail, theme);
    let box_height = lines.len() + 2;
    let top = (rows.saturating_sub(box_height)) / 2 + 1;

    position_cursor(top, left);
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("╭{}╮", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    for (i, (text, style)) in lines.iter().enumerate() {
        let text = truncate(text, inner_width.saturating_sub(2));
        let padding = inner_width.saturating_sub(text_width(&text) + 1);

        position_cursor(top + 1 + i, left);
        print!("{}", Theme::fg(&theme.colors.overlay_border));
        print!("│");
        print!("{}", Theme::reset());
        print!(" {style}{text}{}", Theme::reset());
        print!("{}", " ".repeat(padding));
        print!("{}", Theme::fg(&theme.colors.overlay_border));
        print!("│");
        print!("{}", Theme::reset());
    }

    position_cursor(top + box_height - 1, left);
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("╰{}╯", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}

/// Content lines of the overlay paired with their styling escape.
fn overlay_lines(detail: &DetailInfo, theme: &Theme) -> Vec<(String, String)> {
    let normal = Theme::fg(&theme.colors.text_normal);
    let dim = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    let title = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));

    let mut lines = vec![(String::new(), normal.clone())];

    match detail {
        DetailInfo::Movie {
            title: movie_title,
            initials,
            meta,
            overview_lines,
            helper,
        } => {
            lines.push((format!("[{initials}]  {movie_title}"), title));
            lines.push((meta.clone(), Theme::fg(&theme.colors.rating_fg)));
            lines.push((String::new(), normal.clone()));
            lines.extend(overview_lines.iter().map(|line| (line.clone(), normal.clone())));
            lines.push((String::new(), normal.clone()));
            lines.push((helper.clone(), dim.clone()));
        }
        DetailInfo::Missing { id } => {
            lines.push(("Movie not found".to_string(), Theme::fg(&theme.colors.empty_state_fg)));
            lines.push((format!("No movie has the id \"{id}\"."), normal.clone()));
        }
    }

    lines.push((String::new(), normal));
    lines.push(("Esc or Enter to close".to_string(), dim));
    lines
}
