//! Header component renderer.
//!
//! Renders the title bar: brand on the left, the current location and the
//! theme toggle label on the right.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row` and returns the next free row.
///
/// ```text
///  🎬 Movie Explorer                    /?q=Sci-Fi   [t] 🌙 Dark
/// ```
///
/// The location is truncated first when the line is too narrow.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = format!(" {}", header.title);
    let toggle = format!("[t] {} ", header.theme_label);
    let fixed = text_width(&title) + text_width(&toggle) + 3;
    let location = truncate(&header.location, cols.saturating_sub(fixed));

    let used = text_width(&title) + text_width(&location) + text_width(&toggle) + 3;
    let gap = cols.saturating_sub(used);

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}", Theme::reset());

    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(gap));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{location}");
    print!("   ");
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{toggle}");
    print!("{}", Theme::reset());

    row + 1
}
