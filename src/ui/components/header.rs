//! Header component renderer.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar: bold title on the left, status on the right.
///
/// The status is dropped first when the pane is too narrow for both.
///
/// Returns the next available row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let title_len = text_width(&title);
    let room = cols.saturating_sub(title_len + 1);
    let status = if text_width(&header.status) <= room {
        header.status.clone()
    } else {
        String::new()
    };
    let gap = cols.saturating_sub(title_len + text_width(&status));

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
    print!("{status}");
    print!("{}", Theme::reset());
    row + 1
}
