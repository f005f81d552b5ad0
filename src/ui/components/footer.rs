//! Footer component renderer.
//!
//! Two centered lines: the usage hint, then the keybindings.

use crate::ui::helpers::{center_padding, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the hint at `row` and the keybindings at `row + 1`.
///
/// Text wider than the pane is truncated rather than wrapped.
///
/// Returns the next available row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    render_centered(row, &footer.hint, &theme.colors.text_normal, cols);
    render_centered(row + 1, &footer.keybindings, &theme.colors.text_dim, cols);
    row + 2
}

fn render_centered(row: usize, text: &str, color: &str, cols: usize) {
    let text = truncate(text, cols);
    let (left, right) = center_padding(text_width(&text), cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(left));
    print!("{text}");
    print!("{}", " ".repeat(right));
    print!("{}", Theme::reset());
}
