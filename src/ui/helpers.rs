//! Shared rendering utilities.
//!
//! Widths are counted in `char`s. Every string the plugin draws (Portuguese
//! labels, addresses, box-drawing glyphs) is one column per char.

/// Positions the cursor at a 1-indexed row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` columns, ending with `…` when shortened.
///
/// # Example
///
/// ```rust
/// use zelmap::ui::helpers::truncate;
///
/// assert_eq!(truncate("Avenida Paulista", 8), "Avenida…");
/// assert_eq!(truncate("Sé", 8), "Sé");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Left and right padding that centers `width` columns inside `cols`.
#[must_use]
pub const fn center_padding(width: usize, cols: usize) -> (usize, usize) {
    let left = cols.saturating_sub(width) / 2;
    (left, cols.saturating_sub(left + width))
}
