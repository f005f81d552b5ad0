//! Search bar component renderer.
//!
//! Draws the query box and the "Ir" button side by side:
//!
//! ```text
//! ┌──────────────────────────────┐ ┌────┐
//! │ Buscar local                 │ │ Ir │
//! └──────────────────────────────┘ └────┘
//! ```

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin on both sides of the bar.
const SEARCH_BOX_MARGIN: usize = 1;

/// Suffix shown inside the box while a request is in flight.
const SEARCHING_SUFFIX: &str = " …";

/// Renders the search box and button starting at `row`.
///
/// When focused, the box uses the focus color and a reverse-video cursor is
/// drawn after the query. The query is scrolled so its tail stays visible.
///
/// Returns the next available row (`row + 3`).
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let button_inner = text_width(&search.button) + 2;
    let button_width = button_inner + 2;
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + button_width + 1);
    let inner_width = box_width.saturating_sub(2);

    let border = if search.focused {
        &theme.colors.search_bar_focus
    } else {
        &theme.colors.search_bar_border
    };

    let suffix = if search.searching { SEARCHING_SUFFIX } else { "" };
    // one column of left padding, one for the cursor
    let text_room = inner_width.saturating_sub(2 + text_width(suffix));
    let query_chars: Vec<char> = search.query.chars().collect();
    let visible: String = query_chars[query_chars.len().saturating_sub(text_room)..].iter().collect();

    let margin = " ".repeat(SEARCH_BOX_MARGIN);

    position_cursor(row, 1);
    print!("{margin}{}┌{}┐ ", Theme::fg(border), "─".repeat(inner_width));
    print!("{}┌{}┐{}", Theme::fg(&theme.colors.button_bg), "─".repeat(button_inner), Theme::reset());

    position_cursor(row + 1, 1);
    print!("{margin}{}│ ", Theme::fg(border));
    let mut used = 1;
    if search.query.is_empty() && !search.focused {
        let placeholder: String = search.placeholder.chars().take(text_room + 1).collect();
        used += text_width(&placeholder);
        print!("{}{placeholder}", Theme::fg(&theme.colors.placeholder));
    } else {
        used += text_width(&visible);
        print!("{}{visible}", Theme::fg(&theme.colors.text_normal));
        if search.focused {
            print!("{} {}", Theme::reverse(), Theme::reset());
            used += 1;
        }
    }
    if search.searching {
        print!("{}{suffix}", Theme::fg(&theme.colors.text_dim));
        used += text_width(suffix);
    }
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}│{} ", Theme::fg(border), Theme::reset());
    print!("{}│", Theme::fg(&theme.colors.button_bg));
    print!("{}{}{} {} ", Theme::bold(), Theme::bg(&theme.colors.button_bg), Theme::fg(&theme.colors.button_fg), search.button);
    print!("{}{}│{}", Theme::reset(), Theme::fg(&theme.colors.button_bg), Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{}└{}┘ ", Theme::fg(border), "─".repeat(inner_width));
    print!("{}└{}┘{}", Theme::fg(&theme.colors.button_bg), "─".repeat(button_inner), Theme::reset());

    row + 3
}
