//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with center coordinates
//! - [`search`]: Search input box and "Ir" button
//! - [`map`]: Map canvas and marker details
//! - [`footer`]: Usage hint and keybinding hints
//! - [`alert`]: Modal alert dialog
//!
//! [`render_layout`] stacks them top to bottom and draws the alert last so
//! it sits over the map.

mod alert;
mod footer;
mod header;
mod map;
mod search;

pub use alert::wrap_words;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use alert::render_alert;
use footer::render_footer;
use header::render_header;
use map::{render_map, render_marker_info};
use search::render_search_bar;

/// Renders the full layout.
///
/// ```text
/// [Header]
/// [Search Bar - 3 lines]
/// [Map canvas]
/// [Marker details]
/// [Hint]
/// [Keybindings]
/// ```
pub fn render_layout(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 1;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_map(current_row, &vm.map, theme);
    current_row = render_marker_info(current_row, &vm.marker, theme, cols);
    let _current_row = render_footer(current_row, &vm.footer, theme, cols);

    if let Some(alert) = &vm.alert {
        render_alert(alert, theme, rows, cols);
    }
}
