//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CHROME_ROWS;

/// Smallest pane that fits the chrome plus one map row.
const MIN_ROWS: usize = CHROME_ROWS + 1;
const MIN_COLS: usize = 20;

/// Renders the plugin UI to stdout.
///
/// Panes too small for the layout get a one-line notice instead.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    if rows < MIN_ROWS || cols < MIN_COLS {
        position_cursor(1, 1);
        print!(
            "{}{}{}",
            Theme::fg(&state.theme.colors.text_dim),
            truncate("zelmap: painel pequeno demais", cols),
            Theme::reset()
        );
        return;
    }

    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, rows, cols);
}
