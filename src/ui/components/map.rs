//! Map canvas and marker detail renderers.

use crate::map::{MapCanvas, MapCell};
use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::MarkerInfo;

/// Renders every canvas row starting at `row`.
///
/// Consecutive cells of the same kind share one color escape.
///
/// Returns the row after the canvas.
pub fn render_map(row: usize, canvas: &MapCanvas, theme: &Theme) -> usize {
    for r in 0..canvas.rows() {
        position_cursor(row + r, 1);
        if let Some(bg) = &theme.colors.map_bg {
            print!("{}", Theme::bg(bg));
        }

        let mut current: Option<&str> = None;
        for &cell in canvas.row(r) {
            let color = cell_color(cell, theme);
            if current != Some(color) {
                if cell == MapCell::Pin {
                    print!("{}", Theme::bold());
                }
                print!("{}", Theme::fg(color));
                current = Some(color);
            }
            print!("{}", cell.glyph());
            if cell == MapCell::Pin {
                print!("{}", Theme::reset());
                if let Some(bg) = &theme.colors.map_bg {
                    print!("{}", Theme::bg(bg));
                }
                current = None;
            }
        }
        print!("{}", Theme::reset());
    }
    row + canvas.rows()
}

fn cell_color(cell: MapCell, theme: &Theme) -> &str {
    match cell {
        MapCell::Pin => &theme.colors.marker_fg,
        MapCell::Label(_) => &theme.colors.marker_label,
        MapCell::Blank | MapCell::Parallel | MapCell::Meridian | MapCell::Crossing => {
            &theme.colors.map_grid
        }
    }
}

/// Renders the marker line: pin, title, description, coordinates.
///
/// An arrow replaces the pin when the marker is off screen.
///
/// Returns the next available row.
pub fn render_marker_info(row: usize, info: &MarkerInfo, theme: &Theme, cols: usize) -> usize {
    let pin = if info.on_screen { '●' } else { '↗' };
    let details = format!("{} · {}", info.description, info.coordinates);
    let title = truncate(&info.title, cols.saturating_sub(3));
    let room = cols.saturating_sub(3 + text_width(&title) + 3);
    let details = truncate(&details, room);

    position_cursor(row, 1);
    print!(" {}{pin}{} ", Theme::fg(&theme.colors.marker_fg), Theme::reset());
    print!("{}{}{title}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal), Theme::reset());
    if !details.is_empty() {
        print!("{}   {details}", Theme::fg(&theme.colors.text_dim));
    }
    let used = 3 + text_width(&title) + if details.is_empty() { 0 } else { 3 + text_width(&details) };
    print!("{}{}", " ".repeat(cols.saturating_sub(used)), Theme::reset());
    row + 1
}
