//! Rasterizes the map into a grid of cells.

use super::graticule::{crosses_line, nice_step};
use super::projection::Projection;
use crate::domain::Marker;

/// Contents of one map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Blank,
    Parallel,
    Meridian,
    Crossing,
    Pin,
    Label(char),
}

impl MapCell {
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Blank => ' ',
            Self::Parallel => '─',
            Self::Meridian => '│',
            Self::Crossing => '┼',
            Self::Pin => '●',
            Self::Label(c) => c,
        }
    }

    #[must_use]
    pub const fn is_grid(self) -> bool {
        matches!(self, Self::Parallel | Self::Meridian | Self::Crossing)
    }
}

/// A rendered map: graticule plus the marker pin and its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapCanvas {
    rows: usize,
    cols: usize,
    cells: Vec<MapCell>,
    pin: Option<(usize, usize)>,
}

impl MapCanvas {
    /// Draws the grid and the marker through `projection`.
    ///
    /// The title is written one cell right of the pin, or left of it when
    /// there is no room, and truncated to the canvas.
    #[must_use]
    pub fn draw(projection: &Projection, marker: &Marker) -> Self {
        let rows = projection.rows();
        let cols = projection.cols();
        let mut canvas = Self {
            rows,
            cols,
            cells: vec![MapCell::Blank; rows * cols],
            pin: None,
        };
        if rows == 0 || cols == 0 {
            return canvas;
        }

        let (south, north) = (projection.row_bounds(rows - 1).0, projection.row_bounds(0).1);
        let (west, east) = (projection.column_bounds(0).0, projection.column_bounds(cols - 1).1);
        let lat_step = nice_step(north - south);
        let lng_step = nice_step(east - west);

        let meridians: Vec<bool> = (0..cols)
            .map(|col| {
                let (w, e) = projection.column_bounds(col);
                crosses_line(w, e, lng_step)
            })
            .collect();

        for row in 0..rows {
            let (s, n) = projection.row_bounds(row);
            let parallel = crosses_line(s, n, lat_step);
            for (col, &meridian) in meridians.iter().enumerate() {
                canvas.cells[row * cols + col] = match (parallel, meridian) {
                    (true, true) => MapCell::Crossing,
                    (true, false) => MapCell::Parallel,
                    (false, true) => MapCell::Meridian,
                    (false, false) => MapCell::Blank,
                };
            }
        }

        if let Some((row, col)) = projection.project(marker.latitude, marker.longitude) {
            canvas.cells[row * cols + col] = MapCell::Pin;
            canvas.pin = Some((row, col));
            canvas.write_label(row, col, &marker.title);
        }

        canvas
    }

    fn write_label(&mut self, row: usize, pin_col: usize, title: &str) {
        let chars: Vec<char> = title.chars().collect();
        if chars.is_empty() {
            return;
        }
        let room_right = self.cols.saturating_sub(pin_col + 2);
        let room_left = pin_col.saturating_sub(1);

        let (start, len) = if room_right >= chars.len() || room_right >= room_left {
            (pin_col + 2, chars.len().min(room_right))
        } else {
            let len = chars.len().min(room_left);
            (pin_col - 1 - len, len)
        };

        for (offset, &c) in chars.iter().take(len).enumerate() {
            self.cells[row * self.cols + start + offset] = MapCell::Label(c);
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(row, col)`; out-of-range positions are blank.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> MapCell {
        if row >= self.rows || col >= self.cols {
            return MapCell::Blank;
        }
        self.cells[row * self.cols + col]
    }

    /// One row of cells, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> &[MapCell] {
        if row >= self.rows {
            return &[];
        }
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Position of the marker pin, if it is on screen.
    #[must_use]
    pub const fn pin(&self) -> Option<(usize, usize)> {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Region;

    fn canvas_for(region: Region, marker: &Marker, rows: usize, cols: usize) -> MapCanvas {
        let fitted = region.fit(rows, cols);
        MapCanvas::draw(&Projection::new(&fitted, rows, cols), marker)
    }

    #[test]
    fn pin_sits_at_center_when_marker_is_centered() {
        let marker = Marker::default();
        let region = Region::default();
        let canvas = canvas_for(region, &marker, 21, 61);
        assert_eq!(canvas.pin(), Some((10, 30)));
        assert_eq!(canvas.cell(10, 30), MapCell::Pin);
    }

    #[test]
    fn label_follows_pin() {
        let marker = Marker::new(0.0, 0.0, "Ponto", "");
        let canvas = canvas_for(Region::new(0.0, 0.0, 1.0, 1.0), &marker, 11, 41);
        let (row, col) = canvas.pin().unwrap();
        let label: String = canvas.row(row)[col + 2..col + 7].iter().map(|c| c.glyph()).collect();
        assert_eq!(label, "Ponto");
    }

    #[test]
    fn label_flips_left_near_right_edge() {
        let region = Region::new(0.0, 0.0, 1.0, 1.0).fit(11, 41);
        let projection = Projection::new(&region, 11, 41);
        let (lat, lng) = projection.unproject(5, 39);
        let canvas = MapCanvas::draw(&projection, &Marker::new(lat, lng, "Longo", ""));
        assert_eq!(canvas.pin(), Some((5, 39)));
        let label: String = canvas.row(5)[33..38].iter().map(|c| c.glyph()).collect();
        assert_eq!(label, "Longo");
    }

    #[test]
    fn offscreen_marker_has_no_pin() {
        let marker = Marker::new(48.85, 2.35, "Paris", "");
        let canvas = canvas_for(Region::default(), &marker, 20, 60);
        assert_eq!(canvas.pin(), None);
        assert!((0..20).all(|r| canvas.row(r).iter().all(|c| !matches!(c, MapCell::Pin | MapCell::Label(_)))));
    }

    #[test]
    fn grid_lines_are_drawn() {
        let canvas = canvas_for(Region::new(0.0, 0.0, 10.0, 10.0), &Marker::default(), 20, 60);
        let grid_cells = (0..20).flat_map(|r| canvas.row(r).to_vec()).filter(|c| c.is_grid()).count();
        assert!(grid_cells > 0);
        assert!((0..20).any(|r| canvas.row(r).iter().all(|c| matches!(c, MapCell::Parallel | MapCell::Crossing))));
    }

    #[test]
    fn empty_canvas_is_safe() {
        let canvas = canvas_for(Region::default(), &Marker::default(), 0, 0);
        assert_eq!(canvas.pin(), None);
        assert!(canvas.row(0).is_empty());
        assert_eq!(canvas.cell(3, 3), MapCell::Blank);
    }
}
