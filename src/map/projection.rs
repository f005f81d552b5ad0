//! Web Mercator projection onto a grid of terminal cells.
//!
//! Longitude maps linearly to columns. Latitude goes through the Mercator
//! y function first, expressed in degrees so both axes share a unit. A
//! terminal cell is about twice as tall as it is wide, so one row covers
//! twice the distance of one column.

use crate::domain::region::{wrap_longitude, MAX_LATITUDE_DELTA, MAX_LONGITUDE_DELTA};
use crate::domain::Region;
use std::f64::consts::FRAC_PI_4;

/// Height of a terminal cell divided by its width.
pub const CELL_ASPECT: f64 = 2.0;

/// Latitude at which Web Mercator becomes a square world.
const MERCATOR_LIMIT: f64 = 85.051_128_78;

/// Mercator y coordinate of a latitude, in degree units.
#[must_use]
pub fn mercator_y(latitude: f64) -> f64 {
    let phi = latitude.clamp(-MERCATOR_LIMIT, MERCATOR_LIMIT).to_radians();
    (FRAC_PI_4 + phi / 2.0).tan().ln().to_degrees()
}

/// Inverse of [`mercator_y`].
#[must_use]
pub fn inverse_mercator_y(y: f64) -> f64 {
    (2.0 * y.to_radians().exp().atan() - std::f64::consts::FRAC_PI_2).to_degrees()
}

impl Region {
    /// Expands the shorter span so the region fills a `rows` x `cols` canvas
    /// without distortion.
    ///
    /// The center never moves. The result is clamped like any other region,
    /// so at world scale the aspect may not be matched exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use zelmap::domain::Region;
    ///
    /// // 20 rows of double-height cells next to 80 columns is a 2:1 canvas.
    /// let fitted = Region::new(0.0, 0.0, 1.0, 1.0).fit(20, 80);
    /// assert!((fitted.longitude_delta - 2.0).abs() < 1e-3);
    /// assert!((fitted.latitude_delta - 1.0).abs() < 1e-3);
    /// ```
    #[must_use]
    pub fn fit(self, rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            return self;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = cols as f64 / (rows as f64 * CELL_ASPECT);

        let center_y = mercator_y(self.latitude);
        let y_span = mercator_span(self.latitude, self.latitude_delta);
        let x_span = self.longitude_delta;

        if x_span / y_span < ratio {
            Self::new(
                self.latitude,
                self.longitude,
                self.latitude_delta,
                (y_span * ratio).min(MAX_LONGITUDE_DELTA),
            )
        } else {
            let wanted = x_span / ratio;
            let top = inverse_mercator_y(center_y + wanted / 2.0);
            let bottom = inverse_mercator_y(center_y - wanted / 2.0);
            Self::new(
                self.latitude,
                self.longitude,
                (top - bottom).min(MAX_LATITUDE_DELTA),
                self.longitude_delta,
            )
        }
    }
}

fn mercator_span(latitude: f64, latitude_delta: f64) -> f64 {
    let span = mercator_y(latitude + latitude_delta / 2.0) - mercator_y(latitude - latitude_delta / 2.0);
    span.max(f64::EPSILON)
}

/// Maps coordinates to cells of a fixed-size canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    center_x: f64,
    center_y: f64,
    x_span: f64,
    y_span: f64,
    rows: usize,
    cols: usize,
}

impl Projection {
    /// Creates a projection showing `region` on a `rows` x `cols` canvas.
    ///
    /// The region is used as given; call [`Region::fit`] first to avoid
    /// stretching.
    #[must_use]
    pub fn new(region: &Region, rows: usize, cols: usize) -> Self {
        Self {
            center_x: region.longitude,
            center_y: mercator_y(region.latitude),
            x_span: region.longitude_delta.max(f64::EPSILON),
            y_span: mercator_span(region.latitude, region.latitude_delta),
            rows,
            cols,
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

    /// Returns the `(row, col)` cell containing a point, or `None` when the
    /// point is off screen.
    ///
    /// Longitudes are compared the short way round, so a point just east of
    /// the antimeridian shows up on a map centered just west of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use zelmap::domain::Region;
    /// use zelmap::map::Projection;
    ///
    /// let region = Region::new(0.0, 0.0, 10.0, 20.0);
    /// let projection = Projection::new(&region, 11, 21);
    /// assert_eq!(projection.project(0.0, 0.0), Some((5, 10)));
    /// assert_eq!(projection.project(40.0, 0.0), None);
    /// ```
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn project(&self, latitude: f64, longitude: f64) -> Option<(usize, usize)> {
        let dx = wrap_longitude(longitude - self.center_x);
        let dy = mercator_y(latitude) - self.center_y;

        let col = (dx / self.x_span + 0.5) * self.cols as f64;
        let row = (0.5 - dy / self.y_span) * self.rows as f64;

        if col < 0.0 || row < 0.0 || col >= self.cols as f64 || row >= self.rows as f64 {
            return None;
        }
        Some((row.floor() as usize, col.floor() as usize))
    }

    /// Latitude and longitude at the center of a cell.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn unproject(&self, row: usize, col: usize) -> (f64, f64) {
        let x = ((col as f64 + 0.5) / self.cols.max(1) as f64 - 0.5) * self.x_span;
        let y = (0.5 - (row as f64 + 0.5) / self.rows.max(1) as f64) * self.y_span;
        (
            inverse_mercator_y(self.center_y + y),
            wrap_longitude(self.center_x + x),
        )
    }

    /// Longitude range `(west, east)` covered by one column, unwrapped
    /// relative to the center.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn column_bounds(&self, col: usize) -> (f64, f64) {
        let width = self.x_span / self.cols.max(1) as f64;
        let west = self.center_x - self.x_span / 2.0 + col as f64 * width;
        (west, west + width)
    }

    /// Latitude range `(south, north)` covered by one row.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn row_bounds(&self, row: usize) -> (f64, f64) {
        let height = self.y_span / self.rows.max(1) as f64;
        let north = self.center_y + self.y_span / 2.0 - row as f64 * height;
        (inverse_mercator_y(north - height), inverse_mercator_y(north))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mercator_round_trips() {
        for lat in [-80.0, -23.55, 0.0, 12.5, 60.0, 84.9] {
            assert!((inverse_mercator_y(mercator_y(lat)) - lat).abs() < 1e-9, "lat {lat}");
        }
    }

    #[test]
    fn mercator_is_identity_near_equator() {
        assert!(mercator_y(0.0).abs() < 1e-12);
        assert!((mercator_y(0.01) - 0.01).abs() < 1e-6);
    }

    #[test]
    fn fit_widens_longitude_on_wide_canvas() {
        let fitted = Region::new(0.0, 10.0, 2.0, 1.0).fit(10, 80);
        // 80 / (10 * 2) = 4 units of x per unit of y
        assert!((fitted.longitude_delta - 8.0).abs() < 1e-3);
        assert!((fitted.latitude_delta - 2.0).abs() < 1e-9);
        assert!((fitted.longitude - 10.0).abs() < 1e-12);
    }

    #[test]
    fn fit_grows_latitude_on_tall_canvas() {
        let fitted = Region::new(0.0, 0.0, 1.0, 4.0).fit(40, 40);
        // 40 / (40 * 2) = 0.5, so y span must be 8
        assert!((fitted.latitude_delta - 8.0).abs() < 0.05);
        assert!((fitted.longitude_delta - 4.0).abs() < 1e-12);
    }

    #[test]
    fn fit_on_empty_canvas_is_identity() {
        let region = Region::default();
        assert_eq!(region.fit(0, 80), region);
    }

    #[test]
    fn project_places_center_in_middle_cell() {
        let region = Region::default().fit(21, 41);
        let projection = Projection::new(&region, 21, 41);
        assert_eq!(projection.project(region.latitude, region.longitude), Some((10, 20)));
    }

    #[test]
    fn project_north_is_up_and_east_is_right() {
        let region = Region::new(0.0, 0.0, 10.0, 20.0);
        let projection = Projection::new(&region, 20, 40);
        let (row_n, _) = projection.project(4.0, 0.0).unwrap();
        let (row_s, _) = projection.project(-4.0, 0.0).unwrap();
        let (_, col_e) = projection.project(0.0, 9.0).unwrap();
        let (_, col_w) = projection.project(0.0, -9.0).unwrap();
        assert!(row_n < row_s);
        assert!(col_w < col_e);
    }

    #[test]
    fn project_wraps_across_antimeridian() {
        let region = Region::new(0.0, 179.0, 10.0, 10.0);
        let projection = Projection::new(&region, 10, 10);
        let (_, col) = projection.project(0.0, -179.0).expect("visible east of the antimeridian");
        assert!(col > 5);
    }

    #[test]
    fn unproject_inverts_project_to_cell_precision() {
        let region = Region::new(-23.5, -46.6, 0.2, 0.4);
        let projection = Projection::new(&region, 20, 40);
        let (lat, lng) = projection.unproject(3, 30);
        assert_eq!(projection.project(lat, lng), Some((3, 30)));
    }
}
