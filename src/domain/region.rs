//! Viewport region model.
//!
//! A region is the visible map area: a center plus latitude/longitude spans
//! ("deltas") in degrees. All mutating helpers keep the region inside the
//! bounds the map projection can draw.

use serde::{Deserialize, Serialize};

/// Highest latitude the Web Mercator projection can show.
pub const MAX_LATITUDE: f64 = 85.0;

/// Smallest span in either axis, roughly 50 meters.
pub const MIN_DELTA: f64 = 0.0005;

/// Largest latitude span.
pub const MAX_LATITUDE_DELTA: f64 = 170.0;

/// Largest longitude span.
pub const MAX_LONGITUDE_DELTA: f64 = 360.0;

/// Span used when centering the map on a search result.
pub const SEARCH_RESULT_DELTA: f64 = 0.05;

/// Fraction of the visible span moved by one pan step.
const PAN_FRACTION: f64 = 0.25;

/// Direction of a pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// The visible map area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    /// Creates a region, normalizing the center and clamping the spans.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude,
            longitude,
            latitude_delta,
            longitude_delta,
        }
        .normalized()
    }

    /// A region centered on a point with the search-result span.
    #[must_use]
    pub fn around(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, SEARCH_RESULT_DELTA, SEARCH_RESULT_DELTA)
    }

    /// Returns the region moved by a quarter of its span.
    ///
    /// # Examples
    ///
    /// ```
    /// use zelmap::domain::{Direction, Region};
    ///
    /// let region = Region::new(0.0, 0.0, 4.0, 8.0).panned(Direction::East);
    /// assert_eq!(region.longitude, 2.0);
    /// ```
    #[must_use]
    pub fn panned(self, direction: Direction) -> Self {
        let (dlat, dlng) = match direction {
            Direction::North => (self.latitude_delta * PAN_FRACTION, 0.0),
            Direction::South => (-self.latitude_delta * PAN_FRACTION, 0.0),
            Direction::East => (0.0, self.longitude_delta * PAN_FRACTION),
            Direction::West => (0.0, -self.longitude_delta * PAN_FRACTION),
        };
        Self {
            latitude: self.latitude + dlat,
            longitude: self.longitude + dlng,
            ..self
        }
        .normalized()
    }

    /// Returns the region with both spans multiplied by `factor`.
    ///
    /// A factor below one zooms in, above one zooms out.
    #[must_use]
    pub fn zoomed(self, factor: f64) -> Self {
        Self {
            latitude_delta: self.latitude_delta * factor,
            longitude_delta: self.longitude_delta * factor,
            ..self
        }
        .normalized()
    }

    /// Returns the same spans centered on another point.
    #[must_use]
    pub fn centered_on(self, latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..self
        }
        .normalized()
    }

    fn normalized(self) -> Self {
        Self {
            latitude: self.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE),
            longitude: wrap_longitude(self.longitude),
            latitude_delta: self.latitude_delta.clamp(MIN_DELTA, MAX_LATITUDE_DELTA),
            longitude_delta: self.longitude_delta.clamp(MIN_DELTA, MAX_LONGITUDE_DELTA),
        }
    }
}

impl Default for Region {
    /// The region shown on startup, centered on São Paulo.
    fn default() -> Self {
        Self::new(-23.55052, -46.633308, 0.0922, 0.0421)
    }
}

/// Wraps a longitude into `[-180, 180)`.
#[must_use]
pub fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_north_moves_by_a_quarter_span() {
        let region = Region::new(10.0, 20.0, 2.0, 4.0).panned(Direction::North);
        assert!((region.latitude - 10.5).abs() < 1e-9);
        assert!((region.longitude - 20.0).abs() < 1e-9);
    }

    #[test]
    fn pan_clamps_latitude() {
        let mut region = Region::new(84.0, 0.0, 20.0, 20.0);
        for _ in 0..10 {
            region = region.panned(Direction::North);
        }
        assert!((region.latitude - MAX_LATITUDE).abs() < 1e-9);
    }

    #[test]
    fn pan_wraps_across_antimeridian() {
        let region = Region::new(0.0, 179.0, 8.0, 8.0).panned(Direction::East);
        assert!((region.longitude - -179.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_clamps_spans() {
        let tiny = Region::new(0.0, 0.0, 0.001, 0.001).zoomed(0.01);
        assert!((tiny.latitude_delta - MIN_DELTA).abs() < 1e-12);

        let huge = Region::new(0.0, 0.0, 100.0, 300.0).zoomed(4.0);
        assert!((huge.latitude_delta - MAX_LATITUDE_DELTA).abs() < 1e-9);
        assert!((huge.longitude_delta - MAX_LONGITUDE_DELTA).abs() < 1e-9);
    }

    #[test]
    fn wrap_longitude_is_half_open() {
        assert!((wrap_longitude(180.0) - -180.0).abs() < 1e-9);
        assert!((wrap_longitude(-180.0) - -180.0).abs() < 1e-9);
        assert!((wrap_longitude(540.0) - -180.0).abs() < 1e-9);
        assert!((wrap_longitude(-46.6) - -46.6).abs() < 1e-9);
    }

    #[test]
    fn around_uses_search_result_span() {
        let region = Region::around(-23.55, -46.63);
        assert!((region.latitude_delta - SEARCH_RESULT_DELTA).abs() < 1e-12);
        assert!((region.longitude_delta - SEARCH_RESULT_DELTA).abs() < 1e-12);
    }
}
