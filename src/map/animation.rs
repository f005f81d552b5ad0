//! Timed viewport transitions.
//!
//! An animation is advanced by the elapsed time of each timer tick. It owns
//! no clock, which keeps it deterministic under test.

use crate::domain::region::wrap_longitude;
use crate::domain::Region;

/// Duration of the transition to a search result, in seconds.
pub const SEARCH_ANIMATION_SECS: f64 = 1.0;

/// Delay between animation frames, in seconds.
pub const FRAME_INTERVAL_SECS: f64 = 0.05;

/// Cubic ease-in-out over `t` in `[0, 1]`.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// A transition from one region to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportAnimation {
    from: Region,
    to: Region,
    elapsed: f64,
    duration: f64,
}

impl ViewportAnimation {
    #[must_use]
    pub fn new(from: Region, to: Region, duration: f64) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration.max(0.0),
        }
    }

    /// Moves the animation forward by `dt` seconds and returns the region
    /// to show now.
    ///
    /// Once finished, the returned region is exactly the target.
    ///
    /// # Examples
    ///
    /// ```
    /// use zelmap::domain::Region;
    /// use zelmap::map::ViewportAnimation;
    ///
    /// let from = Region::new(0.0, 0.0, 1.0, 1.0);
    /// let to = Region::new(10.0, 10.0, 0.05, 0.05);
    /// let mut animation = ViewportAnimation::new(from, to, 1.0);
    ///
    /// let midway = animation.advance(0.5);
    /// assert!((midway.latitude - 5.0).abs() < 1e-9);
    /// assert_eq!(animation.advance(0.5), to);
    /// assert!(animation.is_finished());
    /// ```
    pub fn advance(&mut self, dt: f64) -> Region {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.current()
    }

    /// The region at the current point of the transition.
    #[must_use]
    pub fn current(&self) -> Region {
        if self.is_finished() {
            return self.to;
        }
        let t = ease_in_out_cubic(self.elapsed / self.duration);
        let from = self.from;
        let to = self.to;

        Region::new(
            from.latitude + (to.latitude - from.latitude) * t,
            from.longitude + wrap_longitude(to.longitude - from.longitude) * t,
            geometric(from.latitude_delta, to.latitude_delta, t),
            geometric(from.longitude_delta, to.longitude_delta, t),
        )
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub const fn target(&self) -> Region {
        self.to
    }
}

/// Interpolates spans on a log scale so zooming feels uniform.
fn geometric(from: f64, to: f64, t: f64) -> f64 {
    from * (to / from).powf(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert!(ease_in_out_cubic(0.0).abs() < f64::EPSILON);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < f64::EPSILON);
        assert!((ease_in_out_cubic(1.0) - 1.0).abs() < f64::EPSILON);
        assert!(ease_in_out_cubic(0.25) < 0.25);
        assert!(ease_in_out_cubic(0.75) > 0.75);
    }

    #[test]
    fn finishes_exactly_on_target_after_frame_ticks() {
        let from = Region::default();
        let to = Region::around(-22.9068, -43.1729);
        let mut animation = ViewportAnimation::new(from, to, SEARCH_ANIMATION_SECS);

        let mut frames = 0;
        let mut region = from;
        while !animation.is_finished() {
            region = animation.advance(FRAME_INTERVAL_SECS);
            frames += 1;
            assert!(frames <= 25, "animation never finished");
        }
        assert_eq!(region, to);
        assert!(frames >= 20);
    }

    #[test]
    fn longitude_takes_short_way_round() {
        let from = Region::new(0.0, 170.0, 1.0, 1.0);
        let to = Region::new(0.0, -170.0, 1.0, 1.0);
        let mut animation = ViewportAnimation::new(from, to, 1.0);
        let midway = animation.advance(0.5);
        assert!((midway.longitude - -180.0).abs() < 1e-9);
    }

    #[test]
    fn spans_interpolate_geometrically() {
        let from = Region::new(0.0, 0.0, 1.0, 1.0);
        let to = Region::new(0.0, 0.0, 0.01, 0.01);
        let mut animation = ViewportAnimation::new(from, to, 1.0);
        let midway = animation.advance(0.5);
        assert!((midway.latitude_delta - 0.1).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_is_already_finished() {
        let to = Region::around(1.0, 2.0);
        let animation = ViewportAnimation::new(Region::default(), to, 0.0);
        assert!(animation.is_finished());
        assert_eq!(animation.current(), to);
    }
}
