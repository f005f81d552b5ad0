//! Latitude/longitude grid line selection.

/// Candidate grid spacings in degrees, smallest first.
const STEP_LADDER: [f64; 19] = [
    0.0001, 0.0002, 0.0005, 0.001, 0.002, 0.005, 0.01, 0.02, 0.05, 0.1, 0.2, 0.5, 1.0, 2.0, 5.0,
    10.0, 15.0, 30.0, 45.0,
];

/// Most grid lines drawn across one axis.
pub const MAX_LINES: f64 = 8.0;

/// Picks the smallest ladder step that draws at most [`MAX_LINES`] lines
/// across `span` degrees.
///
/// Adjacent ladder steps differ by at most 2.5x, so a span at or above the
/// smallest step gets four to eight lines in the usual case and never fewer
/// than three.
///
/// # Examples
///
/// ```
/// use zelmap::map::nice_step;
///
/// assert_eq!(nice_step(0.05), 0.01);
/// assert_eq!(nice_step(360.0), 45.0);
/// ```
#[must_use]
pub fn nice_step(span: f64) -> f64 {
    STEP_LADDER
        .iter()
        .copied()
        .find(|step| span / step <= MAX_LINES)
        .unwrap_or(STEP_LADDER[STEP_LADDER.len() - 1])
}

/// Whether a grid line at a multiple of `step` falls inside `[low, high)`.
#[must_use]
pub fn crosses_line(low: f64, high: f64, step: f64) -> bool {
    (low / step).ceil() * step < high
}

/// Whether the cell range `[low, high)` contains zero (equator or prime
/// meridian).
#[must_use]
pub fn crosses_zero(low: f64, high: f64) -> bool {
    low <= 0.0 && 0.0 < high
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_keep_line_count_between_four_and_eight() {
        for span in [0.0009, 0.003, 0.0421, 0.0922, 0.7, 3.3, 17.0, 90.0, 170.0] {
            let step = nice_step(span);
            let lines = span / step;
            assert!((3.2..=MAX_LINES).contains(&lines), "span {span} step {step} lines {lines}");
        }
    }

    #[test]
    fn huge_spans_use_largest_step() {
        assert_eq!(nice_step(1000.0), 45.0);
    }

    #[test]
    fn crosses_line_detects_multiples() {
        assert!(crosses_line(-0.5, 0.5, 1.0));
        assert!(crosses_line(9.8, 10.1, 5.0));
        assert!(!crosses_line(10.1, 14.9, 5.0));
        assert!(!crosses_line(-23.58, -23.56, 0.05));
        assert!(crosses_line(-23.56, -23.54, 0.05));
    }
}
