//! Rectangular sample grids and their linear index space.

use crate::error::{ProjVisError, ProjVisResult};
use serde::{Deserialize, Serialize};

/// Rounding slack, in ULPs, allowed when deciding whether a grid line lands
/// on the maximum.
///
/// `0.3 / 0.1` evaluates to `2.9999999999999996` while `0.0 + 3.0 * 0.1` is
/// `0.30000000000000004`; both are one rounding away from the line at 0.3.
const EDGE_ULPS: f64 = 4.0;

/// Beyond this many steps an f64 cannot tell neighbouring grid lines apart.
const MAX_EXACT_STEPS: f64 = 9_007_199_254_740_992.0;

/// An axis-aligned grid of sample points spaced `step` apart.
///
/// The grid starts at `(min_x, min_y)` and includes every grid line that
/// is `<= max_x` / `<= max_y`. Points are addressed by a linear index in
/// row-major order, x varying fastest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSpec {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub step: f64,
}

impl GridSpec {
    /// Create a grid, rejecting non-finite bounds and a step that is not `> 0`.
    ///
    /// Inverted bounds are accepted and produce an empty grid.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64, step: f64) -> ProjVisResult<Self> {
        for (param, value) in [
            ("minX", min_x),
            ("minY", min_y),
            ("maxX", max_x),
            ("maxY", max_y),
        ] {
            if !value.is_finite() {
                return Err(ProjVisError::invalid_parameter(
                    param,
                    format!("must be a finite number, got {}", value),
                ));
            }
        }

        if !step.is_finite() || step <= 0.0 {
            return Err(ProjVisError::invalid_parameter(
                "step",
                format!("must be a finite number greater than 0, got {}", step),
            ));
        }

        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
            step,
        })
    }

    /// A 1x1 grid holding only `(x, y)`.
    pub fn single_point(x: f64, y: f64) -> ProjVisResult<Self> {
        Self::new(x, y, x, y, 1.0)
    }

    /// Number of columns.
    pub fn x_count(&self) -> u64 {
        axis_count(self.min_x, self.max_x, self.step)
    }

    /// Number of rows.
    pub fn y_count(&self) -> u64 {
        axis_count(self.min_y, self.max_y, self.step)
    }

    /// Total number of points in the grid, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.x_count().saturating_mul(self.y_count())
    }

    /// Check if grid is empty.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Raw coordinates of the point at linear index `pos`.
    ///
    /// Returns `None` when `pos` is outside `[0, total)`.
    pub fn point_at(&self, pos: u64) -> Option<(f64, f64)> {
        let x_count = self.x_count();
        if pos >= x_count.saturating_mul(self.y_count()) {
            return None;
        }
        Some(self.point_at_unchecked(pos, x_count))
    }

    /// Coordinates of `pos` given a precomputed column count.
    ///
    /// Callers guarantee `pos < total` and `x_count == self.x_count()`.
    pub fn point_at_unchecked(&self, pos: u64, x_count: u64) -> (f64, f64) {
        let column = pos % x_count;
        let row = pos / x_count;
        (
            self.min_x + column as f64 * self.step,
            self.min_y + row as f64 * self.step,
        )
    }
}

fn axis_count(min: f64, max: f64, step: f64) -> u64 {
    let range = max - min;
    if step.is_nan() || step <= 0.0 || range.is_nan() || range < 0.0 {
        return 0;
    }
    let quotient = (range / step).floor();
    if quotient >= MAX_EXACT_STEPS {
        // Float-to-int `as` saturates, so huge ranges clamp to u64::MAX.
        return (quotient as u64).saturating_add(1);
    }

    // The last line is the one `point_at` computes, `min + steps * step`,
    // and it must not pass `max` by more than rounding error.
    let mut steps = quotient as u64;
    if line_within(min, max, step, steps + 1) {
        steps += 1;
    }
    while steps > 0 && !line_within(min, max, step, steps) {
        steps -= 1;
    }
    steps + 1
}

fn line_within(min: f64, max: f64, step: f64, steps: u64) -> bool {
    let offset = steps as f64 * step;
    let line = min + offset;
    let scale = min.abs().max(max.abs()).max(offset.abs());
    line <= max || line - max <= EDGE_ULPS * f64::EPSILON * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_counts() {
        let grid = GridSpec::new(0.0, 0.0, 2.0, 2.0, 1.0).unwrap();
        assert_eq!(grid.x_count(), 3);
        assert_eq!(grid.y_count(), 3);
        assert_eq!(grid.total(), 9);
    }

    #[test]
    fn test_counts_partial_step() {
        // 2.5 / 1.0 floors to 2, so the last column sits at x = 2
        let grid = GridSpec::new(0.0, 0.0, 2.5, 0.0, 1.0).unwrap();
        assert_eq!(grid.x_count(), 3);
        assert_eq!(grid.y_count(), 1);
    }

    #[test]
    fn test_counts_absorb_float_drift() {
        let grid = GridSpec::new(0.0, 0.0, 0.3, 0.3, 0.1).unwrap();
        assert_eq!(grid.x_count(), 4);
        assert_eq!(grid.y_count(), 4);
    }

    #[test]
    fn test_counts_exclude_line_just_past_max() {
        let grid = GridSpec::new(0.0, 0.0, 2.9999999995, 0.0, 1.0).unwrap();
        assert_eq!(grid.x_count(), 3);
        assert_eq!(grid.point_at(2), Some((2.0, 0.0)));

        let grid = GridSpec::new(0.0, 0.0, 1.0 - 1e-12, 0.0, 0.5).unwrap();
        assert_eq!(grid.x_count(), 2);
    }

    #[test]
    fn test_counts_negative_min_drift() {
        // -0.3 + 3 * 0.1 lands a hair above 0.0
        let grid = GridSpec::new(-0.3, -0.3, 0.0, 0.0, 0.1).unwrap();
        assert_eq!(grid.x_count(), 4);
        assert_eq!(grid.y_count(), 4);
    }

    #[test]
    fn test_inverted_bounds_are_empty() {
        let grid = GridSpec::new(5.0, 0.0, 0.0, 10.0, 1.0).unwrap();
        assert_eq!(grid.x_count(), 0);
        assert_eq!(grid.total(), 0);
        assert!(grid.is_empty());
        assert_eq!(grid.point_at(0), None);
    }

    #[test]
    fn test_point_at_row_major() {
        let grid = GridSpec::new(0.0, 0.0, 2.0, 2.0, 1.0).unwrap();
        assert_eq!(grid.point_at(0), Some((0.0, 0.0)));
        assert_eq!(grid.point_at(2), Some((2.0, 0.0)));
        assert_eq!(grid.point_at(3), Some((0.0, 1.0)));
        assert_eq!(grid.point_at(8), Some((2.0, 2.0)));
        assert_eq!(grid.point_at(9), None);
    }

    #[test]
    fn test_single_point() {
        let grid = GridSpec::single_point(5.0, 10.0).unwrap();
        assert_eq!(grid.total(), 1);
        assert_eq!(grid.point_at(0), Some((5.0, 10.0)));
    }

    #[test]
    fn test_rejects_bad_step() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = GridSpec::new(0.0, 0.0, 1.0, 1.0, step).unwrap_err();
            assert!(
                matches!(err, ProjVisError::InvalidParameter { ref param, .. } if param == "step"),
                "step {} should be rejected",
                step
            );
        }
    }

    #[test]
    fn test_rejects_non_finite_bounds() {
        let err = GridSpec::new(0.0, f64::NAN, 1.0, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, ProjVisError::InvalidParameter { ref param, .. } if param == "minY"));
    }

    #[test]
    fn test_huge_grid_saturates() {
        let grid = GridSpec::new(-1e300, -1e300, 1e300, 1e300, 1e-300).unwrap();
        assert_eq!(grid.x_count(), u64::MAX);
        assert_eq!(grid.total(), u64::MAX);
    }
}
