//! Common test fixtures for proj-vis tests.

use proj_common::GridSpec;

/// Common bounding boxes as `(min_x, min_y, max_x, max_y)`.
pub mod bbox {
    /// Global bounding box (-180 to 180, -90 to 90)
    pub const GLOBAL: (f64, f64, f64, f64) = (-180.0, -90.0, 180.0, 90.0);

    /// Europe bounding box
    pub const EUROPE: (f64, f64, f64, f64) = (-15.0, 35.0, 45.0, 72.0);

    /// Single point (degenerate bbox)
    pub const POINT: (f64, f64, f64, f64) = (0.0, 0.0, 0.0, 0.0);

    /// Invalid bbox (min > max)
    pub const INVALID: (f64, f64, f64, f64) = (10.0, 10.0, 5.0, 5.0);
}

/// The 3x3 grid `[0, 2] x [0, 2]` with step 1.
pub fn canonical_grid() -> GridSpec {
    GridSpec {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 2.0,
        max_y: 2.0,
        step: 1.0,
    }
}

/// The nine points of [`canonical_grid`] in row-major order.
pub fn canonical_points() -> Vec<(f64, f64)> {
    vec![
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (0.0, 1.0),
        (1.0, 1.0),
        (2.0, 1.0),
        (0.0, 2.0),
        (1.0, 2.0),
        (2.0, 2.0),
    ]
}

/// Build a grid from a `(min_x, min_y, max_x, max_y)` fixture.
pub fn grid_from_bbox(bbox: (f64, f64, f64, f64), step: f64) -> GridSpec {
    GridSpec {
        min_x: bbox.0,
        min_y: bbox.1,
        max_x: bbox.2,
        max_y: bbox.3,
        step,
    }
}
