//! Offset/limit sampling of a grid through a coordinate transform.

use std::ops::Range;

use proj_common::{GridSpec, PageRequest};
use projection::CoordinateTransform;

use crate::TransformedPoint;

/// Upper bound on the points reserved up front for one page.
///
/// `limit` comes straight from the request, so larger pages grow the vector
/// as points are produced instead of reserving `limit` slots at once.
pub const MAX_PREALLOCATED_POINTS: usize = 64 * 1024;

/// Iterates the transformed points of one page of a grid.
///
/// Each `next` call transforms exactly one point, so a consumer can stop
/// between any two points without leaving work half done.
#[derive(Debug)]
pub struct GridSampler<'a, T: ?Sized> {
    grid: GridSpec,
    transform: &'a T,
    x_count: u64,
    positions: Range<u64>,
}

impl<'a, T: CoordinateTransform + ?Sized> GridSampler<'a, T> {
    pub fn new(grid: &GridSpec, transform: &'a T, page: PageRequest) -> Self {
        Self {
            grid: *grid,
            transform,
            x_count: grid.x_count(),
            positions: page.window(grid.total()),
        }
    }

    /// Linear index of the next point to be produced.
    pub fn position(&self) -> u64 {
        self.positions.start
    }

    /// Number of points still to be produced.
    pub fn remaining(&self) -> u64 {
        self.positions.end - self.positions.start
    }
}

impl<T: CoordinateTransform + ?Sized> Iterator for GridSampler<'_, T> {
    type Item = TransformedPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.positions.next()?;
        let (x, y) = self.grid.point_at_unchecked(pos, self.x_count);
        Some(TransformedPoint::classify(self.transform.apply(x, y)))
    }

    // The lower bound stays 0: `collect` reserves the lower bound, and the
    // window length is client controlled.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.remaining()).ok())
    }
}

/// Sample the window `[offset, offset + limit)` of `grid`.
///
/// `offset` is clamped up to 0 and `limit` up to 1. Returns fewer than
/// `limit` points only when the grid runs out, and an empty vector without
/// calling the transform when `offset >= total`.
pub fn generate<T: CoordinateTransform + ?Sized>(
    grid: &GridSpec,
    transform: &T,
    offset: i64,
    limit: i64,
) -> Vec<TransformedPoint> {
    generate_page(grid, transform, PageRequest::new(offset, limit))
}

/// Sample one page of `grid`.
pub fn generate_page<T: CoordinateTransform + ?Sized>(
    grid: &GridSpec,
    transform: &T,
    page: PageRequest,
) -> Vec<TransformedPoint> {
    let sampler = GridSampler::new(grid, transform, page);
    let capacity = usize::try_from(sampler.remaining())
        .unwrap_or(usize::MAX)
        .min(MAX_PREALLOCATED_POINTS);

    let mut points = Vec::with_capacity(capacity);
    points.extend(sampler);
    points
}
