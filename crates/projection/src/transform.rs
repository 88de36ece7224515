//! The point transform contract consumed by the grid sampler.

use proj_common::{CrsDefinition, ProjVisResult};

use crate::proj4::{resolve, Proj4Transform};

/// Maps a point from one CRS to another.
///
/// Axis order is x = longitude/easting, y = latitude/northing on both sides.
/// Geographic coordinates are in degrees.
///
/// `apply` never fails. A point outside the projection's valid domain comes
/// back with one or both components set to positive or negative infinity.
pub trait CoordinateTransform {
    fn apply(&self, x: f64, y: f64) -> (f64, f64);
}

impl<T: CoordinateTransform + ?Sized> CoordinateTransform for &T {
    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (**self).apply(x, y)
    }
}

impl<T: CoordinateTransform + ?Sized> CoordinateTransform for Box<T> {
    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (**self).apply(x, y)
    }
}

/// Returns every point unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl CoordinateTransform for IdentityTransform {
    #[inline]
    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }
}

/// A transform built from a pair of request CRS definitions.
#[derive(Debug)]
pub enum CrsTransform {
    /// Source and destination resolve to the same definition.
    Identity(IdentityTransform),
    Proj4(Box<Proj4Transform>),
}

impl CoordinateTransform for CrsTransform {
    #[inline]
    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        match self {
            CrsTransform::Identity(t) => t.apply(x, y),
            CrsTransform::Proj4(t) => t.apply(x, y),
        }
    }
}

impl CrsTransform {
    pub fn is_identity(&self) -> bool {
        matches!(self, CrsTransform::Identity(_))
    }
}

/// Build the transform between two CRS definition strings.
///
/// Both definitions are resolved even when they are equal, so an unknown
/// CRS is rejected regardless of the shortcut taken.
pub fn build_transform(from: &str, to: &str) -> ProjVisResult<CrsTransform> {
    let from_def = CrsDefinition::from_user_string(from)?;
    let to_def = CrsDefinition::from_user_string(to)?;

    let source = resolve(&from_def)?;
    let target = resolve(&to_def)?;

    if from_def == to_def {
        tracing::trace!(crs = %from_def, "Source and destination CRS match, using identity");
        return Ok(CrsTransform::Identity(IdentityTransform));
    }

    Ok(CrsTransform::Proj4(Box::new(Proj4Transform::from_resolved(
        source, target,
    ))))
}
