//! Coordinate reference system transformations.
//!
//! Projection math is delegated to `proj4rs`; EPSG codes are resolved
//! through the `crs-definitions` database.

pub mod proj4;
pub mod transform;

pub use proj4::Proj4Transform;
pub use transform::{build_transform, CoordinateTransform, CrsTransform, IdentityTransform};
