//! Paginated grid sampling.
//!
//! Turns a rectangle, a step size and an offset/limit window into a
//! deterministic, resumable sequence of transformed sample points.
//!
//! # Architecture
//!
//! ```text
//! GridSpec + PageRequest
//!      │
//!      ▼
//! PageRequest::window(total)      [offset, min(offset + limit, total))
//!      │
//!      ▼
//! GridSampler (iterator over pos)
//!      │
//!      ├─► GridSpec::point_at(pos)      row-major, x fastest
//!      │
//!      ├─► CoordinateTransform::apply(x, y)
//!      │
//!      └─► TransformedPoint::classify   non-finite -> Singular
//! ```
//!
//! Pages concatenate: sampling `[0, k)` then `[k, total)` yields exactly
//! the points of sampling `[0, total)`.
//!
//! # Example
//!
//! ```
//! use grid_sampler::{generate, TransformedPoint};
//! use proj_common::GridSpec;
//! use projection::IdentityTransform;
//!
//! let grid = GridSpec::new(0.0, 0.0, 2.0, 2.0, 1.0).unwrap();
//! let page = generate(&grid, &IdentityTransform, 3, 2);
//! assert_eq!(
//!     page,
//!     vec![
//!         TransformedPoint::Valid { x: 0.0, y: 1.0 },
//!         TransformedPoint::Valid { x: 1.0, y: 1.0 },
//!     ]
//! );
//! ```

pub mod point;
pub mod sampler;

pub use point::TransformedPoint;
pub use sampler::{generate, generate_page, GridSampler};
