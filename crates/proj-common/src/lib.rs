//! Common types shared by the proj-vis crates and service.

pub mod crs;
pub mod error;
pub mod grid;
pub mod page;

pub use crs::{CrsDefinition, DEFAULT_CRS};
pub use error::{ProjVisError, ProjVisResult};
pub use grid::GridSpec;
pub use page::PageRequest;
