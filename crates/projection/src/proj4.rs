//! proj4rs-backed transforms between arbitrary CRS definitions.

use std::fmt;

use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use proj_common::{CrsDefinition, ProjVisError, ProjVisResult};

use crate::transform::CoordinateTransform;

/// A CRS definition resolved into a proj4rs projection.
pub(crate) struct ResolvedCrs {
    definition: CrsDefinition,
    proj: Proj,
    /// proj4rs works in radians for lon/lat systems; requests use degrees.
    geographic: bool,
}

/// Get the proj4 string for an EPSG code from the crs-definitions database.
pub fn epsg_proj_string(code: u16) -> Option<&'static str> {
    crs_definitions::from_code(code).map(|def| def.proj4)
}

/// Check whether a proj4 string describes a geographic (lon/lat) system.
pub fn is_geographic_proj_string(proj_string: &str) -> bool {
    proj_string
        .split_whitespace()
        .any(|token| token == "+proj=longlat" || token == "+proj=latlong")
}

pub(crate) fn resolve(definition: &CrsDefinition) -> ProjVisResult<ResolvedCrs> {
    let proj_string = match definition {
        CrsDefinition::Epsg(code) => epsg_proj_string(*code).ok_or_else(|| {
            ProjVisError::unsupported_projection(
                definition.to_string(),
                format!("EPSG:{} is not in the crs-definitions database", code),
            )
        })?,
        CrsDefinition::Proj4(def) => def.as_str(),
    };

    let proj = Proj::from_proj_string(proj_string).map_err(|e| {
        ProjVisError::unsupported_projection(definition.to_string(), format!("{:?}", e))
    })?;

    Ok(ResolvedCrs {
        definition: definition.clone(),
        proj,
        geographic: is_geographic_proj_string(proj_string),
    })
}

/// Transforms points between two resolved projections.
pub struct Proj4Transform {
    source: ResolvedCrs,
    target: ResolvedCrs,
}

impl Proj4Transform {
    /// Resolve both definitions and build the transform between them.
    pub fn new(from: &CrsDefinition, to: &CrsDefinition) -> ProjVisResult<Self> {
        Ok(Self::from_resolved(resolve(from)?, resolve(to)?))
    }

    pub(crate) fn from_resolved(source: ResolvedCrs, target: ResolvedCrs) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &CrsDefinition {
        &self.source.definition
    }

    pub fn target(&self) -> &CrsDefinition {
        &self.target.definition
    }
}

impl fmt::Debug for Proj4Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proj4Transform")
            .field("source", &self.source.definition)
            .field("target", &self.target.definition)
            .finish()
    }
}

impl CoordinateTransform for Proj4Transform {
    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let mut point = if self.source.geographic {
            (x.to_radians(), y.to_radians(), 0.0)
        } else {
            (x, y, 0.0)
        };

        if let Err(e) = transform(&self.source.proj, &self.target.proj, &mut point) {
            tracing::trace!(x, y, error = ?e, "Point outside projection domain");
            return (f64::INFINITY, f64::INFINITY);
        }

        if self.target.geographic {
            (point.0.to_degrees(), point.1.to_degrees())
        } else {
            (point.0, point.1)
        }
    }
}
