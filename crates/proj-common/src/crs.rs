//! Coordinate Reference System definitions accepted on requests.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ProjVisError, ProjVisResult};

/// Definition used when a request names no CRS: WGS84 longitude/latitude.
pub const DEFAULT_CRS: &str = "EPSG:4326";

const EPSG_PREFIX: &str = "EPSG:";
const OGC_URN_PREFIX: &str = "URN:OGC:DEF:CRS:EPSG::";

/// A CRS definition as written by a client, syntactically validated.
///
/// Whether the definition names a projection that actually exists is only
/// known once the transform is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrsDefinition {
    /// An EPSG registry code.
    Epsg(u16),
    /// A proj4 parameter string, whitespace-normalized.
    Proj4(String),
}

impl CrsDefinition {
    /// Parse a CRS definition string from a request.
    ///
    /// Accepts formats like:
    /// - "EPSG:4326" / "epsg:3857"
    /// - "urn:ogc:def:crs:EPSG::32632"
    /// - "CRS:84" (equivalent to EPSG:4326 with lon/lat axis order)
    /// - "+proj=utm +zone=32"
    pub fn from_user_string(s: &str) -> ProjVisResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ProjVisError::unsupported_projection(
                s,
                "empty projection definition",
            ));
        }

        if trimmed.starts_with('+') {
            let normalized = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
            return Ok(CrsDefinition::Proj4(normalized));
        }

        let upper = trimmed.to_uppercase();
        if upper == "CRS:84" {
            return Ok(CrsDefinition::Epsg(4326));
        }

        let code = upper
            .strip_prefix(OGC_URN_PREFIX)
            .or_else(|| upper.strip_prefix(EPSG_PREFIX));

        match code {
            Some(code) => code
                .trim()
                .parse::<u16>()
                .map(CrsDefinition::Epsg)
                .map_err(|_| {
                    ProjVisError::unsupported_projection(trimmed, "invalid EPSG code")
                }),
            None => Err(ProjVisError::unsupported_projection(
                trimmed,
                "expected EPSG:<code> or a proj4 string starting with '+'",
            )),
        }
    }
}

impl Default for CrsDefinition {
    fn default() -> Self {
        CrsDefinition::Epsg(4326)
    }
}

impl fmt::Display for CrsDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrsDefinition::Epsg(code) => write!(f, "EPSG:{}", code),
            CrsDefinition::Proj4(def) => f.write_str(def),
        }
    }
}
