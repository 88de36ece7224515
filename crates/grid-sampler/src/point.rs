//! Transformed sample points.

use serde::ser::{Serialize, SerializeTuple, Serializer};

/// The image of one grid point under a coordinate transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformedPoint {
    /// Both components are finite.
    Valid { x: f64, y: f64 },
    /// The transform had no finite image for this point.
    Singular,
}

impl TransformedPoint {
    /// Classify a raw transform result.
    ///
    /// Any non-finite component, infinite of either sign on either axis or
    /// NaN, makes the point singular.
    #[inline]
    pub fn classify((x, y): (f64, f64)) -> Self {
        if x.is_finite() && y.is_finite() {
            TransformedPoint::Valid { x, y }
        } else {
            TransformedPoint::Singular
        }
    }

    pub fn is_singular(&self) -> bool {
        matches!(self, TransformedPoint::Singular)
    }

    /// The coordinate pair, or `None` for a singular point.
    pub fn coords(&self) -> Option<(f64, f64)> {
        match *self {
            TransformedPoint::Valid { x, y } => Some((x, y)),
            TransformedPoint::Singular => None,
        }
    }
}

/// Serializes as `[x, y]`, or `[null, null]` when singular.
impl Serialize for TransformedPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (x, y) = match self.coords() {
            Some((x, y)) => (Some(x), Some(y)),
            None => (None, None),
        };
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&x)?;
        tup.serialize_element(&y)?;
        tup.end()
    }
}
