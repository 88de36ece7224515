//! Error types for proj-vis.

use thiserror::Error;

/// Result type alias using ProjVisError.
pub type ProjVisResult<T> = Result<T, ProjVisError>;

/// Errors that abort a request before any point is generated.
///
/// A point whose transform has no finite image is not an error; it is
/// carried inline as a singular point by the sampler.
#[derive(Debug, Error)]
pub enum ProjVisError {
    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Invalid projection: {definition} (Internal Proj Error: {detail})")]
    UnsupportedProjection { definition: String, detail: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ProjVisError {
    /// Shorthand for an `InvalidParameter` error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        ProjVisError::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Shorthand for an `UnsupportedProjection` error.
    pub fn unsupported_projection(definition: impl Into<String>, detail: impl Into<String>) -> Self {
        ProjVisError::UnsupportedProjection {
            definition: definition.into(),
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ProjVisError::InvalidParameter { .. } | ProjVisError::UnsupportedProjection { .. } => {
                400
            }
            ProjVisError::Internal(_) => 500,
        }
    }
}

impl From<serde_json::Error> for ProjVisError {
    fn from(err: serde_json::Error) -> Self {
        ProjVisError::Internal(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ProjVisError::invalid_parameter("step", "not a number").http_status_code(),
            400
        );
        assert_eq!(
            ProjVisError::unsupported_projection("+proj=nope", "unknown projection")
                .http_status_code(),
            400
        );
        assert_eq!(ProjVisError::Internal("boom".into()).http_status_code(), 500);
    }

    #[test]
    fn test_projection_message_carries_detail() {
        let err = ProjVisError::unsupported_projection("+proj=nope", "unknown projection id");
        assert_eq!(
            err.to_string(),
            "Invalid projection: +proj=nope (Internal Proj Error: unknown projection id)"
        );
    }
}
