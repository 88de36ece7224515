//! Grid sampling handler.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use grid_sampler::TransformedPoint;
use proj_common::ProjVisError;

use crate::query::GridQuery;
use crate::state::AppState;

/// GET / - Sample one page of a transformed grid.
///
/// Responds with a JSON array of `[x, y]` pairs, `[null, null]` for points
/// the destination projection cannot represent. Parameter and projection
/// errors respond 400 with the message as a JSON string.
pub async fn grid_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = match GridQuery::from_params(&params, &state.config.default_crs) {
        Ok(query) => query,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected grid request");
            return error_response(&e);
        }
    };

    tracing::debug!(
        total = query.grid.total(),
        offset = query.page.offset,
        limit = query.page.limit,
        proj_from = %query.proj_from,
        proj_to = %query.proj_to,
        "Sampling grid"
    );

    // Projection math is CPU-bound; keep it off the async workers
    let result = tokio::task::spawn_blocking(move || query.execute()).await;

    match result {
        Ok(Ok(points)) => {
            tracing::debug!(
                points = points.len(),
                singular = points.iter().filter(|p| p.is_singular()).count(),
                "Grid page generated"
            );
            points_response(&points)
        }
        Ok(Err(e)) => {
            tracing::debug!(error = %e, "Rejected grid request");
            error_response(&e)
        }
        Err(e) => {
            tracing::error!(error = %e, "Grid sampling task failed");
            error_response(&ProjVisError::Internal(format!("sampling task failed: {}", e)))
        }
    }
}

/// 200 response with the page as a JSON array.
pub fn points_response(points: &[TransformedPoint]) -> Response {
    match serde_json::to_string(points) {
        Ok(json) => json_response(StatusCode::OK, json),
        Err(e) => error_response(&ProjVisError::from(e)),
    }
}

/// Error response whose body is the error message as a JSON string.
pub fn error_response(err: &ProjVisError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let json = serde_json::to_string(&err.to_string()).unwrap_or_default();
    json_response(status, json)
}

fn json_response(status: StatusCode, json: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], json).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    fn state() -> Extension<Arc<AppState>> {
        Extension(Arc::new(AppState::new(ServerConfig::default())))
    }

    fn params(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
        Query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_handler_returns_points() {
        let response = grid_handler(
            state(),
            params(&[("maxX", "2"), ("maxY", "2"), ("offset", "4"), ("limit", "5")]),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            body_string(response).await,
            "[[1.0,1.0],[2.0,1.0],[0.0,2.0],[1.0,2.0],[2.0,2.0]]"
        );
    }

    #[tokio::test]
    async fn test_handler_rejects_bad_number() {
        let response = grid_handler(state(), params(&[("step", "fast")])).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: String = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body.contains("'step'"), "{}", body);
    }

    #[test]
    fn test_error_response_status() {
        let response = error_response(&ProjVisError::Internal("boom".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_points_response_encodes_singular() {
        let response = points_response(&[
            TransformedPoint::Singular,
            TransformedPoint::Valid { x: 0.5, y: 1.0 },
        ]);
        assert_eq!(body_string(response).await, "[[null,null],[0.5,1.0]]");
    }
}
