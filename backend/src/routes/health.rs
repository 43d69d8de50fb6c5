//! Health check endpoints
//!
//! Three probes in the usual Kubernetes shape: `/health` for humans
//! and load balancers, `/health/ready` which exercises the database,
//! and `/health/live` which only proves the process is serving.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

/// Health probe response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl HealthResponse {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            service: "movie-catalog-backend",
            version: env!("CARGO_PKG_VERSION"),
            database: None,
        }
    }
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}

/// GET /health/ready, answering 503 while the database is unreachable.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match db::health_check(&state.db).await {
        Ok(()) => {
            let mut response = HealthResponse::new("ready");
            response.database = Some("healthy".to_string());
            Ok(Json(response))
        }
        Err(e) => {
            let mut response = HealthResponse::new("not_ready");
            response.database = Some(e.to_string());
            Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
        }
    }
}

/// GET /health/live, which can only answer if the process is up.
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("alive"))
}
