//! Route definitions for the Movie Catalog API
//!
//! This module organizes all API routes and applies middleware. Routes
//! are mounted at the root because that is the path layout the existing
//! clients were built against.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod admin;
mod auth;
mod comments;
mod favorites;
mod health;
mod profile;

#[cfg(test)]
mod auth_tests;

pub use admin::admin_routes;
pub use auth::auth_routes;
pub use comments::comment_routes;
pub use favorites::favorite_routes;
pub use profile::profile_routes;

/// Assemble the full application router: every route group plus the
/// shared middleware stack.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .merge(auth::auth_routes())
        .merge(profile::profile_routes())
        .merge(favorites::favorite_routes())
        .merge(comments::comment_routes())
        .merge(admin::admin_routes())
        // Layers wrap bottom-up: the last one added sees the request first.
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
