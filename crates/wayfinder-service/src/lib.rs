//! Facility wayfinding HTTP service.
//!
//! This service exposes the location registry and shortest-path engine from
//! `wayfinder-lib` over a small REST API.
//!
//! # Endpoints
//!
//! - `GET /api/v1/locations` - List every location in declaration order
//! - `POST /api/v1/path` - Compute the shortest walking route between two locations
//! - `GET /api/v1/locations/{code}/connections` - Direct connections of one location
//! - `GET /api/v1/graph` - Location and connection counts of the loaded facility
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe

#![deny(warnings)]

pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use wayfinder_service_shared::{health_live, health_ready, metrics_handler, AppState, MetricsLayer};

/// Name used for business metrics, log events, and health responses.
pub const SERVICE_NAME: &str = "wayfinder";

/// Default location of the Prometheus endpoint.
pub const DEFAULT_METRICS_PATH: &str = "/metrics";

/// Build the router with the default metrics path.
pub fn app(state: AppState) -> Router {
    router(state, DEFAULT_METRICS_PATH)
}

/// Build the router, serving Prometheus metrics at `metrics_path`.
pub fn router(state: AppState, metrics_path: &str) -> Router {
    Router::new()
        .route("/api/v1/locations", get(handlers::locations_handler))
        .route(
            "/api/v1/locations/{code}/connections",
            get(handlers::connections_handler),
        )
        .route("/api/v1/path", post(handlers::path_handler))
        .route("/api/v1/graph", get(handlers::graph_handler))
        .route(metrics_path, get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(MetricsLayer)
        .layer(CorsLayer::permissive())
        .with_state(state.with_service(SERVICE_NAME))
}
