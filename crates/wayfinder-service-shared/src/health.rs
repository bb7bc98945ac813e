//! Health check handlers for liveness and readiness probes.
//!
//! Provides `/health/live` and `/health/ready` endpoints that return JSON
//! status responses.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "not_ready: <reason>".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Number of locations loaded (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations_loaded: Option<usize>,

    /// Number of undirected connections loaded (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections_loaded: Option<usize>,

    /// RFC 3339 timestamp of when the facility was loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<String>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            locations_loaded: None,
            connections_loaded: None,
            loaded_at: None,
        }
    }

    /// Create a ready status with facility information.
    pub fn ready(service: &str, version: &str, state: &AppState) -> Self {
        let info = state.registry().info();
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            locations_loaded: Some(info.locations),
            connections_loaded: Some(info.connections),
            loaded_at: Some(state.loaded_at().to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }

    /// Create a not-ready status.
    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            locations_loaded: None,
            connections_loaded: None,
            loaded_at: None,
        }
    }
}

/// Liveness probe handler.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"wayfinder","version":"0.1.0"}
/// ```
pub async fn health_live(State(state): State<AppState>) -> impl IntoResponse {
    let status = HealthStatus::alive(state.service(), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Returns 200 OK once a non-empty facility is loaded, 503 otherwise.
///
/// ```text
/// GET /health/ready
/// {"status":"ok",...,"locations_loaded":11,"connections_loaded":16,
///  "loaded_at":"2026-01-01T00:00:00Z"}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = state.service();
    let version = env!("CARGO_PKG_VERSION");

    if state.registry().is_empty() {
        let status = HealthStatus::not_ready(service, version, "no locations loaded");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(service, version, &state);
    (StatusCode::OK, Json(status)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_lib::LocationRegistry;

    #[test]
    fn test_health_status_alive() {
        let status = HealthStatus::alive("test-service", "1.0.0");
        assert_eq!(status.status, "ok");
        assert_eq!(status.service, "test-service");
        assert!(status.locations_loaded.is_none());
    }

    #[test]
    fn test_health_status_ready() {
        let state = AppState::builtin().unwrap();
        let status = HealthStatus::ready("test-service", "1.0.0", &state);
        assert_eq!(status.locations_loaded, Some(11));
        assert_eq!(status.connections_loaded, Some(16));
        assert!(status.loaded_at.as_deref().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_health_status_not_ready() {
        let status = HealthStatus::not_ready("test-service", "1.0.0", "no data");
        assert!(status.status.starts_with("not_ready:"));
        assert!(status.status.contains("no data"));
    }

    #[test]
    fn test_health_status_serialization() {
        let status = HealthStatus::alive("wayfinder", "0.1.0");
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(!json.contains("locations_loaded"));
    }

    #[tokio::test]
    async fn test_health_ready_unavailable_for_empty_facility() {
        let state = AppState::from_registry(LocationRegistry::default(), "empty");
        let response = health_ready(State(state)).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_live_reports_state_service_name() {
        let state = AppState::builtin().unwrap().with_service("wayfinder-east");
        let response = health_live(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["service"], "wayfinder-east");
    }

    #[tokio::test]
    async fn test_health_ready_ok_for_builtin_facility() {
        let response = health_ready(State(AppState::builtin().unwrap())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
