//! Request handlers for the wayfinding API.
//!
//! Handlers stay thin: they validate input, call into `wayfinder-lib`, and
//! shape the result. Library errors become RFC 9457 problem responses.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use wayfinder_lib::{find_path, Location, RouteSummary};
use wayfinder_service_shared::{
    extract_or_generate_request_id, from_lib_error, record_connections_queried,
    record_path_computed, record_path_failed, record_path_hops, record_path_unreachable, AppState,
    PathRequest, ProblemDetails, ServiceResponse, Validate,
};

use crate::SERVICE_NAME;

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success(ServiceResponse<T>),
    Error(ProblemDetails),
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiResponse::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            ApiResponse::Error(problem) => problem.into_response(),
        }
    }
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        ApiResponse::Success(ServiceResponse::new(data))
    }
}

/// Every location known to the facility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub count: usize,
    pub locations: Vec<Location>,
}

/// Result of a path query.
///
/// An unreachable destination is a successful response with `valid` false,
/// an empty path, and zero distance and time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResponse {
    pub valid: bool,
    /// Location codes from start to end, inclusive.
    pub path: Vec<String>,
    /// Display names matching `path`.
    pub path_names: Vec<String>,
    /// Total distance in meters.
    pub distance: f64,
    pub estimated_time_minutes: u64,
    pub hops: usize,
}

/// One direct connection of a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionEntry {
    pub code: String,
    pub name: String,
    pub distance: f64,
}

/// Direct connections of a single location, in edge declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionsResponse {
    pub code: String,
    pub name: String,
    pub connections: Vec<ConnectionEntry>,
}

/// Structural summary of the loaded facility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphResponse {
    pub source: String,
    pub locations: usize,
    pub connections: usize,
    pub loaded_at: String,
}

/// Handle GET /api/v1/locations requests.
pub async fn locations_handler(State(state): State<AppState>) -> ApiResponse<LocationsResponse> {
    let locations = state.registry().all_locations().to_vec();
    ApiResponse::ok(LocationsResponse {
        count: locations.len(),
        locations,
    })
}

/// Handle POST /api/v1/path requests.
pub async fn path_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<PathRequest>, JsonRejection>,
) -> ApiResponse<PathResponse> {
    let request_id = extract_or_generate_request_id(&headers).0;

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(request_id = %request_id, error = %rejection, "rejected path request body");
            record_path_failed("invalid_body", SERVICE_NAME);
            return ApiResponse::Error(ProblemDetails::bad_request(
                rejection.body_text(),
                &request_id,
            ));
        }
    };

    info!(
        request_id = %request_id,
        start = %request.start,
        end = %request.end,
        "handling path request"
    );

    if let Err(problem) = request.validate(&request_id) {
        record_path_failed("validation_error", SERVICE_NAME);
        return ApiResponse::Error(*problem);
    }

    let registry = state.registry();
    let result = match find_path(registry, &request.start, &request.end) {
        Ok(result) => result,
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "path query failed");
            let reason = if e.is_not_found() {
                "unknown_location"
            } else {
                "internal_error"
            };
            record_path_failed(reason, SERVICE_NAME);
            return ApiResponse::Error(from_lib_error(&e, &request_id));
        }
    };

    let summary = RouteSummary::from_path(registry, &result);
    if summary.valid {
        record_path_computed(SERVICE_NAME);
        record_path_hops(summary.hops);
    } else {
        record_path_unreachable(SERVICE_NAME);
    }

    info!(
        request_id = %request_id,
        valid = summary.valid,
        hops = summary.hops,
        distance = summary.distance,
        "path computed"
    );

    ApiResponse::ok(PathResponse {
        valid: summary.valid,
        path: result.path().to_vec(),
        path_names: summary.step_names(),
        distance: summary.distance,
        estimated_time_minutes: summary.estimated_time_minutes,
        hops: summary.hops,
    })
}

/// Handle GET /api/v1/locations/{code}/connections requests.
pub async fn connections_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> ApiResponse<ConnectionsResponse> {
    let request_id = extract_or_generate_request_id(&headers).0;
    let registry = state.registry();

    let found = registry.lookup(&code).and_then(|origin| {
        registry
            .neighbors(&origin.code)
            .map(|neighbors| (origin, neighbors))
    });
    let (origin, neighbors) = match found {
        Ok(found) => found,
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "connections lookup failed");
            return ApiResponse::Error(from_lib_error(&e, &request_id));
        }
    };
    record_connections_queried(neighbors.len());

    ApiResponse::ok(ConnectionsResponse {
        code: origin.code.clone(),
        name: origin.name.clone(),
        connections: neighbors
            .into_iter()
            .map(|neighbor| ConnectionEntry {
                code: neighbor.location.code.clone(),
                name: neighbor.location.name.clone(),
                distance: neighbor.distance,
            })
            .collect(),
    })
}

/// Handle GET /api/v1/graph requests.
pub async fn graph_handler(State(state): State<AppState>) -> ApiResponse<GraphResponse> {
    let info = state.registry().info();
    ApiResponse::ok(GraphResponse {
        source: state.source().to_string(),
        locations: info.locations,
        connections: info.connections,
        loaded_at: state.loaded_at().to_rfc3339(),
    })
}
