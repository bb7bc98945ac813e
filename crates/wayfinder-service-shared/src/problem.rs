//! RFC 9457 Problem Details for HTTP APIs.
//!
//! Provides structured error responses following the Problem Details standard.
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use wayfinder_lib::{Error as LibError, LocationRole};

/// Problem type URI for unknown location codes.
pub const PROBLEM_UNKNOWN_LOCATION: &str = "/problems/unknown-location";

/// Problem type URI for invalid request parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for a facility definition that failed validation.
pub const PROBLEM_INVALID_FACILITY: &str = "/problems/invalid-facility";

/// Problem type URI for internal server errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// RFC 9457 Problem Details response structure.
///
/// # Example
///
/// ```
/// use wayfinder_service_shared::{ProblemDetails, PROBLEM_UNKNOWN_LOCATION};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(
///     PROBLEM_UNKNOWN_LOCATION,
///     "Unknown Location",
///     StatusCode::NOT_FOUND,
/// )
/// .with_detail("Start location 'PHX' not found. Did you mean: PHR?")
/// .with_request_id("req-12345");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    /// HTTP status code for this problem.
    pub status: u16,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// URI reference identifying the specific occurrence (e.g., request ID).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Which request field held the unrecognized code (`start`, `end`, `code`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Content type for this response (always "application/problem+json").
    pub content_type: String,
}

impl ProblemDetails {
    /// Create a new ProblemDetails with required fields.
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            field: None,
            content_type: "application/problem+json".to_string(),
        }
    }

    /// Add a detailed explanation of this specific problem occurrence.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add the request identifier for tracing.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// Name the request field the problem refers to.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Create a 400 Bad Request problem for invalid input.
    pub fn bad_request(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// Create a 404 Not Found problem for an unknown location code.
    pub fn unknown_location(
        code: &str,
        role: LocationRole,
        suggestions: &[String],
        request_id: impl Into<String>,
    ) -> Self {
        let (label, field) = match role {
            LocationRole::Start => ("Start location", "start"),
            LocationRole::Destination => ("Destination", "end"),
            LocationRole::Lookup => ("Location", "code"),
        };
        let detail = if suggestions.is_empty() {
            format!("{} '{}' not found", label, code)
        } else {
            format!(
                "{} '{}' not found. Did you mean: {}?",
                label,
                code,
                suggestions.join(", ")
            )
        };

        Self::new(
            PROBLEM_UNKNOWN_LOCATION,
            "Unknown Location",
            StatusCode::NOT_FOUND,
        )
        .with_detail(detail)
        .with_field(field)
        .with_request_id(request_id)
    }

    /// Create a 500 problem for a facility definition that failed validation.
    pub fn invalid_facility(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_FACILITY,
            "Invalid Facility Definition",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// Create a 500 Internal Server Error problem.
    pub fn internal_error(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.title,
            self.detail.as_deref().unwrap_or("")
        )
    }
}

impl std::error::Error for ProblemDetails {}

/// Implement IntoResponse for axum to return ProblemDetails as HTTP responses.
impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Json(&self).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );

        *response.status_mut() = status;
        response
    }
}

/// Convert library errors to ProblemDetails.
///
/// The `request_id` must be provided separately since library errors don't have it.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::UnknownLocation {
            code,
            role,
            suggestions,
        } => ProblemDetails::unknown_location(code, *role, suggestions, request_id),
        err if err.is_validation() => ProblemDetails::invalid_facility(err.to_string(), request_id),
        _ => ProblemDetails::internal_error(error.to_string(), request_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_details_new() {
        let problem = ProblemDetails::new(
            PROBLEM_UNKNOWN_LOCATION,
            "Unknown Location",
            StatusCode::NOT_FOUND,
        );
        assert_eq!(problem.type_uri, PROBLEM_UNKNOWN_LOCATION);
        assert_eq!(problem.title, "Unknown Location");
        assert_eq!(problem.status, 404);
        assert_eq!(problem.content_type, "application/problem+json");
    }

    #[test]
    fn test_problem_details_bad_request() {
        let problem = ProblemDetails::bad_request("Invalid JSON", "req-123");
        assert_eq!(problem.status, 400);
        assert_eq!(problem.instance.as_deref(), Some("req-123"));
    }

    #[test]
    fn test_unknown_start_names_field_and_suggestions() {
        let suggestions = vec!["PHR".to_string()];
        let problem =
            ProblemDetails::unknown_location("PHX", LocationRole::Start, &suggestions, "req-456");

        assert_eq!(problem.status, 404);
        assert_eq!(problem.field.as_deref(), Some("start"));
        let detail = problem.detail.as_deref().unwrap();
        assert!(detail.starts_with("Start location 'PHX'"));
        assert!(detail.contains("Did you mean: PHR?"));
    }

    #[test]
    fn test_unknown_destination_without_suggestions() {
        let problem =
            ProblemDetails::unknown_location("XYZ", LocationRole::Destination, &[], "req-789");

        assert_eq!(problem.field.as_deref(), Some("end"));
        assert!(problem.detail.as_deref().unwrap().contains("XYZ"));
        assert!(!problem.detail.as_deref().unwrap().contains("Did you mean"));
    }

    #[test]
    fn test_problem_details_serialization() {
        let problem = ProblemDetails::bad_request("Test error", "req-test");
        let json = serde_json::to_string(&problem).unwrap();

        assert!(json.contains("\"type\":\"/problems/invalid-request\""));
        assert!(json.contains("\"title\":\"Invalid Request\""));
        assert!(json.contains("\"status\":400"));
        assert!(json.contains("\"detail\":\"Test error\""));
        assert!(json.contains("\"instance\":\"req-test\""));
        assert!(!json.contains("\"field\""));
    }

    #[test]
    fn test_from_lib_error_unknown_location() {
        let error = LibError::UnknownLocation {
            code: "ZZ".to_string(),
            role: LocationRole::Destination,
            suggestions: Vec::new(),
        };
        let problem = from_lib_error(&error, "req-lib");

        assert_eq!(problem.type_uri, PROBLEM_UNKNOWN_LOCATION);
        assert_eq!(problem.status, 404);
    }

    #[test]
    fn test_from_lib_error_validation() {
        let error = LibError::DuplicateLocation {
            code: "ER".to_string(),
        };
        let problem = from_lib_error(&error, "req-val");

        assert_eq!(problem.type_uri, PROBLEM_INVALID_FACILITY);
        assert_eq!(problem.status, 500);
        assert!(problem.detail.as_deref().unwrap().contains("ER"));
    }

    #[test]
    fn test_from_lib_error_io() {
        let error = LibError::Io(std::io::Error::other("disk gone"));
        let problem = from_lib_error(&error, "req-io");

        assert_eq!(problem.type_uri, PROBLEM_INTERNAL_ERROR);
        assert!(problem.detail.as_deref().unwrap().contains("disk gone"));
    }
}
