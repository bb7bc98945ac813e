//! Request types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::ProblemDetails;

/// Validation trait for request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Request for computing a path between two locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathRequest {
    /// Starting location code.
    pub start: String,

    /// Destination location code.
    pub end: String,
}

impl Validate for PathRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if self.start.trim().is_empty() {
            return Err(Box::new(
                ProblemDetails::bad_request(
                    "The 'start' field is required and cannot be empty",
                    request_id,
                )
                .with_field("start"),
            ));
        }

        if self.end.trim().is_empty() {
            return Err(Box::new(
                ProblemDetails::bad_request(
                    "The 'end' field is required and cannot be empty",
                    request_id,
                )
                .with_field("end"),
            ));
        }

        Ok(())
    }
}
