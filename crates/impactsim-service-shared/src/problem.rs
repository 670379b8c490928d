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

use impactsim_lib::Error as LibError;

/// Problem type URI for invalid request parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for asteroid ids the NEO feed does not know.
pub const PROBLEM_ASTEROID_NOT_FOUND: &str = "/problems/asteroid-not-found";

/// Problem type URI for a NEO feed that failed or returned garbage.
pub const PROBLEM_UPSTREAM_UNAVAILABLE: &str = "/problems/upstream-unavailable";

/// Problem type URI for internal server errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// RFC 9457 Problem Details response structure.
///
/// # Example
///
/// ```
/// use impactsim_service_shared::{ProblemDetails, PROBLEM_INVALID_REQUEST};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(
///     PROBLEM_INVALID_REQUEST,
///     "Invalid Request",
///     StatusCode::BAD_REQUEST,
/// )
/// .with_detail("Angle must be between 0 and 90 degrees")
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

    /// Request field that failed validation, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
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

    /// Name the request field at fault.
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

    /// Create a 404 Not Found problem for an unknown asteroid id.
    pub fn asteroid_not_found(id: &str, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_ASTEROID_NOT_FOUND,
            "Asteroid Not Found",
            StatusCode::NOT_FOUND,
        )
        .with_detail(format!("Asteroid '{}' not found", id))
        .with_request_id(request_id)
    }

    /// Create a 502 Bad Gateway problem for NEO feed failures.
    pub fn upstream_unavailable(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_UPSTREAM_UNAVAILABLE,
            "Upstream Unavailable",
            StatusCode::BAD_GATEWAY,
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
/// `subject` names the resource being fetched and is only used for 404s.
pub fn from_lib_error(error: &LibError, subject: &str, request_id: &str) -> ProblemDetails {
    match error {
        LibError::InvalidParameter { field, message } => {
            ProblemDetails::bad_request(message.clone(), request_id).with_field(*field)
        }
        LibError::FeedWindowTooLarge { .. } => {
            ProblemDetails::bad_request(error.to_string(), request_id).with_field("days")
        }
        LibError::Http(e) if e.status() == Some(StatusCode::NOT_FOUND) => {
            ProblemDetails::asteroid_not_found(subject, request_id)
        }
        LibError::Http(_) | LibError::NeoFeed { .. } | LibError::Json(_) => {
            ProblemDetails::upstream_unavailable(
                format!("NEO feed request failed: {}", error),
                request_id,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_details_new() {
        let problem = ProblemDetails::new(
            PROBLEM_UPSTREAM_UNAVAILABLE,
            "Upstream Unavailable",
            StatusCode::BAD_GATEWAY,
        );
        assert_eq!(problem.type_uri, PROBLEM_UPSTREAM_UNAVAILABLE);
        assert_eq!(problem.title, "Upstream Unavailable");
        assert_eq!(problem.status, 502);
        assert_eq!(problem.content_type, "application/problem+json");
    }

    #[test]
    fn test_problem_details_bad_request() {
        let problem = ProblemDetails::bad_request("Invalid JSON", "req-123");
        assert_eq!(problem.status, 400);
        assert_eq!(problem.instance.as_deref(), Some("req-123"));
        assert!(problem.field.is_none());
    }

    #[test]
    fn test_problem_details_serialization() {
        let problem = ProblemDetails::bad_request("Test error", "req-test").with_field("angle");
        let json = serde_json::to_string(&problem).unwrap();

        assert!(json.contains("\"type\":\"/problems/invalid-request\""));
        assert!(json.contains("\"title\":\"Invalid Request\""));
        assert!(json.contains("\"status\":400"));
        assert!(json.contains("\"detail\":\"Test error\""));
        assert!(json.contains("\"instance\":\"req-test\""));
        assert!(json.contains("\"field\":\"angle\""));
    }

    #[test]
    fn test_problem_details_into_response() {
        let response = ProblemDetails::asteroid_not_found("42", "req-1").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/problem+json"
        );
    }

    #[test]
    fn test_from_lib_error_invalid_parameter() {
        let error = LibError::InvalidParameter {
            field: "velocity",
            message: "Velocity must be between 1 and 300 km/s".to_string(),
        };
        let problem = from_lib_error(&error, "impact", "req-lib");

        assert_eq!(problem.type_uri, PROBLEM_INVALID_REQUEST);
        assert_eq!(problem.status, 400);
        assert_eq!(
            problem.detail.as_deref(),
            Some("Velocity must be between 1 and 300 km/s")
        );
        assert_eq!(problem.field.as_deref(), Some("velocity"));
    }

    #[test]
    fn test_from_lib_error_feed_window() {
        let error = LibError::FeedWindowTooLarge { days: 90, max: 30 };
        let problem = from_lib_error(&error, "feed", "req-days");
        assert_eq!(problem.status, 400);
        assert!(problem.detail.as_deref().unwrap().contains("90"));
    }

    #[test]
    fn test_from_lib_error_bad_payload() {
        let error = LibError::NeoFeed {
            message: "missing near_earth_objects".to_string(),
        };
        let problem = from_lib_error(&error, "feed", "req-feed");
        assert_eq!(problem.type_uri, PROBLEM_UPSTREAM_UNAVAILABLE);
        assert_eq!(problem.status, 502);
    }
}
