//! Response wrappers for successful HTTP responses.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use impactsim_lib::Asteroid;

/// `data_source` reported when the listing came from the live feed.
pub const DATA_SOURCE_NASA: &str = "NASA NEO API";

/// `data_source` reported when the built-in sample was served instead.
pub const DATA_SOURCE_SAMPLE: &str = "Sample Data";

/// Wrapper for responses with a success flag and content type metadata.
///
/// This provides symmetry with `ProblemDetails` by including content type
/// information in the response body. `success` is false only for degraded
/// answers that still return a usable payload, such as the sample asteroid
/// listing served when the NEO feed is down.
///
/// # Example
///
/// ```
/// use impactsim_service_shared::ServiceResponse;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     energy_megatons: f64,
/// }
///
/// let response = ServiceResponse::new(Summary { energy_megatons: 12.5 });
/// assert!(response.success);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    /// False when the payload is a fallback.
    pub success: bool,

    /// The actual response payload.
    #[serde(flatten)]
    pub data: T,

    /// Content type for this response.
    pub content_type: String,
}

impl<T> ServiceResponse<T> {
    /// Create a new successful response with the default content type.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            content_type: "application/json".to_string(),
        }
    }

    /// Create a degraded response carrying fallback data.
    pub fn fallback(data: T) -> Self {
        Self {
            success: false,
            ..Self::new(data)
        }
    }
}

impl<T> From<T> for ServiceResponse<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

/// Implement IntoResponse for axum to return ServiceResponse as HTTP responses.
impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Payload of `GET /api/asteroids`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidsResponse {
    pub asteroids: Vec<Asteroid>,
    pub count: usize,
    pub last_updated: DateTime<Utc>,
    pub data_source: String,
    /// Why the live feed could not be used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AsteroidsResponse {
    /// Listing fetched from the live feed.
    pub fn live(asteroids: Vec<Asteroid>) -> Self {
        Self {
            count: asteroids.len(),
            asteroids,
            last_updated: Utc::now(),
            data_source: DATA_SOURCE_NASA.to_string(),
            error: None,
        }
    }

    /// Sample listing served because the live feed failed.
    pub fn sample(asteroids: Vec<Asteroid>, error: impl Into<String>) -> Self {
        Self {
            count: asteroids.len(),
            asteroids,
            last_updated: Utc::now(),
            data_source: DATA_SOURCE_SAMPLE.to_string(),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestData {
        value: i32,
    }

    #[test]
    fn test_response_serialization() {
        let response = ServiceResponse::new(TestData { value: 42 });
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"value\":42"));
        assert!(json.contains("\"content_type\":\"application/json\""));
        assert!(!json.contains("\"data\":{"));
    }

    #[test]
    fn test_fallback_response() {
        let response = ServiceResponse::fallback(TestData { value: 1 });
        assert!(!response.success);
        assert_eq!(response.content_type, "application/json");
    }

    #[test]
    fn test_response_from_trait() {
        let data = TestData { value: 99 };
        let response: ServiceResponse<TestData> = data.clone().into();
        assert_eq!(response.data, data);
        assert!(response.success);
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"success":true,"value":42,"content_type":"application/json"}"#;
        let response: ServiceResponse<TestData> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.value, 42);
    }

    #[test]
    fn test_sample_listing() {
        let listing = AsteroidsResponse::sample(impactsim_lib::sample_asteroids(), "timeout");
        assert_eq!(listing.count, 2);
        assert_eq!(listing.data_source, DATA_SOURCE_SAMPLE);

        let json = serde_json::to_value(ServiceResponse::fallback(listing)).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "timeout");
        assert_eq!(json["asteroids"][1]["name"], "Apophis");
        assert!(json["last_updated"].is_string());
    }

    #[test]
    fn test_live_listing_omits_error() {
        let json = serde_json::to_value(AsteroidsResponse::live(Vec::new())).unwrap();
        assert_eq!(json["count"], 0);
        assert_eq!(json["data_source"], DATA_SOURCE_NASA);
        assert!(json.get("error").is_none());
    }
}
