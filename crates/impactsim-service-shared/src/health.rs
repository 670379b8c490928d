//! Health check handlers.
//!
//! Provides `/health/live` and `/health/ready` for container probes plus the
//! `/api/health` summary consumed by the web client.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use impactsim_lib::impact::PHYSICS_ENGINE;

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "not_ready: ...".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Physics model revision (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physics_engine: Option<String>,

    /// Whether the NEO feed runs on the shared demo key (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neo_demo_mode: Option<bool>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            physics_engine: None,
            neo_demo_mode: None,
        }
    }

    /// Create a ready status.
    pub fn ready(service: &str, version: &str, demo_mode: bool) -> Self {
        Self {
            physics_engine: Some(PHYSICS_ENGINE.to_string()),
            neo_demo_mode: Some(demo_mode),
            ..Self::alive(service, version)
        }
    }

    /// Create a not-ready status.
    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            ..Self::alive(service, version)
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiHealth {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// `available` with a personal API key, `demo_mode` with `DEMO_KEY`.
    pub nasa_api: String,
    pub version: String,
    pub physics_engine: String,
}

impl ApiHealth {
    pub fn new(demo_mode: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            nasa_api: if demo_mode { "demo_mode" } else { "available" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            physics_engine: PHYSICS_ENGINE.to_string(),
        }
    }
}

/// Liveness probe handler.
///
/// Returns 200 OK if the service is running.
///
/// # Example
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"impactsim-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// The model has no external dependencies, so the service is ready once it
/// has a usable NEO base URL. A feed outage does not make it unready because
/// the listing falls back to sample data.
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    let neo = state.neo_config();

    if neo.base_url.trim().is_empty() {
        let status = HealthStatus::not_ready(service, version, "NEO base URL not configured");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status));
    }

    let status = HealthStatus::ready(service, version, neo.is_demo_key());
    (StatusCode::OK, Json(status))
}

/// Handler for `GET /api/health`.
pub async fn api_health(State(state): State<AppState>) -> Json<ApiHealth> {
    Json(ApiHealth::new(state.neo_config().is_demo_key()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_alive() {
        let status = HealthStatus::alive("test-service", "1.0.0");
        assert_eq!(status.status, "ok");
        assert_eq!(status.service, "test-service");
        assert_eq!(status.version, "1.0.0");
        assert!(status.physics_engine.is_none());
        assert!(status.neo_demo_mode.is_none());
    }

    #[test]
    fn test_health_status_ready() {
        let status = HealthStatus::ready("test-service", "1.0.0", true);
        assert_eq!(status.status, "ok");
        assert_eq!(status.physics_engine.as_deref(), Some("advanced_v2"));
        assert_eq!(status.neo_demo_mode, Some(true));
    }

    #[test]
    fn test_health_status_not_ready() {
        let status = HealthStatus::not_ready("test-service", "1.0.0", "no feed");
        assert!(status.status.starts_with("not_ready:"));
        assert!(status.status.contains("no feed"));
    }

    #[test]
    fn test_health_status_serialization() {
        let status = HealthStatus::alive("impactsim", "0.1.0");
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(!json.contains("physics_engine"));
    }

    #[test]
    fn test_api_health_modes() {
        assert_eq!(ApiHealth::new(true).nasa_api, "demo_mode");

        let health = ApiHealth::new(false);
        assert_eq!(health.nasa_api, "available");
        assert_eq!(health.status, "healthy");
        assert_eq!(health.physics_engine, "advanced_v2");
    }
}
