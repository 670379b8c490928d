//! Shared infrastructure for the impactsim HTTP service.
//!
//! This crate provides the HTTP glue around `impactsim-lib`:
//!
//! - [`AppState`]: Service configuration and NEO client settings shared by handlers
//! - [`ServiceConfig`]: Port and optional simulation seed read from the environment
//! - [`health`]: Liveness/readiness probes and the `/api/health` summary
//! - [`ProblemDetails`]: RFC 9457 Problem Details for consistent error responses
//! - [`ServiceResponse`]: Wrapper for successful responses with content type
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request tracking and metrics middleware
//! - Request types with validation for each endpoint
//!
//! # Architecture
//!
//! Handlers stay thin; the impact model and the NEO feed client live in
//! `impactsim-lib`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Parse request JSON / query                               │
//! │  - Validate parameters                                      │
//! │  - Call impactsim-lib APIs                                  │
//! │  - Format response                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides deterministic state for handler
//! testing. Enable the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

mod config;
mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ConfigError, ServiceConfig, DEFAULT_SERVICE_PORT};
pub use health::{api_health, health_live, health_ready, ApiHealth, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_asteroids_returned, record_impact_calculated,
    record_neo_fetch, record_validation_failed, MetricsConfig, MetricsError,
};
pub use middleware::{extract_or_generate_request_id, MetricsLayer, RequestId};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_ASTEROID_NOT_FOUND, PROBLEM_INTERNAL_ERROR,
    PROBLEM_INVALID_REQUEST, PROBLEM_UPSTREAM_UNAVAILABLE,
};
pub use request::{AsteroidsQuery, ImpactRequest, Validate, DEFAULT_FEED_DAYS};
pub use response::{AsteroidsResponse, ServiceResponse, DATA_SOURCE_NASA, DATA_SOURCE_SAMPLE};
pub use state::AppState;
