//! Asteroid impact estimator HTTP service.
//!
//! # Endpoints
//!
//! - `GET /` - API information
//! - `POST /api/calculate-impact` - Simulate an impact from diameter, velocity, angle and density
//! - `GET /api/asteroids?days=N` - Recent near-Earth objects (sample data when the feed is down)
//! - `GET /api/asteroids/{id}` - Raw NeoWs record for one object
//! - `GET /api/health` - Service summary for the web client
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live`, `GET /health/ready` - Container probes

#![deny(warnings)]

use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tokio::task::spawn_blocking;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use impactsim_lib::{sample_asteroids, simulate_impact, ImpactReport, NeoClient};
use impactsim_service_shared::{
    api_health, extract_or_generate_request_id, from_lib_error, health_live, health_ready,
    metrics_handler, record_asteroids_returned, record_impact_calculated, record_neo_fetch,
    record_validation_failed, AppState, AsteroidsQuery, AsteroidsResponse, ImpactRequest,
    MetricsConfig, MetricsLayer, ProblemDetails, ServiceResponse, Validate,
};

/// Handler result: a wrapped payload or an RFC 9457 error.
type ApiResult<T> = Result<T, ProblemDetails>;

/// Build the service router.
pub fn router(state: AppState, metrics: &MetricsConfig) -> Router {
    let mut app = Router::new()
        .route("/", get(root))
        .route("/api/calculate-impact", post(calculate_impact))
        .route("/api/asteroids", get(list_asteroids))
        .route("/api/asteroids/{id}", get(asteroid_details))
        .route("/api/health", get(api_health))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready));

    if metrics.enabled {
        app = app.route(&metrics.path, get(metrics_handler));
    }

    app.layer(CorsLayer::permissive())
        .layer(MetricsLayer)
        .with_state(state)
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
struct ApiInfo {
    message: &'static str,
    version: &'static str,
    endpoints: BTreeMap<&'static str, &'static str>,
    features: &'static str,
}

async fn root() -> Json<ApiInfo> {
    let endpoints = BTreeMap::from([
        ("/api/asteroids", "GET - List of near-Earth asteroids"),
        ("/api/asteroids/{id}", "GET - Details for one near-Earth asteroid"),
        ("/api/calculate-impact", "POST - Calculate impact effects"),
        ("/api/health", "GET - Health check"),
    ]);

    Json(ApiInfo {
        message: "Asteroid Impact Simulator API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
        features: "Impact physics model, randomized trajectories, NASA data integration",
    })
}

/// Handle POST /api/calculate-impact requests.
async fn calculate_impact(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ImpactRequest>, JsonRejection>,
) -> ApiResult<ServiceResponse<ImpactReport>> {
    let request_id = extract_or_generate_request_id(&headers);

    let Json(request) = payload.map_err(|rejection| {
        record_validation_failed("body");
        ProblemDetails::bad_request(rejection.body_text(), request_id.as_str())
    })?;

    if let Err(problem) = request.validate(request_id.as_str()) {
        record_validation_failed(problem.field.as_deref().unwrap_or("unknown"));
        return Err(*problem);
    }

    let params = request.to_params();
    let report = simulate_impact(&params, state.today(), &mut state.impact_rng());

    record_impact_calculated(report.impact_occurred, report.effects.category.label());
    info!(
        request_id = %request_id,
        diameter_km = params.diameter_km,
        velocity_kms = params.velocity_kms,
        angle_degrees = params.angle_degrees,
        impact = report.impact_occurred,
        severity = report.effects.category.label(),
        "impact calculated"
    );

    Ok(ServiceResponse::new(report))
}

/// Handle GET /api/asteroids requests.
///
/// A failing feed is not an error for the caller: the sample listing is
/// returned with `success: false` and the failure reason.
async fn list_asteroids(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<AsteroidsQuery>, QueryRejection>,
) -> ApiResult<ServiceResponse<AsteroidsResponse>> {
    let request_id = extract_or_generate_request_id(&headers);

    let Query(query) = query.map_err(|rejection| {
        ProblemDetails::bad_request(rejection.body_text(), request_id.as_str()).with_field("days")
    })?;
    query.validate(request_id.as_str()).map_err(|problem| *problem)?;

    let config = state.neo_config().clone();
    let today = state.today();
    let days = query.days;
    let fetched = spawn_blocking(move || NeoClient::new(config)?.fetch_feed(days, today))
        .await
        .map_err(|e| e.to_string())
        .and_then(|result| result.map_err(|e| e.to_string()));

    let response = match fetched {
        Ok(asteroids) => {
            record_neo_fetch("nasa");
            ServiceResponse::new(AsteroidsResponse::live(asteroids))
        }
        Err(reason) => {
            warn!(request_id = %request_id, error = %reason, "NEO feed unavailable, serving sample data");
            record_neo_fetch("sample");
            ServiceResponse::fallback(AsteroidsResponse::sample(sample_asteroids(), reason))
        }
    };

    record_asteroids_returned(response.data.count);
    Ok(response)
}

/// Handle GET /api/asteroids/{id} requests.
async fn asteroid_details(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let request_id = extract_or_generate_request_id(&headers);

    let config = state.neo_config().clone();
    let lookup = id.clone();
    let result = spawn_blocking(move || NeoClient::new(config)?.fetch_details(&lookup))
        .await
        .map_err(|e| {
            error!(request_id = %request_id, error = %e, "NEO detail task failed");
            ProblemDetails::internal_error(e.to_string(), request_id.as_str())
        })?;

    result.map(Json).map_err(|e| {
        warn!(request_id = %request_id, asteroid_id = %id, error = %e, "NEO detail lookup failed");
        from_lib_error(&e, &id, request_id.as_str())
    })
}
