//! Asteroid impact estimator HTTP service.
//!
//! # Configuration
//!
//! - `SERVICE_PORT` - HTTP port (default: 5001)
//! - `IMPACT_RNG_SEED` - Fixed simulation seed (optional, for reproducible runs)
//! - `NASA_API_KEY` - NeoWs API key (default: `DEMO_KEY`)
//! - `NEO_API_BASE_URL` - NeoWs API root (default: `https://api.nasa.gov/neo/rest/v1`)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED`, `METRICS_PATH` - Prometheus endpoint settings

use std::net::SocketAddr;

use tracing::{error, info, warn};

use impactsim_service::router;
use impactsim_service_shared::{init_logging, init_metrics, AppState, LoggingConfig, MetricsConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("impactsim");
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let state = AppState::from_env().map_err(|e| {
        error!(error = %e, "invalid service configuration");
        e
    })?;
    if state.neo_config().is_demo_key() {
        warn!("NASA_API_KEY not set, using the rate-limited DEMO_KEY");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], state.config().port));
    let app = router(state, &metrics_config);

    info!(addr = %addr, "listening on");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
