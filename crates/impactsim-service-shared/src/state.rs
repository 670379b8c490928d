//! Application state for the HTTP service.
//!
//! Handlers reach the service configuration and the NEO feed settings through
//! this state. The blocking NEO client itself is built per request on the
//! blocking pool, so only its configuration is stored here.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use impactsim_lib::NeoClientConfig;

use crate::config::ServiceConfig;

/// Shared application state for all axum handlers.
///
/// This struct is cheaply cloneable (using `Arc` internally) and should be
/// shared via axum's `State` extractor.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use impactsim_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let mut rng = state.impact_rng();
///     // ... run a simulation
/// }
///
/// let state = AppState::from_env().unwrap();
/// let app = Router::new()
///     .route("/api/example", get(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServiceConfig,
    neo: NeoClientConfig,
}

impl AppState {
    /// Build state from explicit components.
    pub fn new(config: ServiceConfig, neo: NeoClientConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, neo }),
        }
    }

    /// Build state from `SERVICE_PORT`, `IMPACT_RNG_SEED`, `NASA_API_KEY` and
    /// `NEO_API_BASE_URL`.
    pub fn from_env() -> Result<Self, crate::ConfigError> {
        let config = ServiceConfig::from_env()?;
        let neo = NeoClientConfig::from_env();
        tracing::info!(
            port = config.port,
            seeded = config.rng_seed.is_some(),
            neo_base_url = %neo.base_url,
            demo_key = neo.is_demo_key(),
            "service configuration loaded"
        );
        Ok(Self::new(config, neo))
    }

    /// Access the service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.inner.config
    }

    /// Access the NEO feed configuration.
    pub fn neo_config(&self) -> &NeoClientConfig {
        &self.inner.neo
    }

    /// Generator for one impact simulation.
    ///
    /// With a configured seed every call starts from the same state, so
    /// identical requests yield identical reports.
    pub fn impact_rng(&self) -> Pcg64Mcg {
        match self.inner.config.rng_seed {
            Some(seed) => Pcg64Mcg::seed_from_u64(seed),
            None => Pcg64Mcg::from_entropy(),
        }
    }

    /// Current UTC date used as the base for projected impact dates.
    pub fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("port", &self.inner.config.port)
            .field("seeded", &self.inner.config.rng_seed.is_some())
            .field("neo_base_url", &self.inner.neo.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_repeats() {
        let state = AppState::new(
            ServiceConfig::default().with_seed(7),
            NeoClientConfig::default(),
        );
        let a: u64 = state.impact_rng().gen();
        let b: u64 = state.impact_rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unseeded_rng_varies() {
        let state = AppState::new(ServiceConfig::default(), NeoClientConfig::default());
        let draws: Vec<u64> = (0..4).map(|_| state.impact_rng().gen()).collect();
        assert!(draws.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn test_app_state_clone_shares_config() {
        let state1 = AppState::new(
            ServiceConfig::default(),
            NeoClientConfig::default().with_base_url("http://127.0.0.1:9"),
        );
        let state2 = state1.clone();
        assert_eq!(state2.neo_config().base_url, "http://127.0.0.1:9");
        assert_eq!(state1.config(), state2.config());
    }

    #[test]
    fn test_app_state_debug() {
        let state = AppState::new(ServiceConfig::default(), NeoClientConfig::default());
        let debug = format!("{:?}", state);

        assert!(debug.contains("AppState"));
        assert!(debug.contains("seeded"));
        assert!(!debug.contains("DEMO_KEY"));
    }
}
