//! Test utilities for handler testing.
//!
//! The state built here never reaches the real NEO feed: its base URL points
//! at a closed local port so feed calls fail fast and exercise the fallback.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use impactsim_lib::NeoClientConfig;

use crate::config::ServiceConfig;
use crate::state::AppState;

/// Seed used by [`test_state`].
pub const TEST_SEED: u64 = 20_250_413;

/// Base URL that refuses connections.
pub const UNREACHABLE_NEO_URL: &str = "http://127.0.0.1:9";

/// NEO configuration pointing at [`UNREACHABLE_NEO_URL`] with short timeouts.
pub fn unreachable_neo_config() -> NeoClientConfig {
    NeoClientConfig {
        timeout: Duration::from_secs(2),
        batch_delay: Duration::ZERO,
        ..NeoClientConfig::default()
    }
    .with_base_url(UNREACHABLE_NEO_URL)
}

/// Seeded state whose NEO feed is unreachable.
pub fn test_state() -> AppState {
    AppState::new(
        ServiceConfig::default().with_seed(TEST_SEED),
        unreachable_neo_config(),
    )
}

/// Generate a unique request ID for testing.
pub fn test_request_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("test-{}", timestamp)
}
