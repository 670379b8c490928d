//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// Path to fixtures directory used by tests (NEO feed samples).
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Deterministic generator for reproducible simulations.
#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> Pcg64Mcg {
    Pcg64Mcg::seed_from_u64(seed)
}

/// Fixed "today" so date-dependent assertions are stable.
#[allow(dead_code)]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 13).expect("valid reference date")
}
