//! Impactsim library entry points.
//!
//! This crate exposes the asteroid impact model (energy, crater, seismic,
//! fireball, tsunami, trajectory, location) and a client for the NASA
//! near-Earth object feed. Higher-level consumers (CLI, HTTP service) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod impact;
pub mod neo;

pub use error::{Error, Result};
pub use impact::{
    simulate_impact, ApproachVector, Continent, ImpactCategory, ImpactEffects, ImpactLocation,
    ImpactParameters, ImpactReport, LocationType, TrajectoryOutcome,
};
pub use neo::{sample_asteroids, Asteroid, NeoClient, NeoClientConfig};
