//! Asteroid impact model.
//!
//! This module is organized into focused submodules:
//!
//! - [`params`] - Validated input scalars
//! - [`effects`] - Energy, crater, seismic, fireball and tsunami estimates
//! - [`trajectory`] - Impact probability, miss distance and approach vector
//! - [`location`] - Randomized impact site
//! - [`constants`] - Physical constants and thresholds
//! - [`format`] - Rounding and number formatting for presentation
//!
//! The model is a pure function of its inputs and a caller-supplied random
//! generator. Pass a seeded generator to reproduce a report exactly.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use impactsim_lib::{simulate_impact, ImpactParameters};
//!
//! let params = ImpactParameters::new(1.2, 18.5, 45.0);
//! params.validate().unwrap();
//!
//! let today = NaiveDate::from_ymd_opt(2025, 4, 13).unwrap();
//! let report = simulate_impact(&params, today, &mut rand::thread_rng());
//! assert_eq!(report.effects.category.label(), "Global catastrophe");
//! ```

pub mod constants;
pub mod effects;
pub mod format;
pub mod location;
pub mod params;
pub mod trajectory;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use effects::{
    asteroid_mass_kg, crater_diameter_km, fireball_radius_km, joules_to_megatons,
    kinetic_energy_joules, seismic_magnitude, tsunami_height_m, ImpactCategory, ImpactEffects,
};
pub use location::{impact_location, Continent, ImpactLocation, LandRegion, LocationType};
pub use params::ImpactParameters;
pub use trajectory::{
    approach_vector, gravitational_influence_m, impact_probability, miss_distance_km,
    simulate_trajectory, trajectory_curve, ApproachVector, TrajectoryOutcome,
};

use constants::MAX_IMPACT_DATE_OFFSET_DAYS;
use format::{format_with_separators, round_to};

/// Identifier of the model revision, reported alongside every result.
pub const PHYSICS_ENGINE: &str = "advanced_v2";

/// Complete result of one impact simulation.
///
/// Effect fields are flattened to the top level. `category` depends on the
/// outcome: the energy label when the asteroid hits, a miss message
/// otherwise. The energy-based classification is always available as
/// `severity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    pub impact_occurred: bool,
    #[serde(flatten)]
    pub effects: ImpactEffects,
    pub category: String,
    pub trajectory_data: TrajectoryOutcome,
    pub impact_location: ImpactLocation,
    pub impact_date: NaiveDate,
    pub approach_vector: ApproachVector,
    pub physics_engine: String,
}

/// Simulate an impact.
///
/// `params` must already be validated; the model itself never fails.
/// Random draws happen in a fixed order (trajectory, location, date) so that
/// a seeded generator yields bit-identical reports.
pub fn simulate_impact<R: Rng + ?Sized>(
    params: &ImpactParameters,
    today: NaiveDate,
    rng: &mut R,
) -> ImpactReport {
    let effects = ImpactEffects::compute(params);
    let trajectory = simulate_trajectory(params, effects.mass_kg, rng);
    let location = impact_location(rng);
    let impact_date = impact_date(today, rng);

    let category = if trajectory.will_impact {
        effects.category.label().to_string()
    } else {
        miss_message(trajectory.miss_distance_km)
    };

    debug!(
        diameter_km = params.diameter_km,
        velocity_kms = params.velocity_kms,
        angle_degrees = params.angle_degrees,
        energy_megatons = effects.energy_megatons,
        will_impact = trajectory.will_impact,
        continent = ?location.continent,
        "impact simulated"
    );

    ImpactReport {
        impact_occurred: trajectory.will_impact,
        approach_vector: trajectory.approach_vector,
        effects,
        category,
        trajectory_data: trajectory,
        impact_location: location,
        impact_date,
        physics_engine: PHYSICS_ENGINE.to_string(),
    }
}

/// Projected impact date between 1 and 365 days after `today`.
pub fn impact_date<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> NaiveDate {
    let offset = rng.gen_range(1..=MAX_IMPACT_DATE_OFFSET_DAYS);
    today + Duration::days(offset)
}

/// Category text reported when the asteroid misses.
pub fn miss_message(miss_distance_km: f64) -> String {
    format!(
        "No impact - Asteroid will miss Earth by {} km",
        format_with_separators(round_to(miss_distance_km, 2))
    )
}
