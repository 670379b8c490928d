//! Trajectory heuristics: impact probability, miss distance, approach vector.
//!
//! None of this is orbital mechanics. The formulas are deliberately simple
//! heuristics with randomized variance, and each random draw comes from the
//! caller-supplied generator so a seeded generator reproduces a run exactly.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::constants::{
    EARTH_ESCAPE_VELOCITY_MS, EARTH_MASS_KG, EARTH_RADIUS_KM, GRAVITATIONAL_CONSTANT,
    MIN_RELATIVE_VELOCITY_MS, VECTOR_EPSILON,
};
use super::format::{serialize_one_place, serialize_two_places};
use super::params::ImpactParameters;

/// Threshold the variance-weighted probability must exceed for an impact.
const IMPACT_DECISION_THRESHOLD: f64 = 0.5;

/// Unit direction of approach plus a speed multiplier for visualisation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApproachVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub speed_multiplier: f64,
}

impl ApproachVector {
    /// Length of the direction component.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Outcome of the trajectory heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryOutcome {
    pub will_impact: bool,
    /// Impact probability as a percentage (5–95).
    #[serde(serialize_with = "serialize_one_place")]
    pub impact_probability: f64,
    /// Closest approach in kilometers; zero when the asteroid hits.
    #[serde(serialize_with = "serialize_two_places")]
    pub miss_distance_km: f64,
    pub approach_vector: ApproachVector,
    #[serde(serialize_with = "serialize_two_places")]
    pub gravitational_influence_km: f64,
    pub trajectory_curve: f64,
}

/// Run the full trajectory heuristic for an asteroid of the given mass.
///
/// Draw order: orbital variance, miss jitter (only on a miss), approach
/// vector components, curve jitter.
pub fn simulate_trajectory<R: Rng + ?Sized>(
    params: &ImpactParameters,
    mass_kg: f64,
    rng: &mut R,
) -> TrajectoryOutcome {
    let velocity_ms = params.velocity_kms * 1000.0;
    let gravitational_influence = gravitational_influence_m(velocity_ms, mass_kg);

    let probability =
        impact_probability(params.angle_degrees, params.velocity_kms, params.diameter_km);
    let orbital_variance = rng.gen_range(0.8..1.2);
    let will_impact = probability * orbital_variance > IMPACT_DECISION_THRESHOLD;

    let miss_distance_km = if will_impact {
        0.0
    } else {
        miss_distance_km(
            params.angle_degrees,
            params.velocity_kms,
            gravitational_influence,
            rng,
        )
    };

    let approach_vector = approach_vector(params.angle_degrees, params.velocity_kms, rng);
    let trajectory_curve = trajectory_curve(params.angle_degrees, params.velocity_kms, rng);

    TrajectoryOutcome {
        will_impact,
        impact_probability: probability * 100.0,
        miss_distance_km,
        approach_vector,
        gravitational_influence_km: gravitational_influence / 1000.0,
        trajectory_curve,
    }
}

/// Heuristic impact probability in `[0.05, 0.95]`.
pub fn impact_probability(angle_degrees: f64, velocity_kms: f64, diameter_km: f64) -> f64 {
    let angle_factor = 1.0 - (angle_degrees / 90.0) * 0.8;
    let velocity_factor = (velocity_kms / 30.0).min(1.5);
    let size_factor = (diameter_km / 5.0).min(2.0);

    (angle_factor * velocity_factor * size_factor * 0.6).clamp(0.05, 0.95)
}

/// Gravitational focusing distance in meters.
///
/// The relative velocity is floored at 1 km/s so slow objects do not blow up
/// the division.
pub fn gravitational_influence_m(velocity_ms: f64, mass_kg: f64) -> f64 {
    let relative_velocity = velocity_ms.max(MIN_RELATIVE_VELOCITY_MS);
    let influence =
        GRAVITATIONAL_CONSTANT * EARTH_MASS_KG * mass_kg / relative_velocity.powi(2);
    influence.sqrt() * (EARTH_ESCAPE_VELOCITY_MS / relative_velocity)
}

/// Miss distance in kilometers for an asteroid that does not hit.
///
/// Velocities above 70 km/s make the velocity term negative and the sum is
/// not clamped, so very fast shallow passes can report negative distances.
pub fn miss_distance_km<R: Rng + ?Sized>(
    angle_degrees: f64,
    velocity_kms: f64,
    gravitational_influence_m: f64,
    rng: &mut R,
) -> f64 {
    let base_miss = (angle_degrees / 90.0) * EARTH_RADIUS_KM * 3.0;
    let grav_effect = gravitational_influence_m / 1000.0;
    let velocity_effect = (70.0 - velocity_kms) / 70.0 * EARTH_RADIUS_KM;

    base_miss + grav_effect + velocity_effect * rng.gen_range(0.5..2.0)
}

/// Randomized unit approach vector.
pub fn approach_vector<R: Rng + ?Sized>(
    angle_degrees: f64,
    velocity_kms: f64,
    rng: &mut R,
) -> ApproachVector {
    let angle_rad = angle_degrees.to_radians();
    let (sin, cos) = angle_rad.sin_cos();

    let x = cos * rng.gen_range(0.5..1.5);
    let y = sin * rng.gen_range(0.3..1.2);
    let z = cos * sin * rng.gen_range(0.4..1.6);
    let speed_multiplier = (velocity_kms / 20.0).min(3.0);

    let magnitude = (x * x + y * y + z * z).sqrt();
    if magnitude < VECTOR_EPSILON {
        return ApproachVector {
            x: 1.0,
            y: 0.0,
            z: 0.0,
            speed_multiplier,
        };
    }

    ApproachVector {
        x: x / magnitude,
        y: y / magnitude,
        z: z / magnitude,
        speed_multiplier,
    }
}

/// Unitless curvature of the rendered trajectory. Shallow, slow entries curve most.
pub fn trajectory_curve<R: Rng + ?Sized>(angle_degrees: f64, velocity_kms: f64, rng: &mut R) -> f64 {
    let curve_intensity = (90.0 - angle_degrees) / 90.0;
    let velocity_factor = 50.0 / velocity_kms.max(5.0);
    curve_intensity * velocity_factor * rng.gen_range(0.8..1.2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_probability_clamped_low() {
        // Grazing, slow, tiny: raw product is far below the floor.
        assert_eq!(impact_probability(90.0, 1.0, 0.01), 0.05);
    }

    #[test]
    fn test_probability_clamped_high() {
        // Vertical-in-formula (angle 0), fast, huge: raw product is 1.8.
        assert_eq!(impact_probability(0.0, 300.0, 1000.0), 0.95);
    }

    #[test]
    fn test_probability_midrange() {
        // angle 45 -> 0.6, velocity 18 -> 0.6, diameter 2.5 -> 0.5; * 0.6
        let p = impact_probability(45.0, 18.0, 2.5);
        assert!((p - 0.108).abs() < 1e-12);
    }

    #[test]
    fn test_gravitational_influence_floors_velocity() {
        let slow = gravitational_influence_m(10.0, 1.0e12);
        let floor = gravitational_influence_m(1000.0, 1.0e12);
        assert_eq!(slow, floor);
    }

    #[test]
    fn test_curve_zero_for_vertical_formula_angle() {
        let mut rng = StepRng::new(0, 1);
        assert_eq!(trajectory_curve(90.0, 20.0, &mut rng), 0.0);
    }

    #[test]
    fn test_speed_multiplier_capped() {
        let mut rng = StepRng::new(0, 1);
        assert_eq!(approach_vector(45.0, 100.0, &mut rng).speed_multiplier, 3.0);
        assert_eq!(approach_vector(45.0, 10.0, &mut rng).speed_multiplier, 0.5);
    }

    #[test]
    fn test_vector_normalized_at_extreme_angles() {
        let mut rng = StepRng::new(u64::MAX / 3, 7);
        for angle in [0.0, 90.0] {
            let v = approach_vector(angle, 20.0, &mut rng);
            assert!((v.magnitude() - 1.0).abs() < 1e-9, "angle {angle}");
        }
    }
}
