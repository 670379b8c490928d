//! Physical constants and model thresholds shared by the impact calculations.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Newtonian gravitational constant (m³⋅kg⁻¹⋅s⁻²).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Earth mass in kilograms.
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Earth escape velocity in meters per second.
pub const EARTH_ESCAPE_VELOCITY_MS: f64 = 11_200.0;

/// Joules released by one megaton of TNT.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Fraction of Earth's surface covered by ocean.
pub const OCEAN_FRACTION: f64 = 0.71;

/// Density assumed when the caller does not supply one (stony asteroid).
pub const DEFAULT_DENSITY_KGM3: f64 = 3000.0;

/// Ocean depth used for tsunami estimates when no depth is known.
pub const DEFAULT_OCEAN_DEPTH_M: f64 = 4000.0;

/// Depth at which the tsunami depth factor equals one.
pub const REFERENCE_OCEAN_DEPTH_M: f64 = 4000.0;

/// Smallest crater diameter the model reports.
pub const MIN_CRATER_DIAMETER_KM: f64 = 0.1;

/// Fireball radius reported for non-positive energies.
pub const MIN_FIREBALL_RADIUS_KM: f64 = 0.1;

/// Energy above which the complex-crater coefficient applies.
pub const COMPLEX_CRATER_THRESHOLD_MT: f64 = 1000.0;

/// Scaling coefficient for simple craters.
pub const SIMPLE_CRATER_COEFFICIENT: f64 = 0.07;

/// Scaling coefficient for complex craters.
pub const COMPLEX_CRATER_COEFFICIENT: f64 = 0.12;

/// Floor applied to the relative velocity in the gravitational focusing term.
pub const MIN_RELATIVE_VELOCITY_MS: f64 = 1000.0;

/// Approach vectors shorter than this are replaced by the unit x axis.
pub const VECTOR_EPSILON: f64 = 1e-12;

/// Upper bound for the projected impact date offset.
pub const MAX_IMPACT_DATE_OFFSET_DAYS: i64 = 365;

/// Validation limits accepted at the API boundary.
pub mod limits {
    pub const MAX_DIAMETER_KM: f64 = 1000.0;
    pub const MAX_VELOCITY_KMS: f64 = 300.0;
    pub const MAX_ANGLE_DEGREES: f64 = 90.0;
    pub const MAX_DENSITY_KGM3: f64 = 8000.0;
}
