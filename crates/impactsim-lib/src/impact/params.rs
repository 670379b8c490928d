//! Input parameters for the impact model.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::constants::limits::{
    MAX_ANGLE_DEGREES, MAX_DENSITY_KGM3, MAX_DIAMETER_KM, MAX_VELOCITY_KMS,
};
use super::constants::DEFAULT_DENSITY_KGM3;

/// The four scalars describing an incoming asteroid.
///
/// The angle is measured from the horizontal: 0° is a grazing approach and
/// 90° is vertical. The probability, miss-distance and curve formulas take the
/// angle literally in that convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    /// Asteroid diameter in kilometers.
    pub diameter_km: f64,
    /// Velocity relative to Earth in km/s.
    pub velocity_kms: f64,
    /// Entry angle in degrees from the horizontal.
    pub angle_degrees: f64,
    /// Bulk density in kg/m³.
    #[serde(default = "default_density")]
    pub density_kgm3: f64,
}

fn default_density() -> f64 {
    DEFAULT_DENSITY_KGM3
}

impl ImpactParameters {
    /// Create parameters using the default density of 3000 kg/m³.
    pub fn new(diameter_km: f64, velocity_kms: f64, angle_degrees: f64) -> Self {
        Self {
            diameter_km,
            velocity_kms,
            angle_degrees,
            density_kgm3: DEFAULT_DENSITY_KGM3,
        }
    }

    /// Override the density.
    pub fn with_density(mut self, density_kgm3: f64) -> Self {
        self.density_kgm3 = density_kgm3;
        self
    }

    /// Validate all fields against the accepted ranges.
    ///
    /// Fields are checked in request order (diameter, velocity, angle,
    /// density) and the first violation is returned.
    pub fn validate(&self) -> Result<()> {
        check(
            "diameter",
            self.diameter_km,
            self.diameter_km > 0.0 && self.diameter_km <= MAX_DIAMETER_KM,
            "Diameter must be between 0.01 and 1000 km",
        )?;
        check(
            "velocity",
            self.velocity_kms,
            self.velocity_kms > 0.0 && self.velocity_kms <= MAX_VELOCITY_KMS,
            "Velocity must be between 1 and 300 km/s",
        )?;
        check(
            "angle",
            self.angle_degrees,
            (0.0..=MAX_ANGLE_DEGREES).contains(&self.angle_degrees),
            "Angle must be between 0 and 90 degrees",
        )?;
        check(
            "density",
            self.density_kgm3,
            self.density_kgm3 > 0.0 && self.density_kgm3 <= MAX_DENSITY_KGM3,
            "Density must be between 1 and 8000 kg/m³",
        )
    }
}

fn check(field: &'static str, value: f64, in_range: bool, message: &str) -> Result<()> {
    if value.is_finite() && in_range {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            field,
            message: message.to_string(),
        })
    }
}
