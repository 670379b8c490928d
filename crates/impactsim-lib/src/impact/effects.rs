//! Energy and surface-effect estimates for an impact.
//!
//! Scaling laws follow the simplified forms popularised by the Earth Impact
//! Effects Program (Marcus, Melosh and Collins). Every function is total over
//! validated input: non-positive energies short-circuit to fixed values
//! instead of feeding fractional powers or logarithms.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{
    COMPLEX_CRATER_COEFFICIENT, COMPLEX_CRATER_THRESHOLD_MT, DEFAULT_OCEAN_DEPTH_M,
    JOULES_PER_MEGATON, MIN_CRATER_DIAMETER_KM, MIN_FIREBALL_RADIUS_KM, REFERENCE_OCEAN_DEPTH_M,
    SIMPLE_CRATER_COEFFICIENT,
};
use super::format::{serialize_one_place, serialize_two_places};
use super::params::ImpactParameters;

/// Qualitative severity of an impact, ordered by energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImpactCategory {
    #[serde(rename = "Local effects")]
    LocalEffects,
    #[serde(rename = "Regional devastation")]
    RegionalDevastation,
    #[serde(rename = "Continental effects")]
    ContinentalEffects,
    #[serde(rename = "Global catastrophe")]
    GlobalCatastrophe,
    #[serde(rename = "Extinction-level event")]
    ExtinctionLevelEvent,
}

impl ImpactCategory {
    /// Classify an impact by its energy in megatons of TNT.
    ///
    /// Thresholds are exclusive upper bounds: 0.01, 10, 1000 and 1,000,000 Mt.
    pub fn from_energy(energy_megatons: f64) -> Self {
        if energy_megatons < 0.01 {
            ImpactCategory::LocalEffects
        } else if energy_megatons < 10.0 {
            ImpactCategory::RegionalDevastation
        } else if energy_megatons < 1000.0 {
            ImpactCategory::ContinentalEffects
        } else if energy_megatons < 1_000_000.0 {
            ImpactCategory::GlobalCatastrophe
        } else {
            ImpactCategory::ExtinctionLevelEvent
        }
    }

    /// Short label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ImpactCategory::LocalEffects => "Local effects",
            ImpactCategory::RegionalDevastation => "Regional devastation",
            ImpactCategory::ContinentalEffects => "Continental effects",
            ImpactCategory::GlobalCatastrophe => "Global catastrophe",
            ImpactCategory::ExtinctionLevelEvent => "Extinction-level event",
        }
    }

    /// Label with a short summary of the expected consequences.
    pub fn description(&self) -> &'static str {
        match self {
            ImpactCategory::LocalEffects => "Local effects (Fireball, minor damage)",
            ImpactCategory::RegionalDevastation => {
                "Regional devastation (Large crater, widespread damage)"
            }
            ImpactCategory::ContinentalEffects => {
                "Continental effects (Massive crater, global climate effects)"
            }
            ImpactCategory::GlobalCatastrophe => "Global catastrophe (Mass extinction threshold)",
            ImpactCategory::ExtinctionLevelEvent => {
                "Extinction-level event (Planetary-scale destruction)"
            }
        }
    }
}

impl fmt::Display for ImpactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Energy and surface effects of an impact.
///
/// Values are exact; display fields are rounded only when serialized. The
/// energy-based category serializes as `severity` so that reports can carry
/// their own outcome-dependent `category` string alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEffects {
    #[serde(serialize_with = "serialize_two_places")]
    pub energy_megatons: f64,
    #[serde(serialize_with = "serialize_two_places")]
    pub crater_diameter_km: f64,
    #[serde(serialize_with = "serialize_one_place")]
    pub seismic_magnitude: f64,
    #[serde(serialize_with = "serialize_two_places")]
    pub fireball_radius_km: f64,
    #[serde(serialize_with = "serialize_one_place")]
    pub tsunami_height_m: f64,
    #[serde(rename = "severity")]
    pub category: ImpactCategory,
    pub mass_kg: f64,
    pub energy_joules: f64,
}

impl ImpactEffects {
    /// Compute all effects assuming the default ocean depth.
    pub fn compute(params: &ImpactParameters) -> Self {
        Self::compute_with_ocean_depth(params, DEFAULT_OCEAN_DEPTH_M)
    }

    /// Compute all effects for an impact into water of the given depth.
    pub fn compute_with_ocean_depth(params: &ImpactParameters, ocean_depth_m: f64) -> Self {
        let mass_kg = asteroid_mass_kg(params.diameter_km, params.density_kgm3);
        let energy_joules = kinetic_energy_joules(mass_kg, params.velocity_kms);
        Self::from_energy(energy_joules, mass_kg, params.density_kgm3, ocean_depth_m)
    }

    /// Derive effects from an already-known kinetic energy.
    pub fn from_energy(
        energy_joules: f64,
        mass_kg: f64,
        density_kgm3: f64,
        ocean_depth_m: f64,
    ) -> Self {
        let energy_megatons = joules_to_megatons(energy_joules);

        Self {
            energy_megatons,
            crater_diameter_km: crater_diameter_km(energy_megatons, density_kgm3),
            seismic_magnitude: seismic_magnitude(energy_joules),
            fireball_radius_km: fireball_radius_km(energy_megatons),
            tsunami_height_m: tsunami_height_m(energy_megatons, ocean_depth_m),
            category: ImpactCategory::from_energy(energy_megatons),
            mass_kg,
            energy_joules,
        }
    }
}

/// Mass of a spherical asteroid in kilograms.
pub fn asteroid_mass_kg(diameter_km: f64, density_kgm3: f64) -> f64 {
    let radius_m = diameter_km * 1000.0 / 2.0;
    let volume_m3 = (4.0 / 3.0) * PI * radius_m.powi(3);
    volume_m3 * density_kgm3
}

/// Kinetic energy `½mv²` in joules for a velocity given in km/s.
pub fn kinetic_energy_joules(mass_kg: f64, velocity_kms: f64) -> f64 {
    let velocity_ms = velocity_kms * 1000.0;
    0.5 * mass_kg * velocity_ms.powi(2)
}

/// Convert joules to megatons of TNT.
pub fn joules_to_megatons(energy_joules: f64) -> f64 {
    energy_joules / JOULES_PER_MEGATON
}

/// Final crater diameter in kilometers, never below 0.1 km.
///
/// Energies above 1000 Mt use the complex-crater coefficient.
pub fn crater_diameter_km(energy_megatons: f64, density_kgm3: f64) -> f64 {
    if energy_megatons <= 0.0 {
        return MIN_CRATER_DIAMETER_KM;
    }

    let coefficient = if energy_megatons > COMPLEX_CRATER_THRESHOLD_MT {
        COMPLEX_CRATER_COEFFICIENT
    } else {
        SIMPLE_CRATER_COEFFICIENT
    };

    let diameter =
        coefficient * energy_megatons.powf(0.294) * (density_kgm3 / 1000.0).powf(-1.0 / 3.0);
    diameter.max(MIN_CRATER_DIAMETER_KM)
}

/// Richter-like magnitude of the seismic shock. May be negative for tiny energies.
pub fn seismic_magnitude(energy_joules: f64) -> f64 {
    if energy_joules <= 0.0 {
        return 0.0;
    }
    0.67 * energy_joules.log10() - 5.87
}

/// Radius of the thermal fireball in kilometers.
pub fn fireball_radius_km(energy_megatons: f64) -> f64 {
    if energy_megatons <= 0.0 {
        return MIN_FIREBALL_RADIUS_KM;
    }
    0.002 * energy_megatons.powf(0.41)
}

/// Potential tsunami wave height in meters for an ocean impact.
pub fn tsunami_height_m(energy_megatons: f64, ocean_depth_m: f64) -> f64 {
    if energy_megatons <= 0.0 {
        return 0.0;
    }
    0.5 * energy_megatons.sqrt() * (ocean_depth_m / REFERENCE_OCEAN_DEPTH_M).sqrt()
}
