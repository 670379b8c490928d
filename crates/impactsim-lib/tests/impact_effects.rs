use approx::assert_relative_eq;

use impactsim_lib::impact::constants::{MIN_CRATER_DIAMETER_KM, MIN_FIREBALL_RADIUS_KM};
use impactsim_lib::impact::{
    asteroid_mass_kg, crater_diameter_km, fireball_radius_km, joules_to_megatons,
    kinetic_energy_joules, seismic_magnitude, tsunami_height_m,
};
use impactsim_lib::{ImpactCategory, ImpactEffects, ImpactParameters};

#[test]
fn reference_scenario_matches_closed_form() {
    let params = ImpactParameters::new(1.2, 18.5, 45.0).with_density(3000.0);
    let effects = ImpactEffects::compute(&params);

    assert_relative_eq!(effects.mass_kg, 2.714_336_052_701_58e12, max_relative = 1e-12);
    assert_relative_eq!(effects.energy_joules, 4.644_907_570_185_58e20, max_relative = 1e-12);
    assert_relative_eq!(effects.energy_megatons, 111_015.955_310_362_8, max_relative = 1e-12);
    assert_relative_eq!(effects.crater_diameter_km, 2.532_119_137_140_29, max_relative = 1e-9);
    assert_relative_eq!(effects.seismic_magnitude, 7.976_874_641_131_1, max_relative = 1e-9);
    assert_relative_eq!(effects.fireball_radius_km, 0.234_227_568_393_672, max_relative = 1e-9);
    assert_relative_eq!(effects.tsunami_height_m, 166.595_284_529_877, max_relative = 1e-9);
    assert_eq!(effects.category, ImpactCategory::GlobalCatastrophe);
}

#[test]
fn mass_and_energy_follow_sphere_and_kinetic_formulas() {
    let mass = asteroid_mass_kg(1.0, 1000.0);
    assert_relative_eq!(mass, (4.0 / 3.0) * std::f64::consts::PI * 500f64.powi(3) * 1000.0);

    let energy = kinetic_energy_joules(2.0, 1.0);
    assert_relative_eq!(energy, 1.0e6);
    assert_relative_eq!(joules_to_megatons(4.184e15), 1.0);
}

#[test]
fn non_positive_energy_short_circuits() {
    assert_eq!(crater_diameter_km(0.0, 3000.0), 0.1);
    assert_eq!(fireball_radius_km(0.0), 0.1);
    assert_eq!(seismic_magnitude(0.0), 0.0);
    assert_eq!(tsunami_height_m(0.0, 4000.0), 0.0);

    assert_eq!(crater_diameter_km(-5.0, 3000.0), MIN_CRATER_DIAMETER_KM);
    assert_eq!(fireball_radius_km(-5.0), MIN_FIREBALL_RADIUS_KM);
    assert_eq!(seismic_magnitude(-1.0), 0.0);
    assert_eq!(tsunami_height_m(-5.0, 4000.0), 0.0);

    let effects = ImpactEffects::from_energy(0.0, 0.0, 3000.0, 4000.0);
    assert_eq!(effects.crater_diameter_km, 0.1);
    assert_eq!(effects.fireball_radius_km, 0.1);
    assert_eq!(effects.seismic_magnitude, 0.0);
    assert_eq!(effects.tsunami_height_m, 0.0);
    assert_eq!(effects.category, ImpactCategory::LocalEffects);
}

#[test]
fn complex_crater_coefficient_above_one_thousand_megatons() {
    let below = crater_diameter_km(1000.0, 1000.0);
    let above = crater_diameter_km(1000.000_001, 1000.0);

    assert_relative_eq!(below, 0.07 * 1000f64.powf(0.294), max_relative = 1e-12);
    assert_relative_eq!(above / below, 0.12 / 0.07, max_relative = 1e-6);
}

#[test]
fn crater_never_below_floor_for_valid_inputs() {
    let diameters = [0.000_001, 0.001, 0.01, 0.5, 10.0, 1000.0];
    let velocities = [0.001, 1.0, 20.0, 300.0];
    let densities = [1.0, 3000.0, 8000.0];

    for &d in &diameters {
        for &v in &velocities {
            for &rho in &densities {
                let params = ImpactParameters::new(d, v, 45.0).with_density(rho);
                let effects = ImpactEffects::compute(&params);
                assert!(
                    effects.crater_diameter_km >= 0.1,
                    "crater {} for d={d} v={v} rho={rho}",
                    effects.crater_diameter_km
                );
            }
        }
    }
}

#[test]
fn seismic_magnitude_negative_for_tiny_energy() {
    assert!(seismic_magnitude(10.0) < 0.0);
    assert_relative_eq!(seismic_magnitude(1.0e10), 0.67 * 10.0 - 5.87, max_relative = 1e-12);
}

#[test]
fn category_examples_per_threshold() {
    let cases = [
        (0.005, ImpactCategory::LocalEffects),
        (5.0, ImpactCategory::RegionalDevastation),
        (500.0, ImpactCategory::ContinentalEffects),
        (500_000.0, ImpactCategory::GlobalCatastrophe),
        (2_000_000.0, ImpactCategory::ExtinctionLevelEvent),
    ];

    for (energy, expected) in cases {
        assert_eq!(ImpactCategory::from_energy(energy), expected, "energy {energy}");
    }
}

#[test]
fn category_is_monotonic_in_energy() {
    let mut previous = ImpactCategory::from_energy(0.0);
    let mut energy = 1e-4;
    while energy < 1e8 {
        let current = ImpactCategory::from_energy(energy);
        assert!(current >= previous, "category decreased at {energy}");
        previous = current;
        energy *= 1.5;
    }
    assert_eq!(previous, ImpactCategory::ExtinctionLevelEvent);
}
