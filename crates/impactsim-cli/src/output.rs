//! Output formatting for impact reports and asteroid listings.
//!
//! Text renderers build a `String` so they can be tested without a terminal;
//! JSON output reuses the library's serde representation.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::Serialize;

use impactsim_lib::impact::format::{format_with_separators, round_to};
use impactsim_lib::{Asteroid, ImpactParameters, ImpactReport};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Serialize any value as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Render an impact report as aligned text.
pub fn render_impact_text(
    params: &ImpactParameters,
    report: &ImpactReport,
    palette: &ColorPalette,
) -> String {
    let p = palette;
    let effects = &report.effects;
    let trajectory = &report.trajectory_data;
    let location = &report.impact_location;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}Asteroid impact simulation{} {}(physics engine {}){}",
        p.white_bold, p.reset, p.gray, report.physics_engine, p.reset
    );
    let _ = writeln!(
        out,
        "  {:<22}{:.2} km, {:.2} km/s, {:.1}°, {:.0} kg/m³",
        "Input", params.diameter_km, params.velocity_kms, params.angle_degrees, params.density_kgm3
    );

    let _ = writeln!(out, "\n{}Effects{}", p.white_bold, p.reset);
    let _ = writeln!(
        out,
        "  {:<22}{} Mt ({:.3e} J)",
        "Energy",
        format_energy(effects.energy_megatons),
        effects.energy_joules
    );
    let _ = writeln!(out, "  {:<22}{:.2} km", "Crater diameter", effects.crater_diameter_km);
    let _ = writeln!(out, "  {:<22}{:.1}", "Seismic magnitude", effects.seismic_magnitude);
    let _ = writeln!(out, "  {:<22}{:.2} km", "Fireball radius", effects.fireball_radius_km);
    let _ = writeln!(out, "  {:<22}{:.1} m", "Tsunami height", effects.tsunami_height_m);
    let _ = writeln!(
        out,
        "  {:<22}{}{}{}",
        "Severity",
        p.severity(effects.category),
        effects.category.description(),
        p.reset
    );

    let _ = writeln!(out, "\n{}Trajectory{}", p.white_bold, p.reset);
    let outcome_color = if report.impact_occurred { p.red } else { p.green };
    let _ = writeln!(
        out,
        "  {:<22}{}{}{}",
        "Outcome", outcome_color, report.category, p.reset
    );
    let _ = writeln!(
        out,
        "  {:<22}{:.1}%",
        "Impact probability", trajectory.impact_probability
    );
    let _ = writeln!(
        out,
        "  {:<22}{} km",
        "Gravitational reach",
        format_with_separators(trajectory.gravitational_influence_km)
    );
    let vector = &trajectory.approach_vector;
    let _ = writeln!(
        out,
        "  {:<22}({:.3}, {:.3}, {:.3}) x{:.2}",
        "Approach vector", vector.x, vector.y, vector.z, vector.speed_multiplier
    );

    let _ = writeln!(out, "\n{}Location{}", p.white_bold, p.reset);
    let _ = writeln!(
        out,
        "  {:<22}{:.2}, {:.2} ({:?}, {})",
        "Coordinates",
        location.latitude,
        location.longitude,
        location.location_type,
        continent_name(report)
    );
    let _ = writeln!(
        out,
        "  {:<22}{}{}{}",
        "Projected date", p.cyan, report.impact_date, p.reset
    );

    out
}

/// Render an asteroid listing as a table.
pub fn render_asteroids_text(asteroids: &[Asteroid], palette: &ColorPalette) -> String {
    let p = palette;
    let mut out = String::new();

    if asteroids.is_empty() {
        out.push_str("No near-Earth objects in the requested window.\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{}{:<24} {:>10} {:>10} {:>16} {:>9}  {}{}",
        p.white_bold,
        "Name",
        "Diam (km)",
        "Vel (km/s)",
        "Miss (km)",
        "Hazardous",
        "Approach",
        p.reset
    );
    for asteroid in asteroids {
        let (hazard_color, hazard) = if asteroid.hazardous {
            (p.red, "yes")
        } else {
            (p.gray, "no")
        };
        let _ = writeln!(
            out,
            "{:<24} {:>10.3} {:>10.2} {:>16} {}{:>9}{}  {}",
            truncate(&asteroid.name, 24),
            asteroid.diameter,
            asteroid.velocity,
            format_with_separators(asteroid.miss_distance),
            hazard_color,
            hazard,
            p.reset,
            asteroid.close_approach_date
        );
    }
    let _ = writeln!(out, "\n{} objects", asteroids.len());

    out
}

/// Megatons with separators for large yields and decimals for small ones.
fn format_energy(megatons: f64) -> String {
    if megatons.abs() >= 1000.0 {
        format_with_separators(megatons)
    } else {
        format!("{}", round_to(megatons, 2))
    }
}

fn continent_name(report: &ImpactReport) -> String {
    serde_json::to_value(report.impact_location.continent)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("{:?}", report.impact_location.continent))
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(width - 1).collect();
        short.push('…');
        short
    }
}
