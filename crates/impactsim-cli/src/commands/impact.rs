//! Impact command handler.

use anyhow::{Context, Result};
use chrono::Utc;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::debug;

use impactsim_cli::output::{render_impact_text, to_json, OutputFormat};
use impactsim_lib::{simulate_impact, ImpactParameters};

use super::palette;

/// Arguments of the `impact` subcommand.
#[derive(Debug, Clone, Copy)]
pub struct ImpactArgs {
    pub diameter: f64,
    pub velocity: f64,
    pub angle: f64,
    pub density: f64,
    pub seed: Option<u64>,
}

/// Validate the inputs, run one simulation and print the report.
pub fn handle_impact(args: &ImpactArgs, format: OutputFormat, no_color: bool) -> Result<()> {
    let params = ImpactParameters::new(args.diameter, args.velocity, args.angle)
        .with_density(args.density);
    params.validate()?;

    let mut rng = match args.seed {
        Some(seed) => {
            debug!(seed, "using seeded generator");
            Pcg64Mcg::seed_from_u64(seed)
        }
        None => Pcg64Mcg::from_entropy(),
    };
    let report = simulate_impact(&params, Utc::now().date_naive(), &mut rng);

    match format {
        OutputFormat::Json => {
            let json = to_json(&report).context("failed to serialize impact report")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            print!("{}", render_impact_text(&params, &report, &palette(no_color)));
        }
    }

    Ok(())
}
