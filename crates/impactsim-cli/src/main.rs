mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use impactsim_cli::output::OutputFormat;
use impactsim_lib::neo::MAX_FEED_DAYS;

use crate::commands::asteroids::AsteroidsArgs;
use crate::commands::impact::ImpactArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Asteroid impact estimates and near-Earth object listings")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable ANSI colors in text output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate the effects and trajectory of an asteroid impact.
    Impact {
        /// Asteroid diameter in kilometers.
        #[arg(long)]
        diameter: f64,
        /// Velocity relative to Earth in km/s.
        #[arg(long)]
        velocity: f64,
        /// Entry angle in degrees from the horizontal.
        #[arg(long)]
        angle: f64,
        /// Bulk density in kg/m³.
        #[arg(long, default_value_t = 3000.0)]
        density: f64,
        /// Seed for reproducible trajectory, location and date draws.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List near-Earth objects approaching in the next days.
    Asteroids {
        /// Size of the feed window in days.
        #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(0..=MAX_FEED_DAYS as i64))]
        days: u32,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Impact {
            diameter,
            velocity,
            angle,
            density,
            seed,
        } => commands::impact::handle_impact(
            &ImpactArgs {
                diameter,
                velocity,
                angle,
                density,
                seed,
            },
            cli.format,
            cli.no_color,
        ),
        Command::Asteroids { days } => {
            commands::asteroids::handle_asteroids(&AsteroidsArgs { days }, cli.format, cli.no_color)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
