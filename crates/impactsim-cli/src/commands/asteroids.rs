//! Asteroids command handler.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use impactsim_cli::output::{render_asteroids_text, to_json, OutputFormat};
use impactsim_lib::{sample_asteroids, Asteroid, NeoClient, NeoClientConfig};

use super::palette;

/// Arguments of the `asteroids` subcommand.
#[derive(Debug, Clone, Copy)]
pub struct AsteroidsArgs {
    pub days: u32,
}

#[derive(Serialize)]
struct AsteroidListing<'a> {
    asteroids: &'a [Asteroid],
    count: usize,
    data_source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Fetch the feed and print it, falling back to the bundled sample when the
/// feed is unavailable.
pub fn handle_asteroids(args: &AsteroidsArgs, format: OutputFormat, no_color: bool) -> Result<()> {
    let config = NeoClientConfig::from_env();
    if config.is_demo_key() {
        warn!("NASA_API_KEY not set; using the rate-limited demo key");
    }

    let (asteroids, data_source, error) = match fetch(config, args.days) {
        Ok(list) => (list, "NASA NEO API", None),
        Err(err) => {
            eprintln!("warning: NEO feed unavailable ({}); showing sample data", err);
            (sample_asteroids(), "Sample Data", Some(err.to_string()))
        }
    };

    match format {
        OutputFormat::Json => {
            let listing = AsteroidListing {
                count: asteroids.len(),
                asteroids: &asteroids,
                data_source,
                error,
            };
            let json = to_json(&listing).context("failed to serialize asteroid listing")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            print!("{}", render_asteroids_text(&asteroids, &palette(no_color)));
        }
    }

    Ok(())
}

fn fetch(config: NeoClientConfig, days: u32) -> impactsim_lib::Result<Vec<Asteroid>> {
    let client = NeoClient::new(config)?;
    client.fetch_feed(days, Utc::now().date_naive())
}
