//! Client for the NASA near-Earth object (NeoWs) feed.
//!
//! The feed endpoint only serves short date windows, so longer requests are
//! walked in batches and merged before being flattened into [`Asteroid`]
//! summaries sorted by closest approach.

use std::collections::BTreeMap;
use std::env;
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::impact::format::round_to;

const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1";
const BASE_URL_ENV: &str = "NEO_API_BASE_URL";
const API_KEY_ENV: &str = "NASA_API_KEY";
const DEMO_API_KEY: &str = "DEMO_KEY";

/// Longest window, in days past the batch start, that one feed request covers.
pub const FEED_BATCH_DAYS: i64 = 7;

/// Longest look-back the client will walk in one call.
pub const MAX_FEED_DAYS: u32 = 30;

/// Velocity assumed when the feed reports an empty velocity string.
const FALLBACK_VELOCITY_KMS: f64 = 15.0;

/// Connection settings for the NEO feed.
#[derive(Debug, Clone, PartialEq)]
pub struct NeoClientConfig {
    /// API root, without the trailing `/feed`.
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
    /// Pause between consecutive batch requests.
    pub batch_delay: Duration,
}

impl Default for NeoClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEMO_API_KEY.to_string(),
            timeout: Duration::from_secs(10),
            batch_delay: Duration::from_millis(200),
        }
    }
}

impl NeoClientConfig {
    /// Create configuration from environment variables.
    ///
    /// - `NASA_API_KEY`: API key (default: `DEMO_KEY`, heavily rate limited)
    /// - `NEO_API_BASE_URL`: API root (default: `https://api.nasa.gov/neo/rest/v1`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var(BASE_URL_ENV).unwrap_or(defaults.base_url),
            api_key: env::var(API_KEY_ENV)
                .ok()
                .filter(|key| !key.trim().is_empty())
                .unwrap_or(defaults.api_key),
            ..defaults
        }
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether the shared demo key is in use.
    pub fn is_demo_key(&self) -> bool {
        self.api_key == DEMO_API_KEY
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Simplified near-Earth object summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: String,
    pub name: String,
    /// Mean estimated diameter in kilometers.
    pub diameter: f64,
    /// Relative velocity at closest approach in km/s.
    pub velocity: f64,
    /// Miss distance at closest approach in kilometers.
    pub miss_distance: f64,
    pub hazardous: bool,
    pub orbit: String,
    pub url: String,
    pub close_approach_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital_data: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct FeedPage {
    #[serde(default)]
    near_earth_objects: BTreeMap<String, Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct RawNeo {
    id: Value,
    name: String,
    estimated_diameter: RawEstimatedDiameter,
    #[serde(default)]
    close_approach_data: Vec<RawCloseApproach>,
    is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    nasa_jpl_url: Option<String>,
    #[serde(default)]
    orbital_data: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawEstimatedDiameter {
    kilometers: RawDiameterRange,
}

#[derive(Debug, Deserialize)]
struct RawDiameterRange {
    estimated_diameter_min: f64,
    estimated_diameter_max: f64,
}

#[derive(Debug, Default, Deserialize)]
struct RawCloseApproach {
    #[serde(default)]
    close_approach_date: Option<String>,
    #[serde(default)]
    relative_velocity: Option<RawVelocity>,
    #[serde(default)]
    miss_distance: Option<RawMissDistance>,
    #[serde(default)]
    orbiting_body: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawVelocity {
    #[serde(default)]
    kilometers_per_second: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMissDistance {
    #[serde(default)]
    kilometers: Option<String>,
}

/// Blocking HTTP client for the NEO feed.
///
/// Build and use it on a blocking thread; inside an async runtime wrap calls
/// in `spawn_blocking`.
pub struct NeoClient {
    client: Client,
    config: NeoClientConfig,
}

impl NeoClient {
    pub fn new(config: NeoClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("impactsim/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &NeoClientConfig {
        &self.config
    }

    /// Fetch every object approaching within the last `days` days up to `today`.
    ///
    /// Any failed batch aborts the whole fetch; callers decide whether to
    /// fall back to [`sample_asteroids`].
    pub fn fetch_feed(&self, days: u32, today: NaiveDate) -> Result<Vec<Asteroid>> {
        if days > MAX_FEED_DAYS {
            return Err(Error::FeedWindowTooLarge {
                days,
                max: MAX_FEED_DAYS,
            });
        }

        let batches = feed_batches(days, today);
        let mut raw = Vec::new();
        for (index, (start, end)) in batches.iter().enumerate() {
            if index > 0 && !self.config.batch_delay.is_zero() {
                std::thread::sleep(self.config.batch_delay);
            }
            raw.extend(self.fetch_feed_batch(*start, *end)?);
        }

        let asteroids = process_feed_objects(raw);
        info!(
            days,
            batches = batches.len(),
            asteroids = asteroids.len(),
            "NEO feed fetched"
        );
        Ok(asteroids)
    }

    fn fetch_feed_batch(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Value>> {
        let url = self.config.endpoint("feed");
        debug!(%start, %end, url = %url, "requesting NEO feed batch");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(&[
                ("start_date", start.format("%Y-%m-%d").to_string()),
                ("end_date", end.format("%Y-%m-%d").to_string()),
                ("api_key", self.config.api_key.clone()),
            ])
            .send()?
            .error_for_status()?;

        let page: FeedPage = response.json()?;
        Ok(page.near_earth_objects.into_values().flatten().collect())
    }

    /// Fetch the full NeoWs record for one object as raw JSON.
    pub fn fetch_details(&self, asteroid_id: &str) -> Result<Value> {
        if asteroid_id.is_empty() || !asteroid_id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidParameter {
                field: "id",
                message: format!("invalid asteroid id '{}'", asteroid_id),
            });
        }

        let url = self.config.endpoint(&format!("neo/{}", asteroid_id));
        debug!(url = %url, "requesting NEO details");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(&[("api_key", self.config.api_key.as_str())])
            .send()?
            .error_for_status()?;

        Ok(response.json()?)
    }
}

/// Split `[today - days, today]` into inclusive request windows.
///
/// Each window spans at most [`FEED_BATCH_DAYS`] days past its start and the
/// next window starts the day after the previous one ends.
pub fn feed_batches(days: u32, today: NaiveDate) -> Vec<(NaiveDate, NaiveDate)> {
    let mut batches = Vec::new();
    let mut current = today - chrono::Duration::days(i64::from(days));

    while current <= today {
        let batch_end = (current + chrono::Duration::days(FEED_BATCH_DAYS)).min(today);
        batches.push((current, batch_end));
        current = batch_end + chrono::Duration::days(1);
    }

    batches
}

/// Convert raw feed objects into summaries sorted by miss distance.
///
/// Objects that cannot be parsed are logged and skipped.
pub fn process_feed_objects(objects: Vec<Value>) -> Vec<Asteroid> {
    let mut asteroids: Vec<Asteroid> = objects
        .into_iter()
        .filter_map(|object| {
            let label = object
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string();
            match process_feed_object(object) {
                Ok(asteroid) => Some(asteroid),
                Err(e) => {
                    warn!(asteroid = %label, error = %e, "skipping unparseable NEO entry");
                    None
                }
            }
        })
        .collect();

    asteroids.sort_by(|a, b| a.miss_distance.total_cmp(&b.miss_distance));
    asteroids
}

/// Convert one raw feed object into an [`Asteroid`].
pub fn process_feed_object(object: Value) -> Result<Asteroid> {
    let raw: RawNeo = serde_json::from_value(object)?;

    let range = &raw.estimated_diameter.kilometers;
    let diameter = (range.estimated_diameter_min + range.estimated_diameter_max) / 2.0;

    let approach = raw.close_approach_data.into_iter().next().unwrap_or_default();
    let velocity = parse_velocity(
        approach
            .relative_velocity
            .and_then(|v| v.kilometers_per_second)
            .as_deref(),
    )?;
    let miss_distance = match approach.miss_distance.and_then(|m| m.kilometers) {
        Some(km) => parse_number(&km, "miss_distance")?,
        None => 0.0,
    };

    Ok(Asteroid {
        id: id_to_string(&raw.id)?,
        name: raw.name.replace(['(', ')'], "").trim().to_string(),
        diameter: round_to(diameter, 3),
        velocity: round_to(velocity, 2),
        miss_distance,
        hazardous: raw.is_potentially_hazardous_asteroid,
        orbit: approach.orbiting_body.unwrap_or_else(|| "N/A".to_string()),
        url: raw.nasa_jpl_url.unwrap_or_default(),
        close_approach_date: approach.close_approach_date.unwrap_or_default(),
        orbital_data: raw.orbital_data,
    })
}

/// Parse the feed's velocity string. Commas are thousands separators; an
/// empty string means the feed had no estimate.
fn parse_velocity(value: Option<&str>) -> Result<f64> {
    match value {
        None => Ok(0.0),
        Some("") => Ok(FALLBACK_VELOCITY_KMS),
        Some(text) => parse_number(&text.replace(',', ""), "relative_velocity"),
    }
}

fn parse_number(text: &str, field: &str) -> Result<f64> {
    text.trim().parse::<f64>().map_err(|_| Error::NeoFeed {
        message: format!("{} '{}' is not a number", field, text),
    })
}

fn id_to_string(id: &Value) -> Result<String> {
    match id {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(Error::NeoFeed {
            message: format!("unexpected id value {}", other),
        }),
    }
}

/// Offline sample returned when the feed cannot be reached.
pub fn sample_asteroids() -> Vec<Asteroid> {
    vec![
        Asteroid {
            id: "3542519".to_string(),
            name: "2025 Impactor".to_string(),
            diameter: 1.2,
            velocity: 18.5,
            miss_distance: 4_500_000.0,
            hazardous: true,
            orbit: "Earth".to_string(),
            url: "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=3542519".to_string(),
            close_approach_date: "2025-04-13".to_string(),
            orbital_data: None,
        },
        Asteroid {
            id: "2001031".to_string(),
            name: "Apophis".to_string(),
            diameter: 0.37,
            velocity: 30.7,
            miss_distance: 31_000_000.0,
            hazardous: true,
            orbit: "Earth".to_string(),
            url: "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=Apophis".to_string(),
            close_approach_date: "2029-04-13".to_string(),
            orbital_data: None,
        },
    ]
}
