//! Service configuration read from the environment.

use std::env;

/// Port the service listens on when `SERVICE_PORT` is unset.
pub const DEFAULT_SERVICE_PORT: u16 = 5001;

const PORT_ENV: &str = "SERVICE_PORT";
const SEED_ENV: &str = "IMPACT_RNG_SEED";

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `SERVICE_PORT` is not a valid port number.
    InvalidPort(String),

    /// `IMPACT_RNG_SEED` is not an unsigned 64-bit integer.
    InvalidSeed(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPort(value) => write!(f, "invalid {} '{}'", PORT_ENV, value),
            Self::InvalidSeed(value) => write!(f, "invalid {} '{}'", SEED_ENV, value),
        }
    }
}

impl std::error::Error for ConfigError {}

/// HTTP service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub port: u16,
    /// Fixed seed for impact simulations. When set, identical requests
    /// produce identical reports.
    pub rng_seed: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVICE_PORT,
            rng_seed: None,
        }
    }
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    ///
    /// - `SERVICE_PORT`: HTTP port (default: 5001)
    /// - `IMPACT_RNG_SEED`: Optional simulation seed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var(PORT_ENV).ok().as_deref(),
            env::var(SEED_ENV).ok().as_deref(),
        )
    }

    /// Build configuration from raw variable values. Blank values count as unset.
    pub fn from_values(port: Option<&str>, seed: Option<&str>) -> Result<Self, ConfigError> {
        let port = match non_blank(port) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value.to_string()))?,
            None => DEFAULT_SERVICE_PORT,
        };

        let rng_seed = non_blank(seed)
            .map(|value| {
                value
                    .parse()
                    .map_err(|_| ConfigError::InvalidSeed(value.to_string()))
            })
            .transpose()?;

        Ok(Self { port, rng_seed })
    }

    /// Set a fixed simulation seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
