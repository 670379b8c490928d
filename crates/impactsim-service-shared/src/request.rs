//! Request types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use impactsim_lib::impact::constants::DEFAULT_DENSITY_KGM3;
use impactsim_lib::neo::MAX_FEED_DAYS;
use impactsim_lib::ImpactParameters;

use crate::ProblemDetails;

/// Look-back window used by `/api/asteroids` when `days` is omitted.
pub const DEFAULT_FEED_DAYS: u32 = 7;

/// Validation trait for request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Body of `POST /api/calculate-impact`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactRequest {
    /// Asteroid diameter in kilometers.
    pub diameter: f64,

    /// Velocity in km/s.
    pub velocity: f64,

    /// Entry angle in degrees from the horizontal.
    pub angle: f64,

    /// Bulk density in kg/m³.
    #[serde(default = "default_density")]
    pub density: f64,
}

fn default_density() -> f64 {
    DEFAULT_DENSITY_KGM3
}

impl ImpactRequest {
    /// Model parameters for this request.
    pub fn to_params(&self) -> ImpactParameters {
        ImpactParameters::new(self.diameter, self.velocity, self.angle).with_density(self.density)
    }
}

impl Validate for ImpactRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        self.to_params().validate().map_err(|e| {
            let problem = ProblemDetails::bad_request(e.to_string(), request_id);
            Box::new(match e.field() {
                Some(field) => problem.with_field(field),
                None => problem,
            })
        })
    }
}

/// Query string of `GET /api/asteroids`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidsQuery {
    /// Number of days to look back from today.
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    DEFAULT_FEED_DAYS
}

impl Default for AsteroidsQuery {
    fn default() -> Self {
        Self {
            days: DEFAULT_FEED_DAYS,
        }
    }
}

impl Validate for AsteroidsQuery {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if self.days > MAX_FEED_DAYS {
            return Err(Box::new(
                ProblemDetails::bad_request(
                    format!("The 'days' parameter must be at most {}", MAX_FEED_DAYS),
                    request_id,
                )
                .with_field("days"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(diameter: f64, velocity: f64, angle: f64) -> ImpactRequest {
        ImpactRequest {
            diameter,
            velocity,
            angle,
            density: 3000.0,
        }
    }

    #[test]
    fn test_impact_request_valid() {
        assert!(request(1.2, 18.5, 45.0).validate("req-1").is_ok());
        assert!(request(1000.0, 300.0, 90.0).validate("req-1").is_ok());
        assert!(request(0.5, 20.0, 0.0).validate("req-1").is_ok());
    }

    #[test]
    fn test_impact_request_density_defaults() {
        let req: ImpactRequest =
            serde_json::from_str(r#"{"diameter":1.2,"velocity":18.5,"angle":45}"#).unwrap();
        assert_eq!(req.density, 3000.0);
        assert_eq!(req.to_params().density_kgm3, 3000.0);
    }

    #[test]
    fn test_impact_request_rejects_each_field() {
        let cases = [
            (request(0.0, 20.0, 45.0), "diameter", "Diameter must be between 0.01 and 1000 km"),
            (request(1.0, 301.0, 45.0), "velocity", "Velocity must be between 1 and 300 km/s"),
            (request(1.0, 20.0, -1.0), "angle", "Angle must be between 0 and 90 degrees"),
            (
                ImpactRequest {
                    density: 9000.0,
                    ..request(1.0, 20.0, 45.0)
                },
                "density",
                "Density must be between 1 and 8000 kg/m³",
            ),
        ];

        for (req, field, message) in cases {
            let problem = req.validate("req-bad").unwrap_err();
            assert_eq!(problem.status, 400);
            assert_eq!(problem.field.as_deref(), Some(field));
            assert_eq!(problem.detail.as_deref(), Some(message));
            assert_eq!(problem.instance.as_deref(), Some("req-bad"));
        }
    }

    #[test]
    fn test_asteroids_query_defaults() {
        let query: AsteroidsQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.days, 7);
        assert!(query.validate("req").is_ok());
    }

    #[test]
    fn test_asteroids_query_limit() {
        assert!(AsteroidsQuery { days: 30 }.validate("req").is_ok());
        let problem = AsteroidsQuery { days: 31 }.validate("req").unwrap_err();
        assert_eq!(problem.field.as_deref(), Some("days"));
    }
}
