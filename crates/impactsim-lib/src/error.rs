use thiserror::Error;

/// Convenient result alias for the impactsim library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an impact parameter is missing its valid range.
    ///
    /// `field` uses the public request name (`diameter`, `velocity`, `angle`,
    /// `density`) so boundary layers can report it verbatim.
    #[error("{message}")]
    InvalidParameter {
        field: &'static str,
        message: String,
    },

    /// Raised when the NEO feed returned a payload that could not be used.
    #[error("invalid NEO feed payload: {message}")]
    NeoFeed { message: String },

    /// Raised when a feed window is requested that the client refuses to walk.
    #[error("feed window of {days} days exceeds the maximum of {max} days")]
    FeedWindowTooLarge { days: u32, max: u32 },

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Field name attached to a validation error, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}
