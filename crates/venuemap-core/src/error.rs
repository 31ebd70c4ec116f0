use thiserror::Error;

/// Errors raised while loading, filtering or looking up venues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VenueError {
    /// A provider record could not be turned into a [`crate::VenueRecord`].
    #[error("malformed venue {}: {reason}", .venue_id.as_deref().unwrap_or("<unknown>"))]
    MalformedVenue {
        venue_id: Option<String>,
        reason: String,
    },

    /// Two records in the same load share an id.
    #[error("duplicate venue id in provider response: {id}")]
    DuplicateVenue { id: String },

    #[error("venue not found: {id}")]
    NotFound { id: String },

    /// The venue-search service could not be reached or rejected the request.
    #[error("venue provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The session already failed to load; no further loads are accepted.
    #[error("venue session failed earlier: {0}")]
    SessionFailed(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
