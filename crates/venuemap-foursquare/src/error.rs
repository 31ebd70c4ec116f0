use thiserror::Error;

/// Errors returned by the Foursquare API client.
#[derive(Debug, Error)]
pub enum FoursquareError {
    /// Network or TLS failure from the underlying HTTP client. The request
    /// URL carries the client secret, so it is stripped on conversion.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Non-2xx status without a Foursquare error envelope in the body.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The API answered with a `meta.code` other than 200.
    #[error("Foursquare API error {code} ({error_type}): {detail}")]
    ApiError {
        code: u16,
        error_type: String,
        detail: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl From<reqwest::Error> for FoursquareError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}
