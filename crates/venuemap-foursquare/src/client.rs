//! HTTP client for the Foursquare v2 `venues/explore` endpoint.
//!
//! Authenticates with the static client id/secret pair (userless access) and
//! returns the items of the first recommendation group as raw JSON, in the
//! order the API ranked them.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use venuemap_core::{AppConfig, LatLng};

use crate::error::FoursquareError;
use crate::types::ExploreEnvelope;

const DEFAULT_BASE_URL: &str = "https://api.foursquare.com/v2/";
const DEFAULT_USER_AGENT: &str = "venuemap/0.1 (venue-discovery)";

/// Query parameters sent with every explore request besides credentials and
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreSettings {
    /// API version date, sent as `v`.
    pub version: String,
    pub section: String,
    pub limit: u32,
}

impl Default for ExploreSettings {
    fn default() -> Self {
        Self {
            version: "20130815".to_string(),
            section: "topPicks".to_string(),
            limit: 15,
        }
    }
}

/// Client for the Foursquare venue search API.
///
/// Use [`FoursquareClient::new`] for production or
/// [`FoursquareClient::with_base_url`] to point at a mock server in tests.
pub struct FoursquareClient {
    client: Client,
    client_id: String,
    client_secret: String,
    base_url: Url,
    settings: ExploreSettings,
}

impl FoursquareClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`FoursquareError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        client_id: &str,
        client_secret: &str,
        timeout_secs: u64,
    ) -> Result<Self, FoursquareError> {
        Self::with_base_url(client_id, client_secret, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FoursquareError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`FoursquareError::InvalidBaseUrl`] if `base_url` does
    /// not parse.
    pub fn with_base_url(
        client_id: &str,
        client_secret: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, FoursquareError> {
        Self::build(
            client_id,
            client_secret,
            timeout_secs,
            DEFAULT_USER_AGENT,
            base_url,
        )
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`FoursquareClient::with_base_url`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, FoursquareError> {
        let client = Self::build(
            &config.foursquare_client_id,
            &config.foursquare_client_secret,
            config.request_timeout_secs,
            &config.user_agent,
            &config.foursquare_base_url,
        )?;
        Ok(client.with_settings(ExploreSettings {
            version: config.foursquare_version.clone(),
            section: config.explore_section.clone(),
            limit: config.venue_limit,
        }))
    }

    fn build(
        client_id: &str,
        client_secret: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, FoursquareError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends below the version root
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| FoursquareError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            client_id: client_id.to_owned(),
            client_secret: client_secret.to_owned(),
            base_url,
            settings: ExploreSettings::default(),
        })
    }

    #[must_use]
    pub fn with_settings(mut self, settings: ExploreSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &ExploreSettings {
        &self.settings
    }

    /// Fetches recommended venues around `center`.
    ///
    /// Returns the raw items of the first group, or an empty list when the
    /// response has no groups.
    ///
    /// # Errors
    ///
    /// - [`FoursquareError::ApiError`] if `meta.code` is not 200.
    /// - [`FoursquareError::UnexpectedStatus`] on a non-2xx status without an
    ///   error envelope.
    /// - [`FoursquareError::Http`] on network failure.
    /// - [`FoursquareError::Deserialize`] if the body is not the expected JSON.
    pub async fn explore(&self, center: LatLng) -> Result<Vec<serde_json::Value>, FoursquareError> {
        let url = self.explore_url(center)?;
        tracing::debug!(center = %center, section = %self.settings.section, "requesting venues");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let envelope = Self::parse_envelope(&body, status, &url)?;
        let items = envelope
            .response
            .unwrap_or_default()
            .groups
            .into_iter()
            .next()
            .map(|group| group.items)
            .unwrap_or_default();

        tracing::info!(count = items.len(), center = %center, "venues received");
        Ok(items)
    }

    fn parse_envelope(
        body: &str,
        status: StatusCode,
        url: &Url,
    ) -> Result<ExploreEnvelope, FoursquareError> {
        let envelope = match serde_json::from_str::<ExploreEnvelope>(body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(FoursquareError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: Self::redacted(url),
                });
            }
            Err(e) => {
                return Err(FoursquareError::Deserialize {
                    context: Self::redacted(url),
                    source: e,
                });
            }
        };

        if envelope.meta.code != 200 {
            return Err(FoursquareError::ApiError {
                code: envelope.meta.code,
                error_type: envelope
                    .meta
                    .error_type
                    .unwrap_or_else(|| "unknown".to_string()),
                detail: envelope.meta.error_detail.unwrap_or_default(),
            });
        }
        Ok(envelope)
    }

    /// Builds the explore URL with percent-encoded query parameters.
    fn explore_url(&self, center: LatLng) -> Result<Url, FoursquareError> {
        let mut url = self
            .base_url
            .join("venues/explore")
            .map_err(|e| FoursquareError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("client_id", &self.client_id);
            pairs.append_pair("client_secret", &self.client_secret);
            pairs.append_pair("ll", &center.to_string());
            pairs.append_pair("v", &self.settings.version);
            pairs.append_pair("section", &self.settings.section);
            pairs.append_pair("limit", &self.settings.limit.to_string());
        }
        Ok(url)
    }

    /// The request URL without its query string, safe for error messages.
    fn redacted(url: &Url) -> String {
        let mut url = url.clone();
        url.set_query(None);
        url.to_string()
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
