//! Foursquare v2 response envelope for `venues/explore`.
//!
//! Every v2 response is `{"meta": {...}, "response": {...}}`. Venue items are
//! kept as raw JSON; turning them into venue records is the core's job.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExploreEnvelope {
    pub meta: Meta,
    #[serde(default)]
    pub response: Option<ExploreResponse>,
}

/// `meta.code` mirrors the HTTP status; error responses also carry
/// `errorType` and `errorDetail`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub code: u16,
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error_detail: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreResponse {
    #[serde(default)]
    pub header_location: Option<String>,
    #[serde(default)]
    pub total_results: Option<u32>,
    #[serde(default)]
    pub groups: Vec<ExploreGroup>,
}

/// A recommendation group such as `"recommended"`.
#[derive(Debug, Deserialize)]
pub struct ExploreGroup {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}
