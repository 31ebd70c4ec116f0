//! Venue records normalized from the venue-search provider's payload.
//!
//! The provider wraps each venue as `{"venue": {...}}`. Only the fields the
//! map and the list view need are kept; everything else is dropped.

use std::fmt;

use serde::Deserialize;

use crate::error::VenueError;

/// Placeholder shown for missing phone numbers and ratings.
pub const NOT_AVAILABLE: &str = "n/a";

/// A WGS84 coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Provider rating of a venue.
///
/// A rating of `0` is reported by the provider the same way as a missing
/// rating and therefore also maps to [`Rating::NotAvailable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Score(f64),
    NotAvailable,
}

impl From<Option<f64>> for Rating {
    fn from(value: Option<f64>) -> Self {
        match value {
            // NaN and 0 are both falsy in the provider's convention.
            Some(score) if score.abs() > 0.0 => Rating::Score(score),
            _ => Rating::NotAvailable,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Score(score) => write!(f, "{score}"),
            Rating::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// One venue as shown on the map and in the list. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueRecord {
    id: String,
    name: String,
    phone: String,
    position: LatLng,
    rating: Rating,
    website_url: Option<String>,
    category: String,
    formatted_address: String,
}

#[derive(Debug, Deserialize)]
struct RawVenueItem {
    venue: RawVenue,
}

#[derive(Debug, Deserialize)]
struct RawVenue {
    id: String,
    name: String,
    #[serde(default)]
    contact: Option<RawContact>,
    location: RawLocation,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    categories: Option<Vec<RawCategory>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContact {
    #[serde(default)]
    formatted_phone: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLocation {
    lat: f64,
    lng: f64,
    #[serde(default)]
    formatted_address: Option<RawAddress>,
}

/// `formattedAddress` is a list of address lines in v2 responses, but some
/// fixtures and older responses carry a single string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAddress {
    Lines(Vec<String>),
    Single(String),
}

impl RawAddress {
    fn joined(self) -> String {
        match self {
            RawAddress::Lines(lines) => lines.join(","),
            RawAddress::Single(line) => line,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    name: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl VenueRecord {
    /// Builds a record from one entry of the provider's `items` array.
    ///
    /// # Errors
    ///
    /// Returns [`VenueError::MalformedVenue`] when the entry does not have the
    /// `{venue: {id, name, location: {lat, lng}}}` shape or lists no category.
    pub fn from_provider_payload(raw: &serde_json::Value) -> Result<Self, VenueError> {
        let item = RawVenueItem::deserialize(raw).map_err(|e| VenueError::MalformedVenue {
            venue_id: raw
                .pointer("/venue/id")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
            reason: e.to_string(),
        })?;
        let venue = item.venue;

        let Some(category) = venue
            .categories
            .and_then(|categories| categories.into_iter().next())
            .map(|c| c.name)
        else {
            return Err(VenueError::MalformedVenue {
                venue_id: Some(venue.id),
                reason: "venue lists no category".to_string(),
            });
        };

        Ok(Self {
            phone: non_empty(venue.contact.and_then(|c| c.formatted_phone))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            position: LatLng::new(venue.location.lat, venue.location.lng),
            rating: Rating::from(venue.rating),
            website_url: non_empty(venue.url),
            formatted_address: venue
                .location
                .formatted_address
                .map(RawAddress::joined)
                .unwrap_or_default(),
            id: venue.id,
            name: venue.name,
            category,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn position(&self) -> LatLng {
        self.position
    }

    #[must_use]
    pub fn rating(&self) -> Rating {
        self.rating
    }

    #[must_use]
    pub fn website_url(&self) -> Option<&str> {
        self.website_url.as_deref()
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn formatted_address(&self) -> &str {
        &self.formatted_address
    }

    /// `keyword` must already be lower-cased.
    pub(crate) fn matches_keyword(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(keyword) || self.category.to_lowercase().contains(keyword)
    }
}
