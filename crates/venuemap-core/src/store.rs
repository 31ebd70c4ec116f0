use std::collections::HashSet;

use crate::error::VenueError;
use crate::venue::VenueRecord;

/// Authoritative ordered venue list plus the active keyword filter.
///
/// The visible subset is never stored; it is recomputed from the list and
/// the keyword whenever it is asked for.
#[derive(Debug, Default)]
pub struct VenueStore {
    venues: Vec<VenueRecord>,
    keyword: String,
}

impl VenueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the venue list with the converted `raw` entries and clears
    /// the keyword. Returns the new visible list, which is the whole list.
    ///
    /// The load is all-or-nothing: on error the previous list and keyword are
    /// kept.
    ///
    /// # Errors
    ///
    /// - [`VenueError::MalformedVenue`] if any entry cannot be converted.
    /// - [`VenueError::DuplicateVenue`] if two entries share an id.
    pub fn load(&mut self, raw: &[serde_json::Value]) -> Result<&[VenueRecord], VenueError> {
        let mut loaded = Vec::with_capacity(raw.len());
        let mut seen = HashSet::with_capacity(raw.len());

        for entry in raw {
            let venue = VenueRecord::from_provider_payload(entry)?;
            if !seen.insert(venue.id().to_string()) {
                return Err(VenueError::DuplicateVenue {
                    id: venue.id().to_string(),
                });
            }
            loaded.push(venue);
        }

        self.venues = loaded;
        self.keyword.clear();
        tracing::info!(count = self.venues.len(), "venue list loaded");
        Ok(&self.venues)
    }

    /// Stores the lower-cased `keyword` and returns the venues whose name or
    /// category contains it.
    pub fn set_filter(&mut self, keyword: &str) -> Vec<&VenueRecord> {
        self.keyword = keyword.to_lowercase();
        let visible = self.visible_venues();
        tracing::debug!(
            keyword = %self.keyword,
            visible = visible.len(),
            total = self.venues.len(),
            "venue filter applied"
        );
        visible
    }

    #[must_use]
    pub fn visible_venues(&self) -> Vec<&VenueRecord> {
        self.venues
            .iter()
            .filter(|v| v.matches_keyword(&self.keyword))
            .collect()
    }

    #[must_use]
    pub fn all_venues(&self) -> &[VenueRecord] {
        &self.venues
    }

    #[must_use]
    pub fn filter_keyword(&self) -> &str {
        &self.keyword
    }

    /// # Errors
    ///
    /// Returns [`VenueError::NotFound`] if no loaded venue has this id.
    pub fn get(&self, id: &str) -> Result<&VenueRecord, VenueError> {
        self.venues
            .iter()
            .find(|v| v.id() == id)
            .ok_or_else(|| VenueError::NotFound { id: id.to_string() })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
