//! Live map markers keyed by venue id.
//!
//! [`MarkerRegistry::sync`] brings the marker set in line with a target venue
//! list by diffing ids: only markers that left the list are removed and only
//! venues that joined it get a new marker. Markers for venues present on both
//! sides are never touched, so re-filtering does not make pins flicker.

use std::collections::{HashMap, HashSet};

use crate::venue::VenueRecord;
use crate::widget::MapWidget;

/// Ids added and removed by one [`MarkerRegistry::sync`] call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// In target-list order.
    pub added: Vec<String>,
    /// Sorted by id.
    pub removed: Vec<String>,
}

impl SyncReport {
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[derive(Debug)]
pub struct MarkerRegistry<M> {
    active: HashMap<String, M>,
}

impl<M> Default for MarkerRegistry<M> {
    fn default() -> Self {
        Self {
            active: HashMap::new(),
        }
    }
}

impl<M> MarkerRegistry<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the marker set match `visible`: one marker per venue, none for
    /// anything else.
    pub fn sync<'a, W, I>(&mut self, map: &mut W, visible: I) -> SyncReport
    where
        W: MapWidget<Marker = M>,
        I: IntoIterator<Item = &'a VenueRecord>,
    {
        let target: Vec<&VenueRecord> = visible.into_iter().collect();
        let target_ids: HashSet<&str> = target.iter().map(|v| v.id()).collect();

        let mut removed: Vec<String> = self
            .active
            .keys()
            .filter(|id| !target_ids.contains(id.as_str()))
            .cloned()
            .collect();
        removed.sort_unstable();

        for id in &removed {
            if let Some(marker) = self.active.remove(id) {
                map.remove_marker(marker);
                tracing::debug!(venue_id = %id, "marker removed");
            }
        }

        let mut added = Vec::new();
        for venue in target {
            if self.active.contains_key(venue.id()) {
                continue;
            }
            let marker = map.place_marker(venue.position(), venue.name(), venue.id());
            self.active.insert(venue.id().to_string(), marker);
            tracing::debug!(venue_id = venue.id(), name = venue.name(), "marker placed");
            added.push(venue.id().to_string());
        }

        if !added.is_empty() || !removed.is_empty() {
            tracing::debug!(
                added = added.len(),
                removed = removed.len(),
                active = self.active.len(),
                "markers synced"
            );
        }

        SyncReport { added, removed }
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&M> {
        self.active.get(id)
    }

    /// Removes every marker from the map. Returns how many were removed.
    pub fn clear<W>(&mut self, map: &mut W) -> usize
    where
        W: MapWidget<Marker = M>,
    {
        let count = self.active.len();
        for (_, marker) in self.active.drain() {
            map.remove_marker(marker);
        }
        if count > 0 {
            tracing::debug!(count, "markers cleared");
        }
        count
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.active.contains_key(id)
    }

    /// Active venue ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.active.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
