//! Application state and user-interaction wiring.
//!
//! [`InteractionController`] owns the venue store, the marker registry, the
//! map widget and the presenter. Every user event (keyword edit, list
//! selection, marker click) and every load completion goes through it, so the
//! marker set always mirrors the filtered venue list.
//!
//! Loads are tracked with a generation counter: [`InteractionController::begin_load`]
//! issues a [`LoadTicket`] and only the most recently issued ticket may apply
//! its result. A slow response from an older request is dropped.

use std::collections::HashSet;

use crate::error::VenueError;
use crate::markers::{MarkerRegistry, SyncReport};
use crate::overlay::render_overlay;
use crate::store::VenueStore;
use crate::venue::VenueRecord;
use crate::widget::{MapWidget, Presenter};

/// Coarse session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No load has been started yet.
    Idle,
    Loading,
    Ready,
    /// Terminal for the session; holds the message shown to the user.
    Error(String),
}

/// Proof that a load was started; see [`InteractionController::finish_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { venues: usize },
    /// A newer load was started after this ticket was issued, or this
    /// ticket was already finished.
    Stale,
}

pub struct InteractionController<W: MapWidget, P: Presenter> {
    store: VenueStore,
    markers: MarkerRegistry<W::Marker>,
    map: W,
    presenter: P,
    state: LoadState,
    generation: u64,
}

impl<W: MapWidget, P: Presenter> InteractionController<W, P> {
    pub fn new(map: W, presenter: P) -> Self {
        Self {
            store: VenueStore::new(),
            markers: MarkerRegistry::new(),
            map,
            presenter,
            state: LoadState::Idle,
            generation: 0,
        }
    }

    /// Enters [`LoadState::Loading`] and issues a ticket for the new request.
    ///
    /// # Errors
    ///
    /// Returns [`VenueError::SessionFailed`] once a load has failed; the
    /// session does not retry.
    pub fn begin_load(&mut self) -> Result<LoadTicket, VenueError> {
        if let LoadState::Error(message) = &self.state {
            return Err(VenueError::SessionFailed(message.clone()));
        }
        self.generation += 1;
        self.state = LoadState::Loading;
        tracing::debug!(generation = self.generation, "venue load started");
        Ok(LoadTicket(self.generation))
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// On success every existing marker is cleared, one marker is placed per
    /// loaded venue, the list is rendered and the state becomes
    /// [`LoadState::Ready`]. Results for superseded or already finished
    /// tickets are ignored.
    ///
    /// # Errors
    ///
    /// Propagates the provider error or the store's load error after moving to
    /// [`LoadState::Error`] and showing the message. Previously loaded venues
    /// stay in place.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<serde_json::Value>, VenueError>,
    ) -> Result<LoadOutcome, VenueError> {
        if ticket.0 != self.generation {
            tracing::warn!(
                ticket = ticket.0,
                current = self.generation,
                "dropping result of superseded venue load"
            );
            return Ok(LoadOutcome::Stale);
        }
        if self.state != LoadState::Loading {
            tracing::warn!(ticket = ticket.0, "venue load already finished");
            return Ok(LoadOutcome::Stale);
        }

        let raw = match result {
            Ok(raw) => raw,
            Err(err) => return Err(self.fail_load(err)),
        };

        let loaded = self.store.load(&raw).map(<[VenueRecord]>::len);
        let venues = match loaded {
            Ok(count) => count,
            Err(err) => return Err(self.fail_load(err)),
        };

        let cleared = self.markers.clear(&mut self.map);
        let report = self.markers.sync(&mut self.map, self.store.all_venues());
        self.presenter.render_venues(&self.store.visible_venues());
        self.state = LoadState::Ready;
        self.check_markers_match_visible();

        tracing::info!(
            venues,
            cleared,
            placed = report.added.len(),
            "venue load applied"
        );
        Ok(LoadOutcome::Applied { venues })
    }

    fn fail_load(&mut self, err: VenueError) -> VenueError {
        let message = err.to_string();
        tracing::warn!(error = %message, "venue load failed");
        self.presenter.show_error(&message);
        self.state = LoadState::Error(message);
        err
    }

    /// Re-filters the list, syncs markers to the result and re-renders it.
    pub fn on_filter_changed(&mut self, keyword: &str) -> SyncReport {
        let visible = self.store.set_filter(keyword);
        let report = self.markers.sync(&mut self.map, visible.iter().copied());
        self.presenter.render_venues(&visible);
        self.check_markers_match_visible();
        report
    }

    /// Focuses a venue: pans to it, animates its marker and opens the overlay.
    ///
    /// Returns `false` without side effects when the venue has no marker,
    /// which happens for venues hidden by the filter or unknown ids.
    pub fn on_venue_selected(&mut self, id: &str) -> bool {
        let Some(marker) = self.markers.find_by_id(id) else {
            tracing::debug!(venue_id = id, "selected venue has no marker");
            return false;
        };
        let Ok(venue) = self.store.get(id) else {
            tracing::error!(venue_id = id, "marker exists for a venue missing from the store");
            if cfg!(debug_assertions) {
                panic!("marker registry references unknown venue {id}");
            }
            return false;
        };

        self.map.pan_to(venue.position());
        self.map.animate(marker);
        self.map.open_overlay(marker, &render_overlay(venue));
        tracing::debug!(venue_id = id, name = venue.name(), "venue focused");
        true
    }

    /// Marker clicks take the same path as list selection.
    pub fn on_marker_clicked(&mut self, id: &str) -> bool {
        self.on_venue_selected(id)
    }

    /// Renders the current visible list again without changing anything.
    pub fn refresh_list(&mut self) {
        self.presenter.render_venues(&self.store.visible_venues());
    }

    fn check_markers_match_visible(&self) {
        if cfg!(debug_assertions) {
            let visible: HashSet<&str> =
                self.store.visible_venues().iter().map(|v| v.id()).collect();
            let active: HashSet<&str> = self.markers.ids().into_iter().collect();
            assert_eq!(active, visible, "marker set diverged from visible venues");
        }
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub fn store(&self) -> &VenueStore {
        &self.store
    }

    #[must_use]
    pub fn markers(&self) -> &MarkerRegistry<W::Marker> {
        &self.markers
    }

    #[must_use]
    pub fn map(&self) -> &W {
        &self.map
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
