//! Capabilities the core needs from the outside world.
//!
//! The core never talks to a concrete map provider or UI toolkit; the entry
//! point hands implementations of these traits to the
//! [`crate::InteractionController`].

use crate::venue::{LatLng, VenueRecord};

/// A map that can show pins, move its viewport and display a detail overlay.
pub trait MapWidget {
    /// Handle for a placed pin. Owned by the [`crate::MarkerRegistry`].
    type Marker;

    /// Places a pin. Clicks on it must be reported back by `venue_id`.
    fn place_marker(&mut self, position: LatLng, label: &str, venue_id: &str) -> Self::Marker;

    fn remove_marker(&mut self, marker: Self::Marker);

    fn pan_to(&mut self, position: LatLng);

    /// Plays the pin's attention animation.
    fn animate(&mut self, marker: &Self::Marker);

    /// Opens the shared overlay anchored at `marker` with `html` as content.
    fn open_overlay(&mut self, marker: &Self::Marker, html: &str);
}

/// The list view and status banner.
pub trait Presenter {
    fn render_venues(&mut self, venues: &[&VenueRecord]);

    fn show_error(&mut self, message: &str);
}
