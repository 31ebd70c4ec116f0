//! Line-oriented stand-ins for the map widget and the list view.

use std::fmt;
use std::io::Write;

use venuemap_core::{element_id, LatLng, MapWidget, Presenter, VenueRecord};

fn emit<O: Write>(out: &mut O, line: fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{line}") {
        tracing::warn!(error = %e, "console write failed");
    }
}

#[derive(Debug)]
pub struct ConsoleMarker {
    handle: u64,
    venue_id: String,
    label: String,
}

/// Prints every map operation as one `[map]` line.
pub struct ConsoleMap<O: Write> {
    out: O,
    next_handle: u64,
    live: usize,
}

impl<O: Write> ConsoleMap<O> {
    pub fn new(out: O) -> Self {
        Self {
            out,
            next_handle: 0,
            live: 0,
        }
    }

    /// Number of pins currently shown.
    pub fn live_markers(&self) -> usize {
        self.live
    }

    #[cfg(test)]
    pub fn output(&self) -> &O {
        &self.out
    }
}

impl<O: Write> MapWidget for ConsoleMap<O> {
    type Marker = ConsoleMarker;

    fn place_marker(&mut self, position: LatLng, label: &str, venue_id: &str) -> ConsoleMarker {
        self.next_handle += 1;
        self.live += 1;
        emit(
            &mut self.out,
            format_args!(
                "[map] pin #{} {label} ({venue_id}) at {position}",
                self.next_handle
            ),
        );
        ConsoleMarker {
            handle: self.next_handle,
            venue_id: venue_id.to_string(),
            label: label.to_string(),
        }
    }

    fn remove_marker(&mut self, marker: ConsoleMarker) {
        self.live = self.live.saturating_sub(1);
        emit(
            &mut self.out,
            format_args!(
                "[map] unpin #{} {} ({})",
                marker.handle, marker.label, marker.venue_id
            ),
        );
    }

    fn pan_to(&mut self, position: LatLng) {
        emit(&mut self.out, format_args!("[map] pan to {position}"));
    }

    fn animate(&mut self, marker: &ConsoleMarker) {
        emit(
            &mut self.out,
            format_args!("[map] bounce #{} {}", marker.handle, marker.label),
        );
    }

    fn open_overlay(&mut self, marker: &ConsoleMarker, html: &str) {
        emit(
            &mut self.out,
            format_args!("[map] overlay on #{}: {html}", marker.handle),
        );
    }
}

/// Prints the visible venue list and error banners.
pub struct ConsoleList<O: Write> {
    out: O,
}

impl<O: Write> ConsoleList<O> {
    pub fn new(out: O) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn output(&self) -> &O {
        &self.out
    }
}

impl<O: Write> Presenter for ConsoleList<O> {
    fn render_venues(&mut self, venues: &[&VenueRecord]) {
        if venues.is_empty() {
            emit(&mut self.out, format_args!("(no venues match)"));
            return;
        }
        for (index, venue) in venues.iter().enumerate() {
            emit(
                &mut self.out,
                format_args!(
                    "{:>3}. #{} {} [{}] phone {} rating {} id {}",
                    index + 1,
                    element_id(venue.name()),
                    venue.name(),
                    venue.category(),
                    venue.phone(),
                    venue.rating(),
                    venue.id()
                ),
            );
        }
    }

    fn show_error(&mut self, message: &str) {
        emit(
            &mut self.out,
            format_args!("!! unable to load venues: {message}"),
        );
    }
}
