//! Recording doubles for the map widget and presenter.

use serde_json::json;

use crate::venue::{LatLng, VenueRecord};
use crate::widget::{MapWidget, Presenter};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MapCall {
    Place(String),
    Remove(String),
    PanTo(LatLng),
    Animate(String),
    Overlay { venue_id: String, html: String },
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FakeMarker {
    pub(crate) handle: u32,
    pub(crate) venue_id: String,
}

#[derive(Debug, Default)]
pub(crate) struct RecordingMap {
    pub(crate) calls: Vec<MapCall>,
    next_handle: u32,
}

impl RecordingMap {
    pub(crate) fn placed(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                MapCall::Place(id) => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn removed(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                MapCall::Remove(id) => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl MapWidget for RecordingMap {
    type Marker = FakeMarker;

    fn place_marker(&mut self, _position: LatLng, _label: &str, venue_id: &str) -> FakeMarker {
        self.next_handle += 1;
        self.calls.push(MapCall::Place(venue_id.to_string()));
        FakeMarker {
            handle: self.next_handle,
            venue_id: venue_id.to_string(),
        }
    }

    fn remove_marker(&mut self, marker: FakeMarker) {
        self.calls.push(MapCall::Remove(marker.venue_id));
    }

    fn pan_to(&mut self, position: LatLng) {
        self.calls.push(MapCall::PanTo(position));
    }

    fn animate(&mut self, marker: &FakeMarker) {
        self.calls.push(MapCall::Animate(marker.venue_id.clone()));
    }

    fn open_overlay(&mut self, marker: &FakeMarker, html: &str) {
        self.calls.push(MapCall::Overlay {
            venue_id: marker.venue_id.clone(),
            html: html.to_string(),
        });
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingPresenter {
    pub(crate) renders: Vec<Vec<String>>,
    pub(crate) errors: Vec<String>,
}

impl Presenter for RecordingPresenter {
    fn render_venues(&mut self, venues: &[&VenueRecord]) {
        self.renders
            .push(venues.iter().map(|v| v.id().to_string()).collect());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

pub(crate) fn raw_venue(id: &str, name: &str, category: &str) -> serde_json::Value {
    json!({
        "venue": {
            "id": id,
            "name": name,
            "contact": {},
            "location": {
                "lat": -33.71,
                "lng": 150.31,
                "formattedAddress": ["Katoomba St", "Katoomba NSW 2780"]
            },
            "categories": [{ "name": category }]
        }
    })
}

/// Blue Cafe (Coffee) and Red Diner (Food).
pub(crate) fn cafe_and_diner() -> Vec<serde_json::Value> {
    vec![
        raw_venue("a", "Blue Cafe", "Coffee"),
        raw_venue("b", "Red Diner", "Food"),
    ]
}

pub(crate) fn venues(raw: &[serde_json::Value]) -> Vec<VenueRecord> {
    raw.iter()
        .map(|r| VenueRecord::from_provider_payload(r).expect("fixture venue should parse"))
        .collect()
}
