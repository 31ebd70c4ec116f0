//! Core of the venue map: venue records, the keyword-filtered store, the
//! marker registry and the controller that keeps them in step with an
//! injected map widget.

pub mod app_config;
pub mod config;
pub mod controller;
pub mod error;
pub mod markers;
pub mod overlay;
pub mod store;
pub mod venue;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_support;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use controller::{InteractionController, LoadOutcome, LoadState, LoadTicket};
pub use error::{ConfigError, VenueError};
pub use markers::{MarkerRegistry, SyncReport};
pub use overlay::{element_id, render_overlay};
pub use store::VenueStore;
pub use venue::{LatLng, Rating, VenueRecord};
pub use widget::{MapWidget, Presenter};
