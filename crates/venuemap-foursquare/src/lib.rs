pub mod client;
pub mod error;
pub mod types;

pub use client::{ExploreSettings, FoursquareClient};
pub use error::FoursquareError;
