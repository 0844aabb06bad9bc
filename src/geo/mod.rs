//! Geolocation lookup over the ip-api.com JSON endpoint.
//!
//! Provides the [`GeoLocator`] façade, the decoded [`GeoLocation`] response
//! object, and the single [`GeoError`] failure type.

pub mod client;
pub mod types;

pub use client::{escape_path_segment, GeoLocator, SERVICE_URL};
pub use types::{GeoError, GeoLocation};
