//! Client library for the [ip-api.com](https://ip-api.com/) geolocation
//! service: one blocking GET, one decoded JSON object.

pub mod geo;

pub use geo::{GeoError, GeoLocation, GeoLocator};
