//! HTTP client for the ip-api.com geolocation endpoint.
//!
//! One blocking GET per lookup, no retries, no timeouts, no status-code
//! dispatch. The service reports its own failures inside the JSON body.

use log::debug;

use super::types::{GeoError, GeoLocation};

/// Base endpoint for the geolocation service.
pub const SERVICE_URL: &str = "http://ip-api.com/json/";

const USER_AGENT: &str = concat!("geolocator/", env!("CARGO_PKG_VERSION"));

/// Percent-escape a string for use as a single URL path segment.
///
/// Escapes every byte outside the RFC 3986 unreserved set, `/` included, so
/// a malformed hostname cannot extend the request path. Multi-byte
/// characters are escaped per UTF-8 byte.
pub fn escape_path_segment(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// Stateless façade over the geolocation service.
///
/// Holds only the base URL; calls are independent and may be issued from
/// multiple threads.
pub struct GeoLocator {
    base_url: String,
}

impl GeoLocator {
    /// Create a locator against the public ip-api.com endpoint.
    pub fn new() -> Self {
        Self {
            base_url: SERVICE_URL.to_string(),
        }
    }

    /// Create a locator against a specific endpoint (for testing).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Geolocation of the caller's own apparent public address.
    pub fn lookup_self(&self) -> Result<GeoLocation, GeoError> {
        self.fetch(&self.base_url)
    }

    /// Geolocation of the given IP address or hostname.
    ///
    /// An empty target behaves exactly like [`lookup_self`](Self::lookup_self).
    pub fn lookup(&self, target: &str) -> Result<GeoLocation, GeoError> {
        if target.is_empty() {
            return self.lookup_self();
        }
        let url = format!("{}{}", self.base_url, escape_path_segment(target));
        self.fetch(&url)
    }

    fn fetch(&self, url: &str) -> Result<GeoLocation, GeoError> {
        debug!("GET {}", url);

        // A non-2xx status still carries a decodable JSON payload; recover
        // the response instead of failing on the status.
        let response = match ureq::get(url).set("User-Agent", USER_AGENT).call() {
            Ok(r) => r,
            Err(ureq::Error::Status(_, r)) => r,
            Err(e) => return Err(e.into()),
        };

        let body = response.into_string()?;
        let location = serde_json::from_str(&body)?;
        Ok(location)
    }
}

impl Default for GeoLocator {
    fn default() -> Self {
        Self::new()
    }
}
