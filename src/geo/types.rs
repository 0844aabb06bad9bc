//! Response object and error type for the geolocation client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One decoded ip-api.com response.
///
/// Every field is optional: the service omits fields on failure responses
/// and may add new ones over time, so missing fields default to `None` and
/// unrecognized fields are ignored. Populated once at decode time, never
/// mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeoLocation {
    /// "success" or "fail".
    pub status: Option<String>,
    /// Failure reason when `status` is "fail".
    pub message: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    /// Region/state short code (e.g. "CA").
    pub region: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// IANA timezone (e.g. "Asia/Tokyo").
    pub timezone: Option<String>,
    pub isp: Option<String>,
    pub org: Option<String>,
    /// AS number and name. `as` on the wire.
    #[serde(rename = "as")]
    pub as_name: Option<String>,
    /// The IP address the lookup resolved to.
    pub query: Option<String>,
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn dash(v: &Option<String>) -> &str {
            v.as_deref().unwrap_or("-")
        }

        writeln!(f, "IP:     {}", dash(&self.query))?;
        writeln!(
            f,
            "Loc:    {}, {}, {}",
            dash(&self.city),
            dash(&self.region_name),
            dash(&self.country),
        )?;
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => writeln!(f, "Coords: {:.4}, {:.4}", lat, lon)?,
            _ => writeln!(f, "Coords: -")?,
        }
        writeln!(f, "TZ:     {}", dash(&self.timezone))?;
        writeln!(f, "ISP:    {}", dash(&self.isp))?;
        write!(f, "Org:    {}", dash(&self.org))
    }
}

/// The single failure kind for a lookup.
///
/// URL construction, transport, body-read, and JSON-decode failures all
/// land here; callers get a message, not a taxonomy.
#[derive(Debug)]
pub struct GeoError {
    message: String,
}

impl GeoError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "geolocation lookup failed: {}", self.message)
    }
}

impl std::error::Error for GeoError {}

impl From<std::io::Error> for GeoError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ureq::Error> for GeoError {
    fn from(e: ureq::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for GeoError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_documented_fields() {
        let body = r#"{
            "status": "success",
            "country": "Japan",
            "countryCode": "JP",
            "region": "13",
            "regionName": "Tokyo",
            "city": "Tokyo",
            "zip": "151-0053",
            "lat": 35.6893,
            "lon": 139.6899,
            "timezone": "Asia/Tokyo",
            "isp": "Example ISP",
            "org": "Example Org",
            "as": "AS15169 Example LLC",
            "query": "203.0.113.7"
        }"#;

        let loc: GeoLocation = serde_json::from_str(body).unwrap();
        assert_eq!(loc.status.as_deref(), Some("success"));
        assert_eq!(loc.country.as_deref(), Some("Japan"));
        assert_eq!(loc.country_code.as_deref(), Some("JP"));
        assert_eq!(loc.region_name.as_deref(), Some("Tokyo"));
        assert_eq!(loc.city.as_deref(), Some("Tokyo"));
        assert_eq!(loc.as_name.as_deref(), Some("AS15169 Example LLC"));
        assert_eq!(loc.query.as_deref(), Some("203.0.113.7"));
        assert!((loc.lat.unwrap() - 35.6893).abs() < 1e-9);
        assert!((loc.lon.unwrap() - 139.6899).abs() < 1e-9);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let body = r#"{"status":"success","city":"Tokyo","continentCode":"AS"}"#;
        let loc: GeoLocation = serde_json::from_str(body).unwrap();
        assert_eq!(loc.city.as_deref(), Some("Tokyo"));
    }

    #[test]
    fn test_decode_failure_body_is_mostly_empty() {
        // The service reports failures inside the JSON body.
        let body = r#"{"status":"fail","message":"private range","query":"192.168.1.1"}"#;
        let loc: GeoLocation = serde_json::from_str(body).unwrap();
        assert_eq!(loc.status.as_deref(), Some("fail"));
        assert_eq!(loc.message.as_deref(), Some("private range"));
        assert!(loc.country.is_none());
        assert!(loc.city.is_none());
        assert!(loc.lat.is_none());
    }

    #[test]
    fn test_decode_empty_object() {
        let loc: GeoLocation = serde_json::from_str("{}").unwrap();
        assert_eq!(loc, GeoLocation::default());
    }

    #[test]
    fn test_value_equality() {
        let a: GeoLocation = serde_json::from_str(r#"{"city":"Tokyo"}"#).unwrap();
        let b: GeoLocation = serde_json::from_str(r#"{"city":"Tokyo"}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_with_fields() {
        let loc: GeoLocation = serde_json::from_str(
            r#"{"query":"203.0.113.7","city":"Tokyo","regionName":"Tokyo","country":"Japan","lat":35.6893,"lon":139.6899}"#,
        )
        .unwrap();
        let text = loc.to_string();
        assert!(text.contains("IP:     203.0.113.7"));
        assert!(text.contains("Loc:    Tokyo, Tokyo, Japan"));
        assert!(text.contains("Coords: 35.6893, 139.6899"));
    }

    #[test]
    fn test_display_with_missing_fields() {
        let text = GeoLocation::default().to_string();
        assert!(text.contains("IP:     -"));
        assert!(text.contains("Coords: -"));
    }
}
