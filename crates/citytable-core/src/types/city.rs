//! City record type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown for fields the API did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Base URL of the per-city weather page.
pub const WEATHER_CITY_URL: &str = "https://openweathermap.org/city/";

/// A single city row.
///
/// Text fields are never empty: absent or blank values are replaced by
/// [`NOT_AVAILABLE`]. A `geoname_id` of zero is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    /// Display name.
    pub name: String,

    /// English country name.
    pub country: String,

    /// IANA timezone name.
    pub timezone: String,

    /// GeoNames identifier, used for the weather link.
    pub geoname_id: Option<u64>,
}

impl CityRecord {
    /// Build a record from possibly missing API fields.
    pub fn new(
        name: Option<String>,
        country: Option<String>,
        timezone: Option<String>,
        geoname_id: Option<u64>,
    ) -> Self {
        Self {
            name: or_not_available(name),
            country: or_not_available(country),
            timezone: or_not_available(timezone),
            geoname_id: geoname_id.filter(|id| *id != 0),
        }
    }

    /// Link to the city's weather page, if the record has a GeoNames id.
    pub fn weather_url(&self) -> Option<String> {
        self.geoname_id
            .map(|id| format!("{}{}", WEATHER_CITY_URL, id))
    }

    /// Case-insensitive substring match against the city name.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}

impl fmt::Display for CityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.country)
    }
}

fn or_not_available(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_not_available() {
        let city = CityRecord::new(Some("Paris".to_string()), None, None, None);
        assert_eq!(city.name, "Paris");
        assert_eq!(city.country, "N/A");
        assert_eq!(city.timezone, "N/A");
        assert_eq!(city.geoname_id, None);
    }

    #[test]
    fn empty_strings_default_to_not_available() {
        let city = CityRecord::new(Some(String::new()), Some(String::new()), None, None);
        assert_eq!(city.name, "N/A");
        assert_eq!(city.country, "N/A");
    }

    #[test]
    fn zero_geoname_id_is_absent() {
        let city = CityRecord::new(None, None, None, Some(0));
        assert_eq!(city.geoname_id, None);
        assert_eq!(city.weather_url(), None);
    }

    #[test]
    fn weather_url_uses_geoname_id() {
        let city = CityRecord::new(
            Some("London".to_string()),
            Some("United Kingdom".to_string()),
            Some("Europe/London".to_string()),
            Some(2643743),
        );
        assert_eq!(
            city.weather_url().as_deref(),
            Some("https://openweathermap.org/city/2643743")
        );
        assert_eq!(city.to_string(), "London, United Kingdom");
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let city = CityRecord::new(Some("Londonderry".to_string()), None, None, None);
        assert!(city.name_contains("lon"));
        assert!(city.name_contains("derry"));
        assert!(city.name_contains(""));
        assert!(!city.name_contains("paris"));
    }
}
