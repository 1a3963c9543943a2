//! Records search request/response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use citytable_core::CityRecord;

/// Query parameters for the records search endpoint.
#[derive(Debug, Serialize)]
pub struct SearchQuery<'a> {
    pub dataset: &'a str,
    pub q: &'a str,
    pub rows: u32,
    pub start: u32,
}

/// Response from the records search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub records: Vec<RecordEntry>,
    #[serde(default)]
    pub nhits: Option<u64>,
}

/// A single record entry.
#[derive(Debug, Deserialize)]
pub struct RecordEntry {
    pub fields: CityFields,
}

/// Fields of a GeoNames city record. Only the ones shown are decoded.
#[derive(Debug, Default, Deserialize)]
pub struct CityFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cou_name_en: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub geoname_id: Option<Value>,
}

impl From<CityFields> for CityRecord {
    fn from(fields: CityFields) -> Self {
        let geoname_id = fields.geoname_id.as_ref().and_then(parse_geoname_id);
        CityRecord::new(fields.name, fields.cou_name_en, fields.timezone, geoname_id)
    }
}

/// The dataset publishes ids as strings; some exports use numbers.
fn parse_geoname_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Search API error response format.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: Option<String>,
    pub errorcode: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> CityRecord {
        let entry: RecordEntry = serde_json::from_value(value).unwrap();
        entry.fields.into()
    }

    #[test]
    fn maps_all_fields() {
        let city = decode(json!({
            "datasetid": "geonames-all-cities-with-a-population-1000",
            "fields": {
                "name": "London",
                "cou_name_en": "United Kingdom",
                "timezone": "Europe/London",
                "geoname_id": "2643743",
                "population": 8961989
            }
        }));
        assert_eq!(city.name, "London");
        assert_eq!(city.country, "United Kingdom");
        assert_eq!(city.timezone, "Europe/London");
        assert_eq!(city.geoname_id, Some(2643743));
    }

    #[test]
    fn missing_timezone_is_not_available() {
        let city = decode(json!({
            "fields": { "name": "Paris", "cou_name_en": "France", "geoname_id": 2988507 }
        }));
        assert_eq!(city.timezone, "N/A");
        assert_eq!(city.geoname_id, Some(2988507));
    }

    #[test]
    fn null_and_empty_fields_default() {
        let city = decode(json!({
            "fields": { "name": null, "cou_name_en": "", "geoname_id": "" }
        }));
        assert_eq!(city.name, "N/A");
        assert_eq!(city.country, "N/A");
        assert_eq!(city.geoname_id, None);
    }

    #[test]
    fn unparseable_geoname_id_is_absent() {
        assert_eq!(parse_geoname_id(&json!("abc")), None);
        assert_eq!(parse_geoname_id(&json!(-4)), None);
        assert_eq!(parse_geoname_id(&json!(true)), None);
        assert_eq!(parse_geoname_id(&json!(" 42 ")), Some(42));
    }

    #[test]
    fn record_without_fields_fails_to_decode() {
        let result = serde_json::from_value::<RecordEntry>(json!({ "recordid": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn query_serializes_in_order() {
        let query = SearchQuery {
            dataset: "cities",
            q: "",
            rows: 20,
            start: 40,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, json!({ "dataset": "cities", "q": "", "rows": 20, "start": 40 }));
    }
}
