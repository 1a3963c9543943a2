//! Search filtering and autocomplete suggestions.

use serde::Serialize;

use crate::types::CityRecord;

/// Records whose name contains `query`, ignoring case, in original order.
///
/// An empty query matches every record.
///
/// # Example
///
/// ```
/// use citytable_core::{CityRecord, filter_cities};
///
/// let cities: Vec<_> = ["London", "Paris", "Londonderry"]
///     .into_iter()
///     .map(|n| CityRecord::new(Some(n.to_string()), None, None, None))
///     .collect();
///
/// let names: Vec<_> = filter_cities(&cities, "lon").into_iter().map(|c| c.name).collect();
/// assert_eq!(names, ["London", "Londonderry"]);
/// ```
pub fn filter_cities(records: &[CityRecord], query: &str) -> Vec<CityRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|city| city.name_contains(&needle))
        .cloned()
        .collect()
}

/// One autocomplete entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Value that becomes the search string when selected.
    pub value: String,

    /// Text shown in the suggestion list.
    pub label: String,
}

impl From<&CityRecord> for Suggestion {
    fn from(city: &CityRecord) -> Self {
        Self {
            value: city.name.clone(),
            label: city.to_string(),
        }
    }
}

/// Suggestions for the already filtered records, capped at `limit`.
pub fn suggestions(filtered: &[CityRecord], limit: Option<usize>) -> Vec<Suggestion> {
    filtered
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(Suggestion::from)
        .collect()
}
