//! Core citytable types.
//!
//! Records are normalized at construction time so that rendering code
//! never has to deal with missing fields.

mod city;
mod endpoint_url;
mod page;

pub use city::{CityRecord, NOT_AVAILABLE, WEATHER_CITY_URL};
pub use endpoint_url::{DEFAULT_ENDPOINT, EndpointUrl};
pub use page::{Offset, PAGE_SIZE, Page};
