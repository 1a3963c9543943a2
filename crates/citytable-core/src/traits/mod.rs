//! Core traits for city data sources.

mod source;

pub use source::CitySource;
