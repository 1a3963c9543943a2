//! citytable-core - Core types, filtering and pagination state.
//!
//! Data sources implement [`CitySource`]; [`CitiesTable`] accumulates the
//! pages they return and exposes a filtered, searchable view.

pub mod error;
pub mod filter;
pub mod table;
pub mod traits;
pub mod types;

pub use error::Error;
pub use filter::{Suggestion, filter_cities, suggestions};
pub use table::{CitiesTable, LoadOutcome, SkipReason, TableStatus};
pub use traits::CitySource;
pub use types::{CityRecord, EndpointUrl, Offset, PAGE_SIZE, Page};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
