//! citytable-http - OpenDataSoft-backed city source.
//!
//! # Example
//!
//! ```no_run
//! use citytable_core::CitiesTable;
//! use citytable_http::{ClientConfig, OpenDataSoftSource};
//!
//! # async fn example() -> citytable_core::Result<()> {
//! let source = OpenDataSoftSource::new(ClientConfig::default())?;
//! let table = CitiesTable::new(source);
//! table.on_mount().await;
//! println!("{} cities loaded", table.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod endpoints;
mod source;

pub use config::{ClientConfig, DEFAULT_DATASET};
pub use source::OpenDataSoftSource;
