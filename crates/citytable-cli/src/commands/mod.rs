//! Subcommand implementations.

pub mod browse;
pub mod list;
pub mod search;

use anyhow::{Result, anyhow};
use tracing::{info, warn};

use citytable_core::{CitiesTable, CitySource, LoadOutcome};

/// Mount the table, then signal the scroll boundary until `pages` pages
/// are loaded or the data runs out.
///
/// A failed first page is an error. A later failure stops paging and is
/// reported, keeping the records already loaded.
pub async fn load_pages<S: CitySource>(table: &CitiesTable<S>, pages: u32) -> Result<()> {
    let mut outcome = table.on_mount().await;

    loop {
        if let LoadOutcome::Failed(err) = outcome {
            if table.is_empty() {
                return Err(anyhow!(err).context("Failed to load cities"));
            }
            warn!(error = %err, "Stopped paging after failed fetch");
            crate::output::error(&format!("Failed to load more cities: {err}"));
            return Ok(());
        }

        if !table.has_more() || table.pages_loaded() >= pages {
            break;
        }

        outcome = table.on_scroll_end().await;
    }

    info!(
        pages = table.pages_loaded(),
        cities = table.len(),
        "Finished loading"
    );
    Ok(())
}
