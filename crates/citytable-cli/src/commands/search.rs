//! Search command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use citytable_core::{CitiesTable, CitySource};

use super::load_pages;
use crate::output;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Case-insensitive substring of the city name
    pub query: String,

    /// Number of pages to load before filtering (20 cities each)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Maximum number of suggestions to show
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Print one JSON object per matching city
    #[arg(long)]
    pub json: bool,
}

pub async fn run<S: CitySource>(source: S, args: SearchArgs) -> Result<()> {
    let table = CitiesTable::new(source);
    load_pages(&table, args.pages).await?;

    table.on_search_input(&args.query);
    let matches = table.visible();

    if matches.is_empty() {
        eprintln!(
            "{}",
            format!(
                "No cities matching '{}' among {} loaded.",
                args.query,
                table.len()
            )
            .dimmed()
        );
        return Ok(());
    }

    if !args.json {
        eprintln!("{}", "Suggestions:".dimmed());
        output::suggestions(&table.suggestions(Some(args.limit)));
        eprintln!();
    }

    output::cities(&matches, args.json)?;

    if !args.json {
        println!();
        output::field(
            "Matches",
            &format!("{} of {}", matches.len(), table.len()),
        );
        output::status(table.status());
    }

    Ok(())
}
