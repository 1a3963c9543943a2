//! List command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use citytable_core::{CitiesTable, CitySource};

use super::load_pages;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Number of pages to load (20 cities each)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Print one JSON object per city
    #[arg(long)]
    pub json: bool,
}

pub async fn run<S: CitySource>(source: S, args: ListArgs) -> Result<()> {
    let table = CitiesTable::new(source);
    load_pages(&table, args.pages).await?;

    let cities = table.cities();
    if cities.is_empty() {
        eprintln!("{}", "No cities found.".dimmed());
        return Ok(());
    }

    output::cities(&cities, args.json)?;

    if !args.json {
        println!();
        output::field("Cities", &cities.len().to_string());
        output::field("Next offset", &table.next_offset().to_string());
        output::status(table.status());
    }

    Ok(())
}
