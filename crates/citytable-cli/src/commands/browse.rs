//! Browse command implementation.
//!
//! Reads events from stdin, one per line:
//!
//! - empty line or `:more`: the view scrolled to its boundary
//! - `/<text>` or any other text: new search input (`/` alone clears it)
//! - `:pick <n>`: select the n-th suggestion
//! - `:q`: quit

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use citytable_core::{CitiesTable, CitySource, LoadOutcome, SkipReason, TableStatus};

use crate::output;

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Maximum number of suggestions to show
    #[arg(long, default_value_t = 5)]
    pub limit: usize,
}

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Event {
    ScrollEnd,
    Search(String),
    Pick(usize),
    Quit,
    Unknown(String),
}

impl Event {
    fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim() {
            "" | ":more" => return Event::ScrollEnd,
            ":q" | ":quit" => return Event::Quit,
            _ => {}
        }

        if let Some(rest) = line.trim().strip_prefix(":pick") {
            return match rest.trim().parse::<usize>() {
                Ok(n) if n > 0 => Event::Pick(n),
                _ => Event::Unknown(line.to_string()),
            };
        }

        if line.starts_with(':') {
            return Event::Unknown(line.to_string());
        }

        Event::Search(line.strip_prefix('/').unwrap_or(line).to_string())
    }
}

pub async fn run<S: CitySource>(source: S, args: BrowseArgs) -> Result<()> {
    let table = CitiesTable::new(source);

    eprintln!(
        "{}",
        "Enter: load more | text: search | :pick N: choose suggestion | :q: quit".dimmed()
    );

    show_loading(&table);
    report(&table.on_mount().await);
    render(&table, args.limit)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let event = Event::parse(&line);
        debug!(?event, "Browse event");

        match event {
            Event::Quit => break,
            Event::ScrollEnd => {
                show_loading(&table);
                report(&table.on_scroll_end().await);
            }
            Event::Search(query) => table.on_search_input(query),
            Event::Pick(n) => {
                let suggestions = table.suggestions(Some(args.limit));
                match suggestions.get(n - 1) {
                    Some(choice) => table.select_suggestion(choice.value.clone()),
                    None => {
                        output::error(&format!("No suggestion #{n}"));
                        continue;
                    }
                }
            }
            Event::Unknown(input) => {
                output::error(&format!("Unknown command: {input}"));
                continue;
            }
        }

        render(&table, args.limit)?;
    }

    Ok(())
}

/// Show the loader while the next page is being requested.
fn show_loading<S: CitySource>(table: &CitiesTable<S>) {
    if table.has_more() && !table.is_loading() {
        output::status(TableStatus::Loading);
    }
}

fn report(outcome: &LoadOutcome) {
    match outcome {
        LoadOutcome::Loaded { count, offset, .. } => {
            eprintln!("{}", format!("Loaded {count} cities from offset {offset}.").dimmed());
        }
        LoadOutcome::Skipped(SkipReason::Exhausted) => {}
        LoadOutcome::Skipped(reason) => {
            eprintln!("{}", format!("Skipped: {reason}").dimmed());
        }
        LoadOutcome::Failed(err) => output::error(&format!("Failed to load cities: {err}")),
    }
}

fn render<S: CitySource>(table: &CitiesTable<S>, limit: usize) -> Result<()> {
    let query = table.query();
    if !query.is_empty() {
        eprintln!("{} {}", "Search:".dimmed(), query);
        output::suggestions(&table.suggestions(Some(limit)));
    }

    output::cities(&table.visible(), false)?;
    output::status(table.status());
    Ok(())
}
