//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use citytable_core::{CityRecord, Suggestion, TableStatus};

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print cities as aligned columns, or one JSON object per line.
pub fn cities(rows: &[CityRecord], as_json: bool) -> Result<()> {
    if as_json {
        for city in rows {
            json(city)?;
        }
        return Ok(());
    }

    let headers = ["City", "Country", "Timezone"];
    let mut widths = headers.map(|h| h.chars().count());
    for city in rows {
        for (width, value) in widths
            .iter_mut()
            .zip([&city.name, &city.country, &city.timezone])
        {
            *width = (*width).max(value.chars().count());
        }
    }

    println!(
        "{}",
        format!(
            "{:<w0$}  {:<w1$}  {:<w2$}  Weather",
            headers[0],
            headers[1],
            headers[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        )
        .bold()
    );

    for city in rows {
        let link = city.weather_url().unwrap_or_else(|| "-".to_string());
        println!(
            "{:<w0$}  {:<w1$}  {:<w2$}  {}",
            city.name,
            city.country,
            city.timezone,
            link.dimmed(),
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        );
    }

    Ok(())
}

/// Print numbered autocomplete suggestions.
pub fn suggestions(items: &[Suggestion]) {
    for (i, suggestion) in items.iter().enumerate() {
        eprintln!("  {} {}", format!("{}.", i + 1).dimmed(), suggestion.label);
    }
}

/// Print the end-of-table indicator.
pub fn status(status: TableStatus) {
    if let Some(message) = status.message() {
        eprintln!("{}", message.dimmed());
    }
}
