//! CLI argument definitions.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use citytable_core::EndpointUrl;
use citytable_core::types::DEFAULT_ENDPOINT;
use citytable_http::{ClientConfig, DEFAULT_DATASET, OpenDataSoftSource};

use crate::commands::{browse, list, search};

/// Browse and search the GeoNames world cities dataset.
#[derive(Parser, Debug)]
#[command(name = "citytable")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where city pages come from.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Records search endpoint
    #[arg(long, global = true, env = "CITYTABLE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Dataset identifier
    #[arg(long, global = true, env = "CITYTABLE_DATASET", default_value = DEFAULT_DATASET)]
    pub dataset: String,

    /// Abort a page request after this many seconds (default: wait indefinitely)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

impl SourceArgs {
    /// Client configuration described by these arguments.
    pub fn config(&self) -> Result<ClientConfig> {
        let endpoint = EndpointUrl::new(&self.endpoint).context("Invalid endpoint URL")?;
        let mut config = ClientConfig::new(endpoint).with_dataset(&self.dataset);
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Build the city source.
    pub fn build(&self) -> Result<OpenDataSoftSource> {
        OpenDataSoftSource::new(self.config()?).context("Failed to create city source")
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load pages of cities and print them
    List(list::ListArgs),

    /// Load pages of cities and print those matching a query
    Search(search::SearchArgs),

    /// Interactively page through and search cities
    Browse(browse::BrowseArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_public_endpoint() {
        let cli = Cli::try_parse_from(["citytable", "list"]).unwrap();
        let config = cli.source.config().unwrap();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.dataset, DEFAULT_DATASET);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn global_source_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "citytable",
            "search",
            "lon",
            "--endpoint",
            "http://localhost:8080/search",
            "--timeout-secs",
            "3",
        ])
        .unwrap();
        let config = cli.source.config().unwrap();
        assert_eq!(config.endpoint.as_str(), "http://localhost:8080/search");
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn rejects_plain_http_endpoint() {
        let cli = Cli::try_parse_from(["citytable", "--endpoint", "http://example.com", "list"])
            .unwrap();
        assert!(cli.source.build().is_err());
    }
}
