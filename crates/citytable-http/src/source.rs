//! OpenDataSoft-backed city source.

use async_trait::async_trait;
use tracing::{debug, instrument};

use citytable_core::{CityRecord, CitySource, EndpointUrl, Offset, PAGE_SIZE, Page, Result};

use crate::client::SearchClient;
use crate::config::ClientConfig;
use crate::endpoints::{SearchQuery, SearchResponse};

/// Fetches city pages from the OpenDataSoft records search API.
#[derive(Debug, Clone)]
pub struct OpenDataSoftSource {
    client: SearchClient,
    dataset: String,
}

impl OpenDataSoftSource {
    /// Create a source from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = SearchClient::new(&config)?;
        Ok(Self {
            client,
            dataset: config.dataset,
        })
    }

    /// Returns the endpoint this source queries.
    pub fn endpoint(&self) -> &EndpointUrl {
        self.client.endpoint()
    }

    /// Returns the dataset this source queries.
    pub fn dataset(&self) -> &str {
        &self.dataset
    }
}

#[async_trait]
impl CitySource for OpenDataSoftSource {
    #[instrument(skip(self), fields(dataset = %self.dataset))]
    async fn fetch_page(&self, offset: Offset) -> Result<Page> {
        debug!(%offset, "Fetching city page");

        let query = SearchQuery {
            dataset: &self.dataset,
            q: "",
            rows: PAGE_SIZE,
            start: offset.get(),
        };

        let response: SearchResponse = self.client.query(&query).await?;

        debug!(
            returned = response.records.len(),
            total = ?response.nhits,
            "City page received"
        );

        let records = response
            .records
            .into_iter()
            .map(|entry| CityRecord::from(entry.fields))
            .collect();

        Ok(Page::new(records))
    }
}
