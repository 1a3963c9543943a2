//! Client configuration.

use std::time::Duration;

use citytable_core::EndpointUrl;
use citytable_core::error::{Error, InvalidInputError};

/// Dataset holding every GeoNames city with at least 1000 inhabitants.
pub const DEFAULT_DATASET: &str = "geonames-all-cities-with-a-population-1000";

/// Where and how to fetch city pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Records search endpoint.
    pub endpoint: EndpointUrl,

    /// Dataset identifier passed as `dataset=`.
    pub dataset: String,

    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointUrl::default(),
            dataset: DEFAULT_DATASET.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Configuration for the given endpoint with the default dataset.
    pub fn new(endpoint: EndpointUrl) -> Self {
        Self {
            endpoint,
            ..Self::default()
        }
    }

    /// Use a different dataset.
    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = dataset.into();
        self
    }

    /// Bound each request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Check the configuration before building a client.
    pub fn validate(&self) -> Result<(), Error> {
        let dataset = self.dataset.as_str();
        if dataset.is_empty() {
            return Err(InvalidInputError::Dataset {
                value: self.dataset.clone(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if !dataset
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '@')
        {
            return Err(InvalidInputError::Dataset {
                value: self.dataset.clone(),
                reason: "may only contain ASCII letters, digits, '-', '_' and '@'".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
