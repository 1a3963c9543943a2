//! HTTP client for the records search API.

use reqwest::header::{ACCEPT, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use citytable_core::EndpointUrl;
use citytable_core::error::{ApiError, DecodeError, Error, TransportError};

use crate::config::ClientConfig;
use crate::endpoints::ApiErrorResponse;

/// HTTP client bound to one search endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    endpoint: EndpointUrl,
}

impl SearchClient {
    /// Create a new client from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("citytable/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(transport_error)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Returns the endpoint this client is configured for.
    pub fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Issue a GET request with the given query parameters.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn query<Q, R>(&self, params: &Q) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!("Search query");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(self.endpoint.as_url().clone())
            .query(params)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Handle a response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "Search response");

        if status.is_success() {
            let body = response.bytes().await.map_err(transport_error)?;
            let parsed = serde_json::from_slice::<R>(&body)?;
            Ok(parsed)
        } else {
            Err(Error::Api(self.parse_error_response(response).await))
        }
    }

    /// Parse an API error response.
    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        match response.json::<ApiErrorResponse>().await {
            Ok(body) => ApiError::new(status, body.errorcode, body.error),
            Err(_) => ApiError::new(status, None, None),
        }
    }
}

/// Classify a reqwest failure.
fn transport_error(err: reqwest::Error) -> Error {
    if err.is_decode() {
        Error::Decode(DecodeError::new(err.to_string()))
    } else if err.is_timeout() {
        Error::Transport(TransportError::Timeout {
            message: err.to_string(),
        })
    } else if err.is_connect() {
        Error::Transport(TransportError::Connection {
            message: err.to_string(),
        })
    } else {
        Error::Transport(TransportError::Http {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let config = ClientConfig::default();
        let client = SearchClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), &config.endpoint);
    }
}
