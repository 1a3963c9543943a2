//! Search endpoint URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Default OpenDataSoft records search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://public.opendatasoft.com/api/records/1.0/search/";

/// A validated city search endpoint URL.
///
/// Endpoints must use HTTPS. Plain HTTP is accepted only for localhost so
/// that tests can point the client at a local mock server.
///
/// # Example
///
/// ```
/// use citytable_core::EndpointUrl;
///
/// let endpoint = EndpointUrl::new("https://public.opendatasoft.com/api/records/1.0/search/").unwrap();
/// assert_eq!(endpoint.host(), Some("public.opendatasoft.com"));
///
/// assert!(EndpointUrl::new("http://example.com/search").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EndpointUrl(Url);

impl EndpointUrl {
    /// Create a new endpoint URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::EndpointUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::EndpointUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::EndpointUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_localhost = url.host_str().is_some_and(is_local_host);

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::EndpointUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.query().is_some() {
            return Err(InvalidInputError::EndpointUrl {
                value: original.to_string(),
                reason: "must not carry a query string".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for EndpointUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"))
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EndpointUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Hosts that may be reached over plain HTTP.
fn is_local_host(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "[::1]" | "::1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_public_endpoint() {
        let endpoint = EndpointUrl::default();
        assert_eq!(endpoint.as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn valid_localhost_http() {
        let endpoint = EndpointUrl::new("http://127.0.0.1:8080/search").unwrap();
        assert_eq!(endpoint.host(), Some("127.0.0.1"));
        assert!(EndpointUrl::new("http://[::1]:8080/search").is_ok());
        assert!(EndpointUrl::new("http://localhost/search").is_ok());
    }

    #[test]
    fn keeps_path() {
        let endpoint = EndpointUrl::new(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(endpoint.as_url().path(), "/api/records/1.0/search/");
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(EndpointUrl::new("http://public.opendatasoft.com/api").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(EndpointUrl::new("/api/records/1.0/search/").is_err());
    }

    #[test]
    fn rejects_query_string() {
        let err = EndpointUrl::new("https://example.com/search?rows=5").unwrap_err();
        assert!(err.to_string().contains("query string"));
    }

    #[test]
    fn local_host_predicate() {
        assert!(is_local_host("localhost"));
        assert!(is_local_host("[::1]"));
        assert!(!is_local_host("localhost.example.com"));
        assert!(!is_local_host("public.opendatasoft.com"));
    }

    #[test]
    fn parses_via_from_str() {
        let endpoint: EndpointUrl = "https://example.com/search".parse().unwrap();
        assert_eq!(endpoint.host(), Some("example.com"));
    }
}
