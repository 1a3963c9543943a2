//! Error types for citytable.
//!
//! A single error type with explicit variants for transport, API,
//! decoding and input validation failures. The table collapses all of
//! them into "fetch failed", but callers driving a [`CitySource`]
//! directly can still tell them apart.
//!
//! [`CitySource`]: crate::CitySource

use std::fmt;
use thiserror::Error;

/// The unified error type for citytable operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The search API answered with a non-success status.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The response body could not be decoded into city records.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Input validation errors (endpoint URL, dataset name).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Error answered by the search API.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Numeric API error code (if present).
    pub code: Option<i64>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, code: Option<i64>, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// Check if the API refused the request because of its call quota.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// Response body decoding errors.
#[derive(Debug, Error)]
#[error("malformed search response: {message}")]
pub struct DecodeError {
    pub message: String,
}

impl DecodeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(DecodeError::new(err.to_string()))
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid endpoint URL.
    #[error("invalid endpoint URL '{value}': {reason}")]
    EndpointUrl { value: String, reason: String },

    /// Invalid dataset identifier.
    #[error("invalid dataset '{value}': {reason}")]
    Dataset { value: String, reason: String },
}
