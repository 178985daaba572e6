//! Error types and handling for datapipe streams.
//!
//! Upstream exhaustion is not an error; it is signaled through the
//! `Ok(None)` end marker. Everything here is a genuine failure, and a
//! failure leaves the stage it surfaced from unusable.

use std::fmt;

/// Main error type for stream operations
#[derive(Debug, Clone, PartialEq)]
pub enum StreamError {
    /// A map transform or filter predicate failed while being evaluated
    Transform(String),
    /// I/O related errors raised by leaf producers
    IO(String),
    /// Custom error with message
    Custom(String),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Transform(msg) => write!(f, "Transform error: {}", msg),
            StreamError::IO(msg) => write!(f, "IO error: {}", msg),
            StreamError::Custom(msg) => write!(f, "Stream error: {}", msg),
        }
    }
}

impl std::error::Error for StreamError {}

impl From<std::io::Error> for StreamError {
    fn from(err: std::io::Error) -> Self {
        StreamError::IO(err.to_string())
    }
}

/// Result type for stream operations
pub type StreamResult<T> = Result<T, StreamError>;
