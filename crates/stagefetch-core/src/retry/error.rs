//! Transport error type for retry classification.

use std::fmt;

/// Error from a single fetch attempt (curl failure, bad HTTP status, or a
/// local write failure). Kept as a concrete type so the retry loop can
/// classify it before the caller converts to anyhow.
#[derive(Debug)]
pub enum TransportError {
    /// Curl reported an error (timeout, connection, DNS, etc.).
    Curl(curl::Error),
    /// HTTP response had a non-2xx status.
    Http(u32),
    /// Writing the response body to local storage failed.
    Write(std::io::Error),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Curl(e) => write!(f, "{}", e),
            TransportError::Http(code) => write!(f, "HTTP {}", code),
            TransportError::Write(e) => write!(f, "write: {}", e),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Curl(e) => Some(e),
            TransportError::Write(e) => Some(e),
            TransportError::Http(_) => None,
        }
    }
}
