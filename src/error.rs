//! Error types.
//!
//! Two distinct failure domains:
//!
//! - [`Error`] — infrastructure failures while running the server itself
//!   (binding a port, accepting a connection). These end up in `main`.
//! - [`FetchError`] — failures talking to the World Bank on behalf of one
//!   request. These become a `500` response and never escape the handler.
//!
//! Application-level outcomes that are not failures at all (unknown
//! indicator, empty data set) are expressed as HTTP responses directly.

use std::fmt;

use thiserror::Error as ThisError;

/// The error type returned by the server's fallible operations.
#[derive(Debug)]
pub struct Error(std::io::Error);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "io: {}", self.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self(e)
    }
}

/// What went wrong fetching an indicator series from the World Bank.
///
/// The `Display` text of each variant is the stable, client-facing category
/// message embedded in the `500` body. Transport and decode details stay in
/// the `source` chain for logs; they are never surfaced to clients.
#[derive(Debug, ThisError)]
pub enum FetchError {
    /// The outbound GET failed: DNS, connect, TLS, or a broken transfer.
    #[error("upstream request failed")]
    Request(#[source] reqwest::Error),
    /// The upstream body was not parseable JSON.
    #[error("upstream returned invalid JSON")]
    Decode(#[source] serde_json::Error),
}
