//! API error taxonomy.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by [`crate::api::client::ApiClient`] calls.
///
/// Exactly two cases: the request never completed (no HTTP status), or the
/// server answered with a non-2xx status. Callers decide what either means
/// for the user; the client neither retries nor logs at error level.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connection refused, DNS, interrupted body,
    /// or a 2xx body that failed to deserialize.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status {
        status: StatusCode,
        /// Response body text, empty if the body could not be read.
        body: String,
    },
}

impl ApiError {
    /// The HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(err) => err.status(),
            Self::Status { status, .. } => Some(*status),
        }
    }
}
