//! Error types for mochimo-rosetta.
//!
//! Three failure kinds are distinguished and never conflated:
//!
//! - [`Error::Http`] — the request never produced a response body
//!   (DNS, connection refused, socket timeout)
//! - [`Error::Api`] — the node answered with a Rosetta error envelope,
//!   regardless of the HTTP status line
//! - the timeout variants — a mempool wait ran out of its deadline

use thiserror::Error;

/// Errors returned by the Rosetta client.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure before a response body was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The node answered with a Rosetta error envelope.
    ///
    /// `message` is the remote message verbatim; `retriable` is the node's
    /// own claim about whether the identical request may be retried.
    #[error("Rosetta API error: {message} (code {code})")]
    Api {
        code: i64,
        message: String,
        retriable: bool,
    },

    /// The response body was not valid JSON, or did not match the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A mempool lookup failed after the wait deadline had already passed.
    #[error("Transaction {hash} not found in mempool after {timeout_ms}ms")]
    MempoolTimeout { hash: String, timeout_ms: u64 },

    /// The wait loop ran out of time without observing the transaction.
    #[error("Timeout waiting for transaction {hash}")]
    WaitTimeout { hash: String },

    /// The wait was cancelled through its cancellation signal.
    #[error("Wait for transaction {hash} was cancelled")]
    Cancelled { hash: String },
}

impl Error {
    /// True for either timeout exit of a mempool wait.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Error::MempoolTimeout { .. } | Error::WaitTimeout { .. }
        )
    }

    /// Check if the failed request may be retried unchanged.
    pub fn is_retriable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::Api { retriable, .. } => *retriable,
            _ => false,
        }
    }
}
