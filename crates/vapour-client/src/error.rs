/// Errors surfaced while talking to the library backend.
///
/// Callers are not expected to distinguish transient from permanent failures;
/// the variants exist so that logs say what went wrong.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{url} returned {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response from {url}")]
    Decode {
        /// The requested URL.
        url: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A record-type tag that does not name a known record kind.
    #[error("unknown record kind: {0:?}")]
    UnknownRecordKind(String),
}

/// Result type used throughout the client.
pub type Result<T, E = FetchError> = std::result::Result<T, E>;
