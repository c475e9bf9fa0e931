//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong at the network level without dictating
/// recovery strategy. The send loop surfaces these to the caller
/// unchanged; it never retries them itself.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// This typically indicates a configuration error rather than
    /// a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Terminal error for a webhook send operation.
///
/// Exactly one of these (or success) is produced per [`send`] call.
/// Only HTTP 429 is handled internally via retry; every variant here
/// propagates on first occurrence.
///
/// [`send`]: crate::WebhookSender::send
#[derive(Debug, Error)]
pub enum SendError {
    /// The endpoint URL was empty. Caller bug, detected before any
    /// serialization or network I/O.
    #[error("empty webhook URL")]
    EmptyEndpoint,

    /// The message could not be encoded as JSON.
    #[error("failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The request (or the client carrying it) could not be built.
    ///
    /// Covers unparsable endpoint URLs and proxy configuration the
    /// HTTP client rejects.
    #[error("failed to build request: {0}")]
    RequestConstruction(String),

    /// Network-level failure while sending the request.
    #[error("transport error: {0}")]
    Transport(#[source] HttpError),

    /// The server answered 429 but its `Retry-After` header was missing
    /// or not a non-negative number of seconds.
    ///
    /// Surfaced immediately rather than guessing a fallback delay the
    /// server never supplied.
    #[error("invalid Retry-After header: {0:?}")]
    RateLimitHeader(String),

    /// The server answered with a status outside {200, 204, 429}.
    #[error("HTTP request failed with status {0}")]
    UnexpectedStatus(http::StatusCode),
}

impl From<HttpError> for SendError {
    fn from(e: HttpError) -> Self {
        Self::Transport(e)
    }
}
