//! Webhook sender: the send-with-retry loop.

use serde::Serialize;

use crate::backoff;
use crate::client::ReqwestClient;
use crate::error::SendError;
use crate::http::{HttpClient, HttpRequest};
use crate::time::{Sleeper, TokioSleeper};

/// Webhook client that delivers JSON messages and honors server-directed
/// rate-limit backoff.
///
/// [`send`] POSTs the serialized message to the endpoint. A `429` response
/// triggers a sleep for the server's `Retry-After` interval (plus a fixed
/// margin) followed by a retry of the identical message; this repeats for
/// as long as the server keeps answering `429`. Every other response or
/// failure ends the call immediately.
///
/// The client is reusable across calls and carries no per-message state.
/// Concurrent [`send`] calls on a shared sender are independent.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `S`: The sleeper implementation for backoff delays (defaults to
///   [`TokioSleeper`])
///
/// # Example
///
/// ```no_run
/// use hooksend::WebhookSender;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Message<'a> {
///     content: &'a str,
/// }
///
/// # async fn example() -> Result<(), hooksend::SendError> {
/// let sender = WebhookSender::new();
/// sender
///     .send("https://example.com/webhook", &Message { content: "deploy done" })
///     .await?;
/// # Ok(())
/// # }
/// ```
///
/// [`send`]: WebhookSender::send
#[derive(Debug)]
pub struct WebhookSender<H = ReqwestClient, S = TokioSleeper> {
    client: H,
    sleeper: S,
}

impl WebhookSender<ReqwestClient, TokioSleeper> {
    /// Creates a sender with a default [`ReqwestClient`] and tokio timers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_client(ReqwestClient::new())
    }

    /// Creates a sender whose requests are routed through the given HTTP
    /// proxy.
    ///
    /// The proxy applies to every attempt, including rate-limit retries.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::RequestConstruction`] if the underlying client
    /// cannot be built with the proxy.
    pub fn with_proxy(proxy: &url::Url) -> Result<Self, SendError> {
        Ok(Self::with_client(ReqwestClient::with_proxy(proxy)?))
    }
}

impl Default for WebhookSender<ReqwestClient, TokioSleeper> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> WebhookSender<H, TokioSleeper> {
    /// Creates a sender with a caller-supplied HTTP client.
    ///
    /// Useful for injecting a long-lived, custom-configured client, or a
    /// mock in tests.
    #[must_use]
    pub const fn with_client(client: H) -> Self {
        Self {
            client,
            sleeper: TokioSleeper,
        }
    }
}

impl<H, S> WebhookSender<H, S> {
    /// Sets a custom sleeper for backoff delays.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> WebhookSender<H, S2> {
        WebhookSender {
            client: self.client,
            sleeper,
        }
    }
}

impl<H: HttpClient, S: Sleeper> WebhookSender<H, S> {
    /// Sends `message` to `endpoint` as a JSON POST, retrying while the
    /// server answers `429 Too Many Requests`.
    ///
    /// Blocks the calling task for the whole operation, including backoff
    /// sleeps. Under sustained throttling there is no attempt cap or
    /// deadline; the loop runs until the server stops answering 429. A
    /// caller wanting a bound must impose one around the whole call.
    ///
    /// # Errors
    ///
    /// - [`SendError::EmptyEndpoint`]: `endpoint` is empty; no request is made.
    /// - [`SendError::RequestConstruction`]: `endpoint` is not a valid URL.
    /// - [`SendError::Serialize`]: `message` could not be encoded.
    /// - [`SendError::Transport`]: network-level failure; not retried.
    /// - [`SendError::RateLimitHeader`]: 429 without a parsable `Retry-After`.
    /// - [`SendError::UnexpectedStatus`]: any status outside {200, 204, 429}.
    pub async fn send<M: Serialize>(&self, endpoint: &str, message: &M) -> Result<(), SendError> {
        if endpoint.is_empty() {
            return Err(SendError::EmptyEndpoint);
        }

        let url = url::Url::parse(endpoint)
            .map_err(|e| SendError::RequestConstruction(e.to_string()))?;

        loop {
            // Each attempt encodes and sends the same message value.
            let payload = serde_json::to_vec(message)?;
            let request = HttpRequest::post_json(url.clone(), payload);

            let response = self
                .client
                .request(request)
                .await
                .map_err(SendError::Transport)?;

            match response.status.as_u16() {
                200 | 204 => {
                    tracing::debug!(status = %response.status, url = %url, "webhook delivered");
                    return Ok(());
                }
                429 => {
                    let seconds = backoff::parse_retry_after(response.retry_after())?;
                    let delay = backoff::delay_for(seconds);
                    tracing::warn!(
                        retry_after_secs = seconds,
                        delay = ?delay,
                        url = %url,
                        "webhook rate limited, backing off"
                    );
                    self.sleeper.sleep(delay).await;
                }
                _ => return Err(SendError::UnexpectedStatus(response.status)),
            }
        }
    }
}

/// One-shot webhook send with a per-call HTTP client.
///
/// Convenience wrapper over [`WebhookSender`] for callers that do not
/// want to hold a client: builds a fresh [`ReqwestClient`] (through
/// `proxy` when supplied), sends, and drops it.
///
/// # Errors
///
/// Same surface as [`WebhookSender::send`], plus
/// [`SendError::RequestConstruction`] if the proxy is rejected.
pub async fn send_message<M: Serialize>(
    endpoint: &str,
    message: &M,
    proxy: Option<&url::Url>,
) -> Result<(), SendError> {
    let sender = match proxy {
        Some(proxy) => WebhookSender::with_proxy(proxy)?,
        None => WebhookSender::new(),
    };
    sender.send(endpoint, message).await
}
