//! `Retry-After` interpretation for rate-limited responses.
//!
//! Webhook endpoints signal throttling with HTTP 429 and a `Retry-After`
//! header carrying a number of seconds, possibly fractional (e.g. `0.35`).
//! This module turns that header into the delay the send loop waits
//! before its next attempt.

use std::time::Duration;

use crate::error::SendError;

/// Safety margin appended to every server-supplied backoff interval.
///
/// Tolerates clock skew and header rounding so a retry never fires
/// provably before the server's rate-limit window clears.
pub const RETRY_AFTER_MARGIN: Duration = Duration::from_millis(250);

/// Parses a `Retry-After` header value as a number of seconds.
///
/// The header must be present and parse as a finite, non-negative float.
/// Anything else is a protocol violation by the server; per the send
/// contract it is surfaced rather than replaced with a guessed delay.
///
/// # Errors
///
/// Returns [`SendError::RateLimitHeader`] with the offending value (or
/// `""` when the header was absent).
pub fn parse_retry_after(header: Option<&str>) -> Result<f64, SendError> {
    let raw = header.unwrap_or_default();
    let seconds: f64 = raw
        .parse()
        .map_err(|_| SendError::RateLimitHeader(raw.to_string()))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(SendError::RateLimitHeader(raw.to_string()));
    }
    Ok(seconds)
}

/// Computes the delay before the next attempt from a parsed
/// `Retry-After` value.
///
/// The value is split into whole seconds and a fractional remainder
/// expressed in milliseconds, then [`RETRY_AFTER_MARGIN`] is appended
/// unconditionally. `0.5` therefore yields 750 ms, `1.0` yields 1250 ms.
#[must_use]
pub fn delay_for(seconds: f64) -> Duration {
    // seconds is finite and non-negative here; truncation cannot wrap
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = Duration::from_secs(seconds.trunc() as u64);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let frac = Duration::from_millis((seconds.fract() * 1_000.0) as u64);
    whole + frac + RETRY_AFTER_MARGIN
}
