//! Sleep abstraction for testability.
//!
//! This module provides a [`Sleeper`] trait that allows injecting no-op
//! sleepers in tests while using real tokio timers in production. The
//! webhook send loop takes its backoff delays through this seam, so
//! rate-limit behavior can be asserted without actually waiting.

use std::time::Duration;

/// Abstraction over sleeping for testability.
///
/// Implementations suspend the calling task for (at least) the requested
/// duration. Tests inject a sleeper that records the request and returns
/// immediately.
pub trait Sleeper: Send + Sync {
    /// Suspends the current task for the given duration.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Production sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately without waiting.
///
/// Useful in tests where real delays would slow the suite down.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}
