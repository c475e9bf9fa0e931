//! hooksend: webhook delivery with server-directed rate-limit backoff.
//!
//! A library for POSTing JSON messages to webhook endpoints. When the
//! endpoint answers `429 Too Many Requests`, the send loop reads the
//! `Retry-After` header (fractional seconds), sleeps out the server's
//! window plus a small safety margin, and retries the same message.
//! Every other outcome is terminal on the first occurrence.
//!
//! This crate provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Webhook sending with rate-limit retries ([`WebhookSender`], [`send_message`])
//! - `Retry-After` interpretation ([`backoff`])

pub mod backoff;

mod client;
mod error;
mod http;
mod sender;
mod time;


pub use client::ReqwestClient;
pub use error::{HttpError, SendError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use sender::{WebhookSender, send_message};
pub use time::{InstantSleeper, Sleeper, TokioSleeper};
