//! Resilient HTTP fetch layer.
//!
//! This module provides types and traits for:
//! - The tagged per-attempt result ([`FetchOutcome`])
//! - Abstracting HTTP transports ([`HttpTransport`], [`HttpResponse`])
//! - Transport error classification ([`TransportError`])
//! - Production transport implementation ([`ReqwestTransport`])
//! - The bounded single-attempt fetcher ([`Fetcher`], [`REQUEST_TIMEOUT`])

mod client;
mod error;
mod fetcher;
mod http;
mod outcome;


pub use client::ReqwestTransport;
pub use error::TransportError;
pub use fetcher::{Fetcher, REQUEST_TIMEOUT};
pub use http::{HttpResponse, HttpTransport};
pub use outcome::FetchOutcome;
