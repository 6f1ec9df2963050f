//! HTTP client
//!
//! One request-execution helper that every operation funnels through:
//! build the request, apply authentication, send, and classify any failure
//! into the crate error taxonomy. No retry or rate limiting lives at this
//! layer; callers that want a policy add their own.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
