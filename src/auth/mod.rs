//! Authentication
//!
//! Produces the authenticated session handle every request goes through.
//! The YouTube Data API accepts either an API key (`key` query parameter)
//! or an OAuth2 bearer token; for the latter a refresh-token grant against
//! the Google token endpoint is supported, with the access token cached
//! until shortly before expiry.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CachedToken};

#[cfg(test)]
mod tests;
