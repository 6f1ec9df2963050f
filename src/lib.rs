//! # yt-data
//!
//! A client for the YouTube Data API v3.
//!
//! ## Features
//!
//! - **Typed list requests**: Small builders for channels, videos, playlists,
//!   playlist items, comment threads, comments, subscriptions, captions, and
//!   search
//! - **Token pagination**: Follow `nextPageToken` continuations across pages,
//!   with an optional cap on delivered items
//! - **Field access**: Walk dotted paths into raw JSON resources without
//!   modelling every resource shape
//! - **Auth**: API key, bearer token, or OAuth2 refresh-token flow with
//!   cached access tokens
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use yt_data::{PlaylistItemsList, Result, YouTube};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = YouTube::with_api_key("AIza...");
//!
//!     // One resource, one field
//!     let title = client.video_title("dQw4w9WgXcQ").await?;
//!
//!     // A full paginated listing
//!     let request = PlaylistItemsList::new("PL123").max_results(50);
//!     let items = client.list(&request).limit(200).collect().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Errors split into two classes: transport-or-auth failures (the request
//! never produced a usable response) and shape mismatches (the response
//! arrived but did not look like a listing). See [`Error::is_transport`] and
//! [`Error::is_shape_mismatch`]. Requests are issued once; there is no retry
//! or backoff layer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP client
pub mod http;

/// Token-based pagination
pub mod pagination;

/// Field paths into raw JSON resources
pub mod fields;

/// Typed list-request builders
pub mod resources;

/// The YouTube client facade
pub mod client;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{PageInfo, Resource};

pub use client::YouTube;
pub use config::ClientConfig;
pub use fields::FieldPath;
pub use pagination::PagedFetch;
pub use resources::{
    CaptionsList, ChannelsList, CommentThreadsList, CommentsList, ListRequest, PlaylistItemsList,
    PlaylistsList, SearchList, SubscriptionsList, VideosList,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
