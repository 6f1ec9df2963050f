//! Common types and constants

use serde::Deserialize;

/// An opaque server-returned record for a YouTube entity (channel, video,
/// playlist, ...). The crate never interprets resource contents beyond
/// reading caller-specified field paths.
pub type Resource = serde_json::Value;

/// Base URL of the YouTube Data API v3
pub const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Google OAuth2 token endpoint
pub const OAUTH_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Largest page size the API accepts for `maxResults`
pub const MAX_PAGE_SIZE: u32 = 50;

/// Paging metadata returned alongside every list response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Approximate total number of results in the full result set
    pub total_results: Option<i64>,
    /// Number of results included in this response
    pub results_per_page: Option<i64>,
}
