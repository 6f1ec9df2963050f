//! `search.list` request builder

use super::{clamp_page_size, join_parts, ListRequest};
use chrono::{DateTime, Utc};

/// Result type filter for searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Only videos
    Video,
    /// Only channels
    Channel,
    /// Only playlists
    Playlist,
}

impl SearchType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Channel => "channel",
            Self::Playlist => "playlist",
        }
    }
}

/// Ordering of search results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrder {
    /// By relevance (API default)
    Relevance,
    /// Newest first
    Date,
    /// Most views first
    ViewCount,
    /// Highest rating first
    Rating,
}

impl SearchOrder {
    fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Date => "date",
            Self::ViewCount => "viewCount",
            Self::Rating => "rating",
        }
    }
}

/// Search for videos, channels, or playlists
#[derive(Debug, Clone, Default)]
pub struct SearchList {
    query: Option<String>,
    channel_id: Option<String>,
    search_type: Option<SearchType>,
    order: Option<SearchOrder>,
    published_after: Option<DateTime<Utc>>,
    region_code: Option<String>,
    max_results: Option<u32>,
}

impl SearchList {
    /// Create a search for the given terms
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Restrict results to one channel
    #[must_use]
    pub fn channel_id(mut self, id: impl Into<String>) -> Self {
        self.channel_id = Some(id.into());
        self
    }

    /// Restrict the result type
    #[must_use]
    pub fn search_type(mut self, t: SearchType) -> Self {
        self.search_type = Some(t);
        self
    }

    /// Set the result ordering
    #[must_use]
    pub fn order(mut self, order: SearchOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Only resources published after the given instant
    #[must_use]
    pub fn published_after(mut self, instant: DateTime<Utc>) -> Self {
        self.published_after = Some(instant);
        self
    }

    /// Region for the search, e.g. `US`
    #[must_use]
    pub fn region_code(mut self, code: impl Into<String>) -> Self {
        self.region_code = Some(code.into());
        self
    }

    /// Page size, clamped to the API maximum of 50
    #[must_use]
    pub fn max_results(mut self, n: u32) -> Self {
        self.max_results = Some(clamp_page_size(n));
        self
    }
}

impl ListRequest for SearchList {
    fn endpoint(&self) -> &'static str {
        "search"
    }

    fn params(&self) -> Vec<(String, String)> {
        // search.list only supports the snippet part
        let mut params = vec![("part".to_string(), join_parts(["snippet"]))];
        if let Some(query) = &self.query {
            params.push(("q".to_string(), query.clone()));
        }
        if let Some(channel) = &self.channel_id {
            params.push(("channelId".to_string(), channel.clone()));
        }
        if let Some(t) = self.search_type {
            params.push(("type".to_string(), t.as_str().to_string()));
        }
        if let Some(order) = self.order {
            params.push(("order".to_string(), order.as_str().to_string()));
        }
        if let Some(instant) = self.published_after {
            params.push((
                "publishedAfter".to_string(),
                instant.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            ));
        }
        if let Some(code) = &self.region_code {
            params.push(("regionCode".to_string(), code.clone()));
        }
        if let Some(n) = self.max_results {
            params.push(("maxResults".to_string(), n.to_string()));
        }
        params
    }
}
