//! `playlists.list` request builder

use super::{clamp_page_size, join_parts, ListRequest};

/// List playlists by id or owning channel
#[derive(Debug, Clone, Default)]
pub struct PlaylistsList {
    parts: Vec<String>,
    ids: Vec<String>,
    channel_id: Option<String>,
    max_results: Option<u32>,
}

impl PlaylistsList {
    /// Create a request with the default `snippet` part
    pub fn new() -> Self {
        Self {
            parts: vec!["snippet".to_string()],
            ..Default::default()
        }
    }

    /// Replace the part selector
    #[must_use]
    pub fn parts<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parts = parts.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by playlist id (repeatable)
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.ids.push(id.into());
        self
    }

    /// List all playlists owned by a channel
    #[must_use]
    pub fn channel_id(mut self, id: impl Into<String>) -> Self {
        self.channel_id = Some(id.into());
        self
    }

    /// Page size, clamped to the API maximum of 50
    #[must_use]
    pub fn max_results(mut self, n: u32) -> Self {
        self.max_results = Some(clamp_page_size(n));
        self
    }
}

impl ListRequest for PlaylistsList {
    fn endpoint(&self) -> &'static str {
        "playlists"
    }

    fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("part".to_string(), join_parts(&self.parts))];
        if !self.ids.is_empty() {
            params.push(("id".to_string(), self.ids.join(",")));
        }
        if let Some(channel) = &self.channel_id {
            params.push(("channelId".to_string(), channel.clone()));
        }
        if let Some(n) = self.max_results {
            params.push(("maxResults".to_string(), n.to_string()));
        }
        params
    }
}
