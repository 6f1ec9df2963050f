//! `playlistItems.list` request builder

use super::{clamp_page_size, join_parts, ListRequest};

/// List the items of a playlist
#[derive(Debug, Clone, Default)]
pub struct PlaylistItemsList {
    parts: Vec<String>,
    playlist_id: Option<String>,
    ids: Vec<String>,
    video_id: Option<String>,
    max_results: Option<u32>,
}

impl PlaylistItemsList {
    /// Create a request for a playlist with the default `snippet` part
    pub fn new(playlist_id: impl Into<String>) -> Self {
        Self {
            parts: vec!["snippet".to_string()],
            playlist_id: Some(playlist_id.into()),
            ..Default::default()
        }
    }

    /// Create a request for specific playlist-item ids
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            parts: vec!["snippet".to_string()],
            ids: vec![id.into()],
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

    /// Restrict to entries for one video
    #[must_use]
    pub fn video_id(mut self, id: impl Into<String>) -> Self {
        self.video_id = Some(id.into());
        self
    }

    /// Page size, clamped to the API maximum of 50
    #[must_use]
    pub fn max_results(mut self, n: u32) -> Self {
        self.max_results = Some(clamp_page_size(n));
        self
    }
}

impl ListRequest for PlaylistItemsList {
    fn endpoint(&self) -> &'static str {
        "playlistItems"
    }

    fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("part".to_string(), join_parts(&self.parts))];
        if let Some(playlist) = &self.playlist_id {
            params.push(("playlistId".to_string(), playlist.clone()));
        }
        if !self.ids.is_empty() {
            params.push(("id".to_string(), self.ids.join(",")));
        }
        if let Some(video) = &self.video_id {
            params.push(("videoId".to_string(), video.clone()));
        }
        if let Some(n) = self.max_results {
            params.push(("maxResults".to_string(), n.to_string()));
        }
        params
    }
}
