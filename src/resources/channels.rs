//! `channels.list` request builder

use super::{clamp_page_size, join_parts, ListRequest};

/// List channels by id, handle, or legacy username
#[derive(Debug, Clone, Default)]
pub struct ChannelsList {
    parts: Vec<String>,
    ids: Vec<String>,
    for_handle: Option<String>,
    for_username: Option<String>,
    max_results: Option<u32>,
}

impl ChannelsList {
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

    /// Filter by channel id (repeatable)
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.ids.push(id.into());
        self
    }

    /// Filter by handle, e.g. `@somecreator`
    #[must_use]
    pub fn for_handle(mut self, handle: impl Into<String>) -> Self {
        self.for_handle = Some(handle.into());
        self
    }

    /// Filter by legacy username
    #[must_use]
    pub fn for_username(mut self, username: impl Into<String>) -> Self {
        self.for_username = Some(username.into());
        self
    }

    /// Page size, clamped to the API maximum of 50
    #[must_use]
    pub fn max_results(mut self, n: u32) -> Self {
        self.max_results = Some(clamp_page_size(n));
        self
    }
}

impl ListRequest for ChannelsList {
    fn endpoint(&self) -> &'static str {
        "channels"
    }

    fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("part".to_string(), join_parts(&self.parts))];
        if !self.ids.is_empty() {
            params.push(("id".to_string(), self.ids.join(",")));
        }
        if let Some(handle) = &self.for_handle {
            params.push(("forHandle".to_string(), handle.clone()));
        }
        if let Some(username) = &self.for_username {
            params.push(("forUsername".to_string(), username.clone()));
        }
        if let Some(n) = self.max_results {
            params.push(("maxResults".to_string(), n.to_string()));
        }
        params
    }
}
