//! `subscriptions.list` request builder

use super::{clamp_page_size, join_parts, ListRequest};

/// List a channel's subscriptions
#[derive(Debug, Clone, Default)]
pub struct SubscriptionsList {
    parts: Vec<String>,
    channel_id: Option<String>,
    mine: bool,
    max_results: Option<u32>,
}

impl SubscriptionsList {
    /// Create a request for a channel's subscriptions
    pub fn for_channel(channel_id: impl Into<String>) -> Self {
        Self {
            parts: vec!["snippet".to_string()],
            channel_id: Some(channel_id.into()),
            ..Default::default()
        }
    }

    /// Create a request for the authenticated user's subscriptions
    /// (requires OAuth)
    pub fn mine() -> Self {
        Self {
            parts: vec!["snippet".to_string()],
            mine: true,
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

    /// Page size, clamped to the API maximum of 50
    #[must_use]
    pub fn max_results(mut self, n: u32) -> Self {
        self.max_results = Some(clamp_page_size(n));
        self
    }
}

impl ListRequest for SubscriptionsList {
    fn endpoint(&self) -> &'static str {
        "subscriptions"
    }

    fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("part".to_string(), join_parts(&self.parts))];
        if let Some(channel) = &self.channel_id {
            params.push(("channelId".to_string(), channel.clone()));
        }
        if self.mine {
            params.push(("mine".to_string(), "true".to_string()));
        }
        if let Some(n) = self.max_results {
            params.push(("maxResults".to_string(), n.to_string()));
        }
        params
    }
}
