//! `commentThreads.list` request builder

use super::{clamp_page_size, join_parts, ListRequest};

/// Ordering of comment threads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadOrder {
    /// Most recent first (API default)
    Time,
    /// Highest relevance first
    Relevance,
}

impl ThreadOrder {
    fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Relevance => "relevance",
        }
    }
}

/// List top-level comment threads of a video or channel
#[derive(Debug, Clone, Default)]
pub struct CommentThreadsList {
    parts: Vec<String>,
    video_id: Option<String>,
    all_threads_related_to_channel_id: Option<String>,
    order: Option<ThreadOrder>,
    search_terms: Option<String>,
    max_results: Option<u32>,
}

impl CommentThreadsList {
    /// Create a request for a video's comment threads
    pub fn for_video(video_id: impl Into<String>) -> Self {
        Self {
            parts: vec!["snippet".to_string()],
            video_id: Some(video_id.into()),
            ..Default::default()
        }
    }

    /// Create a request for all threads related to a channel
    pub fn for_channel(channel_id: impl Into<String>) -> Self {
        Self {
            parts: vec!["snippet".to_string()],
            all_threads_related_to_channel_id: Some(channel_id.into()),
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

    /// Set the thread ordering
    #[must_use]
    pub fn order(mut self, order: ThreadOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Only threads matching the given search terms
    #[must_use]
    pub fn search_terms(mut self, terms: impl Into<String>) -> Self {
        self.search_terms = Some(terms.into());
        self
    }

    /// Page size, clamped to the API maximum of 50
    #[must_use]
    pub fn max_results(mut self, n: u32) -> Self {
        self.max_results = Some(clamp_page_size(n));
        self
    }
}

impl ListRequest for CommentThreadsList {
    fn endpoint(&self) -> &'static str {
        "commentThreads"
    }

    fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("part".to_string(), join_parts(&self.parts))];
        if let Some(video) = &self.video_id {
            params.push(("videoId".to_string(), video.clone()));
        }
        if let Some(channel) = &self.all_threads_related_to_channel_id {
            params.push((
                "allThreadsRelatedToChannelId".to_string(),
                channel.clone(),
            ));
        }
        if let Some(order) = self.order {
            params.push(("order".to_string(), order.as_str().to_string()));
        }
        if let Some(terms) = &self.search_terms {
            params.push(("searchTerms".to_string(), terms.clone()));
        }
        if let Some(n) = self.max_results {
            params.push(("maxResults".to_string(), n.to_string()));
        }
        params
    }
}
