//! `comments.list` request builder

use super::{clamp_page_size, join_parts, ListRequest};

/// List comments by id or by parent thread
#[derive(Debug, Clone, Default)]
pub struct CommentsList {
    parts: Vec<String>,
    ids: Vec<String>,
    parent_id: Option<String>,
    max_results: Option<u32>,
}

impl CommentsList {
    /// Create a request for the replies to a top-level comment
    pub fn replies_to(parent_id: impl Into<String>) -> Self {
        Self {
            parts: vec!["snippet".to_string()],
            parent_id: Some(parent_id.into()),
            ..Default::default()
        }
    }

    /// Create a request for specific comment ids
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

    /// Page size, clamped to the API maximum of 50
    #[must_use]
    pub fn max_results(mut self, n: u32) -> Self {
        self.max_results = Some(clamp_page_size(n));
        self
    }
}

impl ListRequest for CommentsList {
    fn endpoint(&self) -> &'static str {
        "comments"
    }

    fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("part".to_string(), join_parts(&self.parts))];
        if !self.ids.is_empty() {
            params.push(("id".to_string(), self.ids.join(",")));
        }
        if let Some(parent) = &self.parent_id {
            params.push(("parentId".to_string(), parent.clone()));
        }
        if let Some(n) = self.max_results {
            params.push(("maxResults".to_string(), n.to_string()));
        }
        params
    }
}
