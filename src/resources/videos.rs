//! `videos.list` request builder

use super::{clamp_page_size, join_parts, ListRequest};

/// List videos by id or by chart
#[derive(Debug, Clone, Default)]
pub struct VideosList {
    parts: Vec<String>,
    ids: Vec<String>,
    chart: Option<String>,
    region_code: Option<String>,
    max_results: Option<u32>,
}

impl VideosList {
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

    /// Filter by video id (repeatable)
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.ids.push(id.into());
        self
    }

    /// Select the `mostPopular` chart
    #[must_use]
    pub fn most_popular(mut self) -> Self {
        self.chart = Some("mostPopular".to_string());
        self
    }

    /// Region for chart listings, e.g. `US`
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

impl ListRequest for VideosList {
    fn endpoint(&self) -> &'static str {
        "videos"
    }

    fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("part".to_string(), join_parts(&self.parts))];
        if !self.ids.is_empty() {
            params.push(("id".to_string(), self.ids.join(",")));
        }
        if let Some(chart) = &self.chart {
            params.push(("chart".to_string(), chart.clone()));
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
