//! `captions.list` request builder

use super::{join_parts, ListRequest};

/// List the caption tracks of a video
///
/// The endpoint returns all tracks in one response and never emits a page
/// token, so it terminates after a single request when run through the
/// pagination loop.
#[derive(Debug, Clone)]
pub struct CaptionsList {
    parts: Vec<String>,
    video_id: String,
}

impl CaptionsList {
    /// Create a request for a video's caption tracks
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            parts: vec!["snippet".to_string()],
            video_id: video_id.into(),
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
}

impl ListRequest for CaptionsList {
    fn endpoint(&self) -> &'static str {
        "captions"
    }

    fn params(&self) -> Vec<(String, String)> {
        vec![
            ("part".to_string(), join_parts(&self.parts)),
            ("videoId".to_string(), self.video_id.clone()),
        ]
    }
}
