//! The YouTube client facade
//!
//! Owns the HTTP client and ties the pieces together: a [`ListRequest`]
//! becomes a [`PagedFetch`], a single-resource lookup becomes [`YouTube::one`],
//! and a handful of named convenience accessors cover the common
//! one-field-out-of-one-resource cases by funnelling through the generic
//! field walker instead of hand-rolling a getter per field.

use crate::auth::AuthConfig;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::fields::{get_string, get_u64};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{ListPage, PagedFetch};
use crate::resources::{ChannelsList, ListRequest, PlaylistItemsList, VideosList};
use crate::types::{Resource, API_BASE_URL};

/// Client for the YouTube Data API v3
pub struct YouTube {
    http: HttpClient,
}

impl YouTube {
    /// Create a client against the production API with the given auth
    pub fn new(auth: AuthConfig) -> Self {
        Self::with_base_url(API_BASE_URL, auth)
    }

    /// Create a client with an API key
    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self::new(AuthConfig::ApiKey { key: key.into() })
    }

    /// Create a client against a custom base URL (mock servers, proxies)
    pub fn with_base_url(base_url: impl Into<String>, auth: AuthConfig) -> Self {
        let config = HttpClientConfig::builder().base_url(base_url).build();
        Self {
            http: HttpClient::with_auth(config, auth),
        }
    }

    /// Create a client from a loaded configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let auth = config.auth()?;
        let mut builder = HttpClientConfig::builder()
            .base_url(config.base_url.as_deref().unwrap_or(API_BASE_URL));
        if let Some(seconds) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(seconds));
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        Ok(Self {
            http: HttpClient::with_auth(builder.build(), auth),
        })
    }

    /// The underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Start a paginated fetch for a list request
    pub fn list<R: ListRequest>(&self, request: &R) -> PagedFetch<'_> {
        PagedFetch::new(&self.http, request.endpoint(), request.params())
    }

    /// Execute a list request expecting exactly one item
    ///
    /// One request is issued, no pagination. A response without an `items`
    /// key is a missing-field error; a present-but-empty `items` is an
    /// empty-items error. Both are shape mismatches, distinct from a field
    /// being absent inside the returned resource.
    pub async fn one<R: ListRequest>(&self, request: &R) -> Result<Resource> {
        let mut config = RequestConfig::new();
        for (key, value) in request.params() {
            config = config.query(key, value);
        }

        let page: ListPage = self
            .http
            .get_json_with_config(request.endpoint(), config)
            .await?;
        let mut items = page.take_items()?;

        if items.is_empty() {
            return Err(Error::empty_items(request.endpoint()));
        }
        Ok(items.remove(0))
    }

    // =========================================================================
    // Convenience accessors
    //
    // `Ok(None)` means the call succeeded but the resource does not carry
    // the field; `Err` means the call itself failed.
    // =========================================================================

    /// Title of a channel
    pub async fn channel_title(&self, channel_id: &str) -> Result<Option<String>> {
        let channel = self.one(&ChannelsList::new().id(channel_id)).await?;
        Ok(get_string(&channel, &"snippet.title".into()))
    }

    /// Subscriber count of a channel, absent when the channel hides it
    pub async fn channel_subscriber_count(&self, channel_id: &str) -> Result<Option<u64>> {
        let channel = self
            .one(&ChannelsList::new().parts(["statistics"]).id(channel_id))
            .await?;
        Ok(get_u64(&channel, &"statistics.subscriberCount".into()))
    }

    /// Id of the channel's auto-generated uploads playlist
    pub async fn channel_uploads_playlist(&self, channel_id: &str) -> Result<Option<String>> {
        let channel = self
            .one(&ChannelsList::new().parts(["contentDetails"]).id(channel_id))
            .await?;
        Ok(get_string(
            &channel,
            &"contentDetails.relatedPlaylists.uploads".into(),
        ))
    }

    /// Title of a video
    pub async fn video_title(&self, video_id: &str) -> Result<Option<String>> {
        let video = self.one(&VideosList::new().id(video_id)).await?;
        Ok(get_string(&video, &"snippet.title".into()))
    }

    /// View count of a video
    pub async fn video_view_count(&self, video_id: &str) -> Result<Option<u64>> {
        let video = self
            .one(&VideosList::new().parts(["statistics"]).id(video_id))
            .await?;
        Ok(get_u64(&video, &"statistics.viewCount".into()))
    }

    /// ISO 8601 duration of a video, e.g. `PT3M33S`
    pub async fn video_duration(&self, video_id: &str) -> Result<Option<String>> {
        let video = self
            .one(&VideosList::new().parts(["contentDetails"]).id(video_id))
            .await?;
        Ok(get_string(&video, &"contentDetails.duration".into()))
    }

    /// Video ids of a playlist, in playlist order, across all pages
    ///
    /// Entries whose `contentDetails.videoId` is absent (deleted or private
    /// videos in some listings) are skipped rather than failing the run.
    pub async fn playlist_item_video_ids(
        &self,
        playlist_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<String>> {
        let request = PlaylistItemsList::new(playlist_id)
            .parts(["contentDetails"])
            .max_results(50);

        let mut fetch = self.list(&request);
        if let Some(cap) = limit {
            fetch = fetch.limit(cap);
        }

        let mut video_ids = Vec::new();
        fetch
            .visit(|item| {
                if let Some(id) = get_string(item, &"contentDetails.videoId".into()) {
                    video_ids.push(id);
                }
            })
            .await?;
        Ok(video_ids)
    }
}

impl std::fmt::Debug for YouTube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTube").field("http", &self.http).finish()
    }
}
