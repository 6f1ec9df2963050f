//! Authenticator implementation
//!
//! Applies authentication to outgoing requests and manages token refresh.

use super::types::{AuthConfig, CachedToken};
use crate::error::{Error, Result};
use crate::types::OAUTH_TOKEN_URL;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Authenticator handles applying authentication to HTTP requests
pub struct Authenticator {
    /// Auth configuration
    config: AuthConfig,
    /// Cached access token for the refresh-token flow
    cached_token: Arc<RwLock<Option<CachedToken>>>,
    /// HTTP client for token requests
    http_client: Client,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            cached_token: Arc::new(RwLock::new(None)),
            http_client: Client::new(),
        }
    }

    /// Create an authenticator with a custom HTTP client
    pub fn with_client(config: AuthConfig, http_client: Client) -> Self {
        Self {
            config,
            cached_token: Arc::new(RwLock::new(None)),
            http_client,
        }
    }

    /// Apply authentication to a request builder
    pub async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        match &self.config {
            AuthConfig::None => Ok(req),

            AuthConfig::ApiKey { key } => Ok(req.query(&[("key", key.as_str())])),

            AuthConfig::Bearer { token } => Ok(req.bearer_auth(token)),

            AuthConfig::Oauth2Refresh { .. } => {
                let token = self.get_or_refresh_token().await?;
                Ok(req.bearer_auth(token))
            }
        }
    }

    /// Get a valid access token, refreshing if necessary
    async fn get_or_refresh_token(&self) -> Result<String> {
        // Check if we have a valid cached token
        {
            let cached = self.cached_token.read().await;
            if let Some(token) = cached.as_ref() {
                if !token.is_expired() {
                    return Ok(token.token.clone());
                }
            }
        }

        // Need to refresh - acquire write lock
        let mut cached = self.cached_token.write().await;

        // Double-check after acquiring write lock (another task might have refreshed)
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.token.clone());
            }
        }

        let new_token = self.fetch_new_token().await?;
        let token_str = new_token.token.clone();
        *cached = Some(new_token);

        Ok(token_str)
    }

    /// Exchange the refresh token for a fresh access token
    async fn fetch_new_token(&self) -> Result<CachedToken> {
        let AuthConfig::Oauth2Refresh {
            token_url,
            client_id,
            client_secret,
            refresh_token,
        } = &self.config
        else {
            return Err(Error::auth("no token flow configured"));
        };

        let url = token_url.as_deref().unwrap_or(OAUTH_TOKEN_URL);
        debug!("Refreshing access token via {}", url);

        let params = [
            ("grant_type", "refresh_token"),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("refresh_token", refresh_token.as_str()),
        ];

        let response = self
            .http_client
            .post(url)
            .form(&params)
            .send()
            .await
            .map_err(|e| Error::token_refresh(format!("token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::token_refresh(format!(
                "token endpoint returned HTTP {}: {}",
                status.as_u16(),
                body.trim()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::token_refresh(format!("malformed token response: {e}")))?;

        Ok(match token.expires_in {
            Some(seconds) => CachedToken::expires_in(token.access_token, seconds),
            None => CachedToken::new(token.access_token, None),
        })
    }
}
