//! Auth configuration types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication (mock servers, tests)
    #[default]
    None,

    /// API key sent as the `key` query parameter
    ApiKey {
        /// The API key value
        key: String,
    },

    /// Static bearer token
    Bearer {
        /// The bearer token
        token: String,
    },

    /// OAuth2 refresh-token grant against the Google token endpoint
    Oauth2Refresh {
        /// Token endpoint URL (defaults to the Google endpoint when absent)
        token_url: Option<String>,
        /// Client ID
        client_id: String,
        /// Client secret
        client_secret: String,
        /// Long-lived refresh token
        refresh_token: String,
    },
}

/// Cached access token with expiration
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a new cached token
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// Create a token that expires in N seconds from now
    pub fn expires_in(token: String, seconds: i64) -> Self {
        let expires_at = Utc::now() + chrono::Duration::seconds(seconds);
        Self {
            token,
            expires_at: Some(expires_at),
        }
    }

    /// Check if the token is expired (with 30 second buffer)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let buffer = chrono::Duration::seconds(30);
                Utc::now() + buffer >= expires_at
            }
            None => false, // No expiration = never expires
        }
    }
}
