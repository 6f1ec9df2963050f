//! Client configuration
//!
//! A `ClientConfig` can come from a YAML file or from the environment and
//! maps onto an [`AuthConfig`]. File example:
//!
//! ```yaml
//! api_key: AIza...
//! timeout_secs: 20
//! ```
//!
//! or, for OAuth:
//!
//! ```yaml
//! oauth:
//!   client_id: "...apps.googleusercontent.com"
//!   client_secret: "..."
//!   refresh_token: "1//..."
//! ```

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// OAuth2 refresh-token credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OauthConfig {
    /// Token endpoint override; the Google endpoint when absent
    #[serde(default)]
    pub token_url: Option<String>,
    /// Client ID
    pub client_id: String,
    /// Client secret
    pub client_secret: String,
    /// Long-lived refresh token
    pub refresh_token: String,
}

/// Runtime configuration for the client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key; ignored when `oauth` is set
    #[serde(default)]
    pub api_key: Option<String>,
    /// OAuth2 refresh-token credentials
    #[serde(default)]
    pub oauth: Option<OauthConfig>,
    /// API base URL override (mock servers, proxies)
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Assemble configuration from environment variables
    ///
    /// Reads `YOUTUBE_API_KEY`, or the `YOUTUBE_OAUTH_CLIENT_ID` /
    /// `YOUTUBE_OAUTH_CLIENT_SECRET` / `YOUTUBE_OAUTH_REFRESH_TOKEN`
    /// triple.
    pub fn from_env() -> Self {
        let oauth = match (
            std::env::var("YOUTUBE_OAUTH_CLIENT_ID"),
            std::env::var("YOUTUBE_OAUTH_CLIENT_SECRET"),
            std::env::var("YOUTUBE_OAUTH_REFRESH_TOKEN"),
        ) {
            (Ok(client_id), Ok(client_secret), Ok(refresh_token)) => Some(OauthConfig {
                token_url: None,
                client_id,
                client_secret,
                refresh_token,
            }),
            _ => None,
        };

        Self {
            api_key: std::env::var("YOUTUBE_API_KEY").ok(),
            oauth,
            base_url: std::env::var("YOUTUBE_API_BASE_URL").ok(),
            timeout_secs: None,
            user_agent: None,
        }
    }

    /// Map the configuration to an auth configuration
    ///
    /// OAuth credentials win over an API key when both are present.
    pub fn auth(&self) -> Result<AuthConfig> {
        if let Some(oauth) = &self.oauth {
            return Ok(AuthConfig::Oauth2Refresh {
                token_url: oauth.token_url.clone(),
                client_id: oauth.client_id.clone(),
                client_secret: oauth.client_secret.clone(),
                refresh_token: oauth.refresh_token.clone(),
            });
        }
        if let Some(key) = &self.api_key {
            return Ok(AuthConfig::ApiKey { key: key.clone() });
        }
        Err(Error::missing_config_field("api_key"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file_api_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: AIzaTest\ntimeout_secs: 20").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("AIzaTest"));
        assert_eq!(config.timeout_secs, Some(20));
        assert!(config.oauth.is_none());

        assert!(matches!(
            config.auth().unwrap(),
            AuthConfig::ApiKey { key } if key == "AIzaTest"
        ));
    }

    #[test]
    fn test_from_file_oauth() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "oauth:\n  client_id: cid\n  client_secret: secret\n  refresh_token: rt"
        )
        .unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        let auth = config.auth().unwrap();
        assert!(matches!(
            auth,
            AuthConfig::Oauth2Refresh { ref client_id, .. } if client_id == "cid"
        ));
    }

    #[test]
    fn test_from_file_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: [unterminated").unwrap();

        let err = ClientConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ClientConfig::from_file("/nonexistent/youtube.yaml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_auth_requires_credentials() {
        let config = ClientConfig::default();
        let err = config.auth().unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_oauth_wins_over_api_key() {
        let config = ClientConfig {
            api_key: Some("AIzaTest".to_string()),
            oauth: Some(OauthConfig {
                token_url: None,
                client_id: "cid".to_string(),
                client_secret: "secret".to_string(),
                refresh_token: "rt".to_string(),
            }),
            ..Default::default()
        };

        assert!(matches!(
            config.auth().unwrap(),
            AuthConfig::Oauth2Refresh { .. }
        ));
    }
}
