//! Error types for yt-data
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Failures fall into two classes: the request itself failed (transport,
//! authorization, quota), or the response did not have the shape the caller
//! required (missing `items`, empty result where one item was expected).

use thiserror::Error;

/// The main error type for yt-data
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration
        message: String,
    },

    #[error("Missing required config field: {field}")]
    MissingConfigField {
        /// Name of the absent field
        field: String,
    },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Transport / Authorization Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YouTube API error (HTTP {status}{}): {message}", reason.as_deref().map(|r| format!(", {r}")).unwrap_or_default())]
    Api {
        /// HTTP status code
        status: u16,
        /// Google error reason, e.g. `quotaExceeded` or `keyInvalid`
        reason: Option<String>,
        /// Human-readable message from the error envelope
        message: String,
    },

    #[error("Authentication failed: {message}")]
    Auth {
        /// What failed
        message: String,
    },

    #[error("Token refresh failed: {message}")]
    TokenRefresh {
        /// What the token endpoint reported
        message: String,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Shape Mismatch Errors
    // ============================================================================
    #[error("Response is missing expected field: {path}")]
    MissingField {
        /// Path of the absent field
        path: String,
    },

    #[error("'{endpoint}' returned no items where one was required")]
    EmptyItems {
        /// Endpoint that returned the empty listing
        endpoint: String,
    },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O and Generic Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing config field error
    pub fn missing_config_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a token refresh error
    pub fn token_refresh(message: impl Into<String>) -> Self {
        Self::TokenRefresh {
            message: message.into(),
        }
    }

    /// Create an API error
    pub fn api(status: u16, reason: Option<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            reason,
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    /// Create an empty items error
    pub fn empty_items(endpoint: impl Into<String>) -> Self {
        Self::EmptyItems {
            endpoint: endpoint.into(),
        }
    }

    /// Check if this error is a failure of the remote call itself
    /// (network, authorization, quota, malformed request)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::Api { .. }
                | Error::Auth { .. }
                | Error::TokenRefresh { .. }
                | Error::InvalidUrl(_)
        )
    }

    /// Check if this error means the response lacked the shape the caller
    /// required
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            Error::MissingField { .. } | Error::EmptyItems { .. } | Error::JsonParse(_)
        )
    }
}

/// Result type alias for yt-data
pub type Result<T> = std::result::Result<T, Error>;
