//! Portal configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// External API connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the insurance API (e.g., "http://localhost:8000/api/v1")
    pub base_url: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v1".to_string(),
            connect_timeout_ms: 5000,
            request_timeout_ms: 30000,
        }
    }
}

/// Session persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// File the token pair is persisted to between invocations
    pub token_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_path: PathBuf::from(".portal-session.json"),
        }
    }
}

/// Top-level portal configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PortalConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
}

impl PortalConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = ApiConfig::default();
        let api = ApiConfig {
            base_url: env::var("PORTAL_API_URL").unwrap_or(defaults.base_url),
            connect_timeout_ms: env::var("PORTAL_CONNECT_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.connect_timeout_ms),
            request_timeout_ms: env::var("PORTAL_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
        };

        let session = SessionConfig {
            token_path: env::var("PORTAL_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| SessionConfig::default().token_path),
        };

        Self { api, session }
    }
}
