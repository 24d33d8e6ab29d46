//! Server configuration from environment variables.

use serde::{Deserialize, Serialize};

/// Top-level Docsift configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsiftConfig {
    /// HTTP server port.
    pub port: u16,
    /// Per-file upload limit in megabytes.
    pub max_upload_mb: usize,
}

impl DocsiftConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8093);

        let max_upload_mb = std::env::var("DOCSIFT_MAX_UPLOAD_MB")
            .ok()
            .and_then(|m| m.parse().ok())
            .unwrap_or(200);

        Self { port, max_upload_mb }
    }

    /// Upload limit in bytes, for the HTTP body-size layer.
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

impl Default for DocsiftConfig {
    fn default() -> Self {
        Self {
            port: 8093,
            max_upload_mb: 200,
        }
    }
}
