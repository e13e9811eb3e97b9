use serde::{Deserialize, Serialize};

/// Configuration for the remote-document (WebDAV) backup transport.
///
/// Persisted as JSON under its fixed local-store key. Credentials are stored
/// in the clear, matching the rest of the local cache.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteBackupConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub enabled: bool,
}

impl RemoteBackupConfig {
    /// A config with no base URL cannot be used by any transport operation.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }
}
