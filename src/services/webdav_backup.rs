//! Remote-document backup transport for CloudNav.
//!
//! PUTs/GETs the `{links, categories}` snapshot as a fixed-name JSON
//! document at a configured WebDAV-style base location, with HTTP Basic
//! authentication. The connectivity check is a metadata-only PROPFIND.
//! No retry, no backoff, no partial-success handling anywhere here.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::Method;

use crate::types::backup::BackupDocument;
use crate::types::config::RemoteBackupConfig;
use crate::types::errors::BackupError;

/// Fixed document name under the configured base URL.
pub const BACKUP_FILENAME: &str = "cloudnav_backup.json";

/// Trait defining remote-document backup operations.
pub trait WebDavBackupTrait {
    fn check_connection(&self, config: &RemoteBackupConfig) -> Result<(), BackupError>;
    fn upload(&self, config: &RemoteBackupConfig, doc: &BackupDocument) -> Result<(), BackupError>;
    fn download(&self, config: &RemoteBackupConfig) -> Result<Option<BackupDocument>, BackupError>;
}

/// WebDAV backup transport over blocking HTTP.
pub struct WebDavBackup {
    client: Client,
}

impl WebDavBackup {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Full URL of the backup document for a given base location.
    pub fn backup_url(base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), BACKUP_FILENAME)
    }

    /// `Authorization: Basic` header value for a username/password pair.
    pub fn basic_auth(username: &str, password: &str) -> String {
        format!(
            "Basic {}",
            BASE64.encode(format!("{}:{}", username, password))
        )
    }

    /// The PROPFIND probe accepts either Multi-Status or plain OK; servers
    /// differ on which they answer for a depth-0 probe.
    pub fn is_probe_success(status: u16) -> bool {
        status == 207 || status == 200
    }

    /// Upload accepts any success-ish status: OK, Created, or No Content.
    pub fn is_upload_success(status: u16) -> bool {
        matches!(status, 200 | 201 | 204)
    }

    fn require_usable(config: &RemoteBackupConfig) -> Result<(), BackupError> {
        if !config.is_configured() {
            return Err(BackupError::NotConfigured);
        }
        if !config.enabled {
            return Err(BackupError::Disabled);
        }
        Ok(())
    }
}

impl Default for WebDavBackup {
    fn default() -> Self {
        Self::new()
    }
}

impl WebDavBackupTrait for WebDavBackup {
    /// Issues a metadata-only PROPFIND (depth 0) against the base URL.
    ///
    /// The probe runs even when backup is disabled, so the user can verify
    /// credentials before turning it on.
    fn check_connection(&self, config: &RemoteBackupConfig) -> Result<(), BackupError> {
        if !config.is_configured() {
            return Err(BackupError::NotConfigured);
        }

        let method = Method::from_bytes(b"PROPFIND")
            .map_err(|e| BackupError::NetworkError(e.to_string()))?;
        let response = self
            .client
            .request(method, &config.url)
            .header(AUTHORIZATION, Self::basic_auth(&config.username, &config.password))
            .header("Depth", "0")
            .send()
            .map_err(|e| BackupError::NetworkError(e.to_string()))?;

        let status = response.status().as_u16();
        if Self::is_probe_success(status) {
            Ok(())
        } else {
            Err(BackupError::ServerError(status))
        }
    }

    /// PUTs the snapshot to the fixed backup document, overwriting it.
    fn upload(&self, config: &RemoteBackupConfig, doc: &BackupDocument) -> Result<(), BackupError> {
        Self::require_usable(config)?;

        let body = doc
            .to_json()
            .map_err(|e| BackupError::NetworkError(e.to_string()))?;
        let response = self
            .client
            .put(Self::backup_url(&config.url))
            .header(AUTHORIZATION, Self::basic_auth(&config.username, &config.password))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .map_err(|e| BackupError::NetworkError(e.to_string()))?;

        let status = response.status().as_u16();
        if Self::is_upload_success(status) {
            Ok(())
        } else {
            Err(BackupError::ServerError(status))
        }
    }

    /// GETs the backup document. The decoded JSON is accepted only when
    /// both top-level fields are array-typed; anything else is rejected as
    /// malformed and yields `Ok(None)` rather than a distinguishable error.
    fn download(&self, config: &RemoteBackupConfig) -> Result<Option<BackupDocument>, BackupError> {
        Self::require_usable(config)?;

        let response = self
            .client
            .get(Self::backup_url(&config.url))
            .header(AUTHORIZATION, Self::basic_auth(&config.username, &config.password))
            .send()
            .map_err(|e| BackupError::NetworkError(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Err(BackupError::ServerError(status));
        }

        let body = response
            .text()
            .map_err(|e| BackupError::NetworkError(e.to_string()))?;
        Ok(BackupDocument::from_json(&body))
    }
}
