//! Generic authenticated store transport for CloudNav.
//!
//! Pushes and pulls the whole `{links, categories}` snapshot against a
//! single endpoint with a plaintext credential header. Unconditional
//! overwrite: last writer wins, no merge, no version check. The only
//! distinguished failure is 401, which the app layer turns into a
//! credential reset.

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;

use crate::types::backup::BackupDocument;
use crate::types::errors::SyncError;

/// Path of the storage endpoint, relative to the configured base URL.
pub const STORAGE_PATH: &str = "/api/storage";

/// Trait defining generic-store sync operations.
pub trait StoreSyncTrait {
    fn upload(&self, doc: &BackupDocument, credential: &str) -> Result<(), SyncError>;
    fn download(&self, credential: &str) -> Result<Option<BackupDocument>, SyncError>;
}

/// Store transport over blocking HTTP.
pub struct StoreSyncService {
    base_url: String,
    client: Client,
}

impl StoreSyncService {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn storage_url(&self) -> String {
        format!("{}{}", self.base_url, STORAGE_PATH)
    }

    /// Maps a response status to the transport error it represents, or
    /// `None` for success. 401 is the single distinguished case.
    pub fn classify_status(status: u16) -> Option<SyncError> {
        match status {
            200..=299 => None,
            401 => Some(SyncError::Unauthorized),
            other => Some(SyncError::ServerError(other)),
        }
    }
}

impl StoreSyncTrait for StoreSyncService {
    /// POSTs the whole snapshot, overwriting whatever the store held.
    fn upload(&self, doc: &BackupDocument, credential: &str) -> Result<(), SyncError> {
        let response = self
            .client
            .post(self.storage_url())
            .header(AUTHORIZATION, credential)
            .json(doc)
            .send()
            .map_err(|e| SyncError::NetworkError(e.to_string()))?;

        match Self::classify_status(response.status().as_u16()) {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }

    /// GETs the stored snapshot. A malformed payload yields `Ok(None)`,
    /// not a distinguishable error.
    fn download(&self, credential: &str) -> Result<Option<BackupDocument>, SyncError> {
        let response = self
            .client
            .get(self.storage_url())
            .header(AUTHORIZATION, credential)
            .send()
            .map_err(|e| SyncError::NetworkError(e.to_string()))?;

        if let Some(err) = Self::classify_status(response.status().as_u16()) {
            return Err(err);
        }

        let body = response
            .text()
            .map_err(|e| SyncError::NetworkError(e.to_string()))?;
        Ok(BackupDocument::from_json(&body))
    }
}
