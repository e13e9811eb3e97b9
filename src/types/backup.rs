use serde::{Deserialize, Serialize};

use crate::types::record::{Category, Link};

/// The snapshot document exchanged with the local cache and both backup
/// transports: `{links, categories}`, persisted verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackupDocument {
    pub links: Vec<Link>,
    pub categories: Vec<Category>,
}

impl BackupDocument {
    /// Parses a backup payload received from a remote store.
    ///
    /// The payload is accepted only when both top-level fields are
    /// array-typed. Anything else (missing fields, non-array fields,
    /// records that fail to deserialize, invalid JSON) is treated as
    /// malformed and rejected with `None` rather than a distinguishable
    /// error.
    pub fn from_json(raw: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(raw).ok()?;
        let links = value.get("links")?;
        let categories = value.get("categories")?;
        if !links.is_array() || !categories.is_array() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Serializes the document to the JSON wire/cache shape.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.categories.is_empty()
    }
}
