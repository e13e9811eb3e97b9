use serde::{Deserialize, Serialize};

/// Category identifier that links fall back to when their own category is
/// deleted. Deleting a category reassigns its links here; links are never
/// cascade-deleted.
pub const DEFAULT_CATEGORY_ID: &str = "default";

/// Represents a saved link.
///
/// `category_id` is a soft reference: it is not enforced against the category
/// list. A link whose `category_id` matches no category is treated as
/// uncategorized by the export codec and is never hidden by the lock filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category_id: String,
    /// Creation timestamp in epoch milliseconds.
    pub created_at: i64,
    #[serde(default)]
    pub pinned: bool,
}

/// Represents a link category.
///
/// `password` is a plaintext visibility gate checked by the lock manager.
/// It is honest UI state, not a security mechanism.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
