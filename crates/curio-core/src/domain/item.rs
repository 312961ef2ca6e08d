//! Item Entity
//!
//! The one persisted record: a named, described entry with store-assigned
//! identity and creation time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted item
///
/// `id` and `created_at` are assigned by the store on creation and never
/// change afterwards; only `name` and `description` are mutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (positive, store-assigned)
    pub id: i64,
    /// Creation time (store-assigned)
    pub created_at: DateTime<Utc>,
    /// Display name, 1-100 characters
    pub name: String,
    /// Free-form description, 1-1000 characters
    pub description: String,
    /// Owning user, recorded by the store when an authenticated caller is
    /// present; never required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

/// Working copy of the editable fields, not yet committed to the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub description: String,
}

impl Draft {
    /// Seed a draft from an existing item's editable fields
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
        }
    }
}
