//! Item Record
//!
//! One entry of the persisted checklist, keyed by `ItemKey`.

use serde::{Deserialize, Serialize};

use super::status::ItemStatus;

/// Persisted state of a single item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub status: ItemStatus,
    /// Display name, the spelling last written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owning category (aisle) id
    #[serde(
        default,
        rename = "categoryId",
        alias = "catId",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<String>,
}

impl ItemRecord {
    pub fn new(status: ItemStatus, name: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self {
            status,
            name: Some(name.into()),
            category_id: Some(category_id.into()),
        }
    }

    /// Name used for sorting and display, empty when never set
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Merge the fields carried by `patch`, leaving the others untouched
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = Some(category_id);
        }
    }
}

/// Partial update of an `ItemRecord`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub status: Option<ItemStatus>,
    pub name: Option<String>,
    pub category_id: Option<String>,
}

impl ItemPatch {
    pub fn status(status: ItemStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }
}
