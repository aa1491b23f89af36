use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::Entity;

/// A generic record addressed by `itemId`.
///
/// `item_id` is assigned once, on creation, and never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Client payload for `POST /items`, accepted once it passes the create-item
/// schema.
#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    /// Builds a stored item from a creation payload with a fresh identifier.
    pub fn create(new_item: NewItem) -> Self {
        Self {
            item_id: Uuid::new_v4().to_string(),
            name: new_item.name,
            description: new_item.description,
        }
    }
}

impl Entity for Item {
    const NAME: &'static str = "Item";
    const PARTITION_KEY: &'static str = "itemId";

    fn key(&self) -> &str {
        &self.item_id
    }
}
