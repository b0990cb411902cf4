//! Catalog data types.

use serde::{Deserialize, Serialize};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    /// Item name.
    pub name: String,
    /// Item category.
    pub category: String,
    /// Digest-derived filename of the item image.
    pub image_filename: String,
}

/// The persisted collection document: `{"items": [...]}`.
///
/// Unknown fields are rejected so a rewrite never drops data written by a
/// newer format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemList {
    /// Items in creation order.
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Input for adding an item.
#[derive(Debug, Clone)]
pub struct AddItemInput {
    /// Item name.
    pub name: String,
    /// Item category.
    pub category: String,
    /// Image name declared by the client; never stored verbatim.
    pub image_name: String,
}
