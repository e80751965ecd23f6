//! API response type definitions.

use serde::Deserialize;
use std::fmt;

/// Kind of board item, as used in the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Image,
    Document,
    Shape,
    StickyNote,
    Text,
    Frame,
    AppCard,
    /// Any type this tool does not scan for.
    #[serde(other)]
    Other,
}

impl ItemType {
    /// Every scannable type, in the order boards are scanned.
    pub const SCAN_ORDER: [ItemType; 7] = [
        ItemType::Image,
        ItemType::Document,
        ItemType::Shape,
        ItemType::StickyNote,
        ItemType::Text,
        ItemType::Frame,
        ItemType::AppCard,
    ];

    /// Value sent in the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Image => "image",
            ItemType::Document => "document",
            ItemType::Shape => "shape",
            ItemType::StickyNote => "sticky_note",
            ItemType::Text => "text",
            ItemType::Frame => "frame",
            ItemType::AppCard => "app_card",
            ItemType::Other => "other",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of the items listing.
#[derive(Debug, Deserialize)]
pub struct ItemsPage {
    #[serde(default)]
    pub data: Vec<Item>,
    /// Continuation token; absent or null on the last page.
    #[serde(default)]
    pub cursor: Option<String>,
}

impl ItemsPage {
    /// Cursor for the next page, if there is one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.cursor.as_deref().filter(|c| !c.is_empty())
    }
}

/// A board item.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<ItemType>,
    #[serde(default)]
    pub data: Option<ItemData>,
}

/// Type-specific item payload. Only the resource fields are read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemData {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub document_url: Option<String>,
}

impl Item {
    /// Item ID, or `unknown` when the API omitted it.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("unknown")
    }

    /// URL of the item's downloadable resource, if it has one.
    pub fn resource_url(&self) -> Option<&str> {
        let data = self.data.as_ref()?;
        [data.image_url.as_deref(), data.document_url.as_deref()]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
    }
}
