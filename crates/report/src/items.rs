//! Content item store
//!
//! The report resolves a rendering's `renderingid` against the content
//! item store to find the rendering's template and source path. The store
//! itself lives outside this crate; [`ContentItemStore`] is the seam.
//!
//! [`MemoryItemStore`] is the in-process implementation used by the CLI
//! (loaded from a JSON manifest) and by tests.

use renderinfo_core::{Error, ItemId, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// A content item as seen by the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Item identifier
    pub id: String,
    /// Template identifier
    pub template: String,
    /// Field values by field name
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl ContentItem {
    /// Create an item without fields
    pub fn new(id: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            template: template.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a field value
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field; names compare case-insensitively.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .or_else(|| {
                self.fields
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }

    /// The template identifier, if it is a valid GUID.
    pub fn template_id(&self) -> Option<ItemId> {
        ItemId::parse(&self.template)
    }
}

/// Resolves content items by identifier.
pub trait ContentItemStore: Send + Sync {
    /// Resolve an item, `None` when the store has no such item.
    fn resolve_item(&self, id: &str) -> Option<ContentItem>;
}

/// A store without items.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyItemStore;

impl ContentItemStore for EmptyItemStore {
    fn resolve_item(&self, _id: &str) -> Option<ContentItem> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ItemKey {
    Guid(ItemId),
    Raw(String),
}

impl ItemKey {
    fn new(id: &str) -> Self {
        match ItemId::parse(id) {
            Some(guid) => ItemKey::Guid(guid),
            None => ItemKey::Raw(id.to_string()),
        }
    }
}

/// In-memory item store.
///
/// GUID identifiers match regardless of case and braces; any other
/// identifier (such as an item path) must match exactly.
#[derive(Debug, Clone, Default)]
pub struct MemoryItemStore {
    items: HashMap<ItemKey, ContentItem>,
}

impl MemoryItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item, replacing any item with the same identifier.
    pub fn insert(&mut self, item: ContentItem) -> Option<ContentItem> {
        self.items.insert(ItemKey::new(&item.id), item)
    }

    /// Parse a JSON manifest: an array of items.
    ///
    /// ```json
    /// [{"id": "{...}", "template": "{...}", "fields": {"Path": "/xsl/header.xslt"}}]
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<ContentItem> =
            serde_json::from_str(json).map_err(|e| Error::ItemStore(e.to_string()))?;
        Ok(items.into_iter().collect())
    }

    /// Load a JSON manifest from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<ContentItem> for MemoryItemStore {
    fn from_iter<I: IntoIterator<Item = ContentItem>>(iter: I) -> Self {
        let mut store = MemoryItemStore::new();
        for item in iter {
            store.insert(item);
        }
        store
    }
}

impl ContentItemStore for MemoryItemStore {
    fn resolve_item(&self, id: &str) -> Option<ContentItem> {
        self.items.get(&ItemKey::new(id)).cloned()
    }
}
