//! Identifier types
//!
//! Content items and templates are identified by GUIDs written in the
//! braced upper-case form (`{F1F1D639-4F54-40C2-8BE0-81266B392CEE}`).
//! Trace files and item manifests are not consistent about braces or case,
//! so comparisons go through [`ItemId`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Normalized content item identifier
///
/// Accepts braced, hyphenated, simple and URN GUID spellings, in any case.
///
/// # Examples
///
/// ```
/// use renderinfo_core::ItemId;
///
/// let a = ItemId::parse("{f1f1d639-4f54-40c2-8be0-81266b392cee}").unwrap();
/// let b = ItemId::parse("F1F1D6394F5440C28BE081266B392CEE").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "{F1F1D639-4F54-40C2-8BE0-81266B392CEE}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Template of XSL renderings, the script-backed rendering type whose
    /// source text the report can show.
    pub const XSL_RENDERING_TEMPLATE: ItemId =
        ItemId(Uuid::from_u128(0xF1F1D639_4F54_40C2_8BE0_81266B392CEE));

    /// Parse an identifier, returning `None` for anything that is not a GUID.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s.trim()).ok().map(ItemId)
    }

    /// Create from a raw UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        ItemId(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:X}}}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(ItemId)
    }
}
