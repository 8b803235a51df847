//! Rendering source resolution
//!
//! A rendering's source text is shown only for script-backed renderings.
//! Every condition below must hold; if any fails the block is hidden:
//!
//! 1. the item store resolves the rendering's `renderingid`
//! 2. the item's template is the configured script template
//! 3. the item has a non-empty `Path` field
//! 4. the path names an existing file that reads as UTF-8 text

use crate::items::ContentItemStore;
use crate::model::SourceBlock;
use renderinfo_core::ItemId;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Field holding the rendering's source file path.
pub const PATH_FIELD: &str = "Path";

/// Resolves rendering source files through the item store.
pub struct SourceResolver<'a> {
    items: &'a dyn ContentItemStore,
    template: ItemId,
    root: Option<&'a Path>,
}

impl<'a> SourceResolver<'a> {
    /// Create a resolver
    pub fn new(items: &'a dyn ContentItemStore, template: ItemId, root: Option<&'a Path>) -> Self {
        Self {
            items,
            template,
            root,
        }
    }

    /// Resolve the source block for a rendering item.
    pub fn resolve(&self, rendering_id: &str) -> Option<SourceBlock> {
        let Some(item) = self.items.resolve_item(rendering_id) else {
            debug!("Rendering item {} not found", rendering_id);
            return None;
        };

        if item.template_id() != Some(self.template) {
            debug!(
                "Rendering item {} has template {}, no source shown",
                rendering_id, item.template
            );
            return None;
        }

        let raw = match item.field(PATH_FIELD) {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                debug!("Rendering item {} has no source path", rendering_id);
                return None;
            }
        };

        let path = resolve_path(self.root, raw);
        let text = read_text(&path)?;
        Some(SourceBlock {
            item_id: item.id,
            path,
            text,
        })
    }
}

/// Map an item path to a file path.
///
/// With a root, site-relative paths (`/xsl/a.xslt`, `~/xsl/a.xslt`) and
/// plain relative paths are joined onto it. Without one the path is used as
/// written.
pub fn resolve_path(root: Option<&Path>, raw: &str) -> PathBuf {
    match root {
        Some(root) => {
            let relative = raw
                .strip_prefix('~')
                .unwrap_or(raw)
                .trim_start_matches(['/', '\\']);
            root.join(relative)
        }
        None => PathBuf::from(raw),
    }
}

fn read_text(path: &Path) -> Option<String> {
    if !path.is_file() {
        debug!("Rendering source {} does not exist", path.display());
        return None;
    }
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Rendering source {} is not readable: {}", path.display(), e);
            return None;
        }
    };
    match String::from_utf8(bytes) {
        Ok(text) => Some(match text.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => text,
        }),
        Err(_) => {
            debug!("Rendering source {} is not UTF-8 text", path.display());
            None
        }
    }
}
