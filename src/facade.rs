//! Main entry point for renderinfo.
//!
//! [`RenderingInfo`] ties the trace reader to the report builder: give it a
//! trace file and a record identifier and it returns a complete report.

use crate::error::Result;
use renderinfo_core::Lookup;
use renderinfo_report::{
    ContentItemStore, EmptyItemStore, MemoryItemStore, RenderingReport, ReportBuilder,
    ReportOptions, Texts,
};
use renderinfo_trace::TraceFile;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Rendering diagnostics for page debug traces.
///
/// # Example
///
/// ```ignore
/// use renderinfo::prelude::*;
///
/// let info = RenderingInfo::builder()
///     .config("renderinfo.toml")
///     .items_manifest("items.json")
///     .build()?;
///
/// let report = info.report("/tmp/trace.xml", "42")?;
/// println!("{}", render::to_text(&report));
/// ```
#[derive(Clone)]
pub struct RenderingInfo {
    builder: ReportBuilder,
}

impl RenderingInfo {
    /// Create with default options and no item store.
    pub fn new() -> Self {
        Self {
            builder: ReportBuilder::without_items(ReportOptions::default()),
        }
    }

    /// Create a builder for configuration.
    pub fn builder() -> RenderingInfoBuilder {
        RenderingInfoBuilder::new()
    }

    /// Options the reports are built with
    pub fn options(&self) -> &ReportOptions {
        self.builder.options()
    }

    /// Locate a rendering record without building a report.
    pub fn lookup(&self, path: impl AsRef<Path>, record_id: &str) -> Result<Lookup> {
        Ok(renderinfo_trace::locate(path, record_id)?)
    }

    /// Build the report for `record_id` in the trace file at `path`.
    ///
    /// A missing file or record still yields a report, with its error set.
    /// Only a malformed trace document fails.
    pub fn report(&self, path: impl AsRef<Path>, record_id: &str) -> Result<RenderingReport> {
        let lookup = self.lookup(path, record_id)?;
        Ok(self.builder.build(&lookup))
    }

    /// Identifiers of the rendering records in a trace file.
    ///
    /// `Ok(None)` when the file does not exist.
    pub fn record_ids(&self, path: impl AsRef<Path>) -> Result<Option<Vec<String>>> {
        let Some(file) = TraceFile::read(path)? else {
            return Ok(None);
        };
        let ids = file.document()?.record_ids();
        debug!("{} rendering records in {}", ids.len(), file.path().display());
        Ok(Some(ids))
    }
}

impl Default for RenderingInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`RenderingInfo`].
///
/// Options come from, in increasing precedence: defaults or
/// [`options`](Self::options), a [`config`](Self::config) file, then the
/// individual setters.
#[derive(Default)]
pub struct RenderingInfoBuilder {
    options: ReportOptions,
    config: Option<PathBuf>,
    source_root: Option<PathBuf>,
    texts: Option<Texts>,
    items: Option<Arc<dyn ContentItemStore>>,
    items_manifest: Option<PathBuf>,
}

impl RenderingInfoBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the given options.
    pub fn options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    /// Load options from a TOML file when building.
    pub fn config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = Some(path.into());
        self
    }

    /// Directory rendering source paths resolve against.
    pub fn source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = Some(root.into());
        self
    }

    /// Replace the text catalog.
    pub fn texts(mut self, texts: Texts) -> Self {
        self.texts = Some(texts);
        self
    }

    /// Use an item store.
    pub fn item_store(mut self, items: impl ContentItemStore + 'static) -> Self {
        self.items = Some(Arc::new(items));
        self
    }

    /// Load the item store from a JSON manifest when building.
    ///
    /// Ignored when [`item_store`](Self::item_store) is set.
    pub fn items_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.items_manifest = Some(path.into());
        self
    }

    /// Build, loading any configured files.
    pub fn build(self) -> Result<RenderingInfo> {
        let mut options = match &self.config {
            Some(path) => {
                debug!("Loading options from {}", path.display());
                ReportOptions::load(path)?
            }
            None => self.options,
        };
        if let Some(root) = self.source_root {
            options.source_root = Some(root);
        }
        if let Some(texts) = self.texts {
            options.texts = texts;
        }

        let items: Arc<dyn ContentItemStore> = match (self.items, &self.items_manifest) {
            (Some(items), _) => items,
            (None, Some(path)) => {
                let store = MemoryItemStore::load(path)?;
                debug!("Loaded {} items from {}", store.len(), path.display());
                Arc::new(store)
            }
            (None, None) => Arc::new(EmptyItemStore),
        };

        Ok(RenderingInfo {
            builder: ReportBuilder::new(options, items),
        })
    }
}
