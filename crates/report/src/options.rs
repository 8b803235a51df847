//! Report configuration
//!
//! Options can be built in code or loaded from a TOML file:
//!
//! ```toml
//! source_root = "/var/www/site"
//! script_template = "{F1F1D639-4F54-40C2-8BE0-81266B392CEE}"
//!
//! [texts]
//! unknown_rendering = "Unbekannte Darstellung"
//! ```
//!
//! Every key is optional.

use crate::texts::Texts;
use renderinfo_core::{Error, ItemId, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Report builder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportOptions {
    /// Directory that root-relative rendering source paths resolve against.
    /// `None` uses source paths as they are.
    pub source_root: Option<PathBuf>,
    /// Template marking script-backed renderings whose source is shown
    pub script_template: ItemId,
    /// User-visible strings
    pub texts: Texts,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            source_root: None,
            script_template: ItemId::XSL_RENDERING_TEMPLATE,
            texts: Texts::default(),
        }
    }
}

impl ReportOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source root
    pub fn source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = Some(root.into());
        self
    }

    /// Set the script-backed rendering template
    pub fn script_template(mut self, template: ItemId) -> Self {
        self.script_template = template;
        self
    }

    /// Replace the text catalog
    pub fn texts(mut self, texts: Texts) -> Self {
        self.texts = texts;
        self
    }

    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }
}
