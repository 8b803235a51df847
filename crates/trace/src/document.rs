//! Parsed trace documents
//!
//! [`TraceFile`] owns the decoded text of a trace file; [`TraceDocument`]
//! is the parsed tree borrowing that text. Keeping them apart lets a caller
//! parse once and run several lookups.

use crate::decode::decode_text;
use renderinfo_core::{CacheSettings, Error, Parameter, ProfileRecord, RenderingRecord, Result};
use roxmltree::{Document, Node};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// XML parse error reported by [`TraceDocument::parse`].
pub use roxmltree::Error as XmlError;

const DEBUG_INFO: &str = "debuginfo";
const DEBUG: &str = "debug";
const RENDERING: &str = "rendering";
const VALUE: &str = "value";
const CACHING: &str = "caching";
const PROFILE: &str = "profile";

/// The decoded text of one trace file.
#[derive(Debug, Clone)]
pub struct TraceFile {
    path: PathBuf,
    text: String,
}

impl TraceFile {
    /// Read a trace file.
    ///
    /// Returns `Ok(None)` when `path` is not an existing, readable regular
    /// file. Bytes that are not valid text are a malformed document.
    pub fn read(path: impl AsRef<Path>) -> Result<Option<TraceFile>> {
        let path = path.as_ref();
        if !path.is_file() {
            debug!("Trace file {} does not exist", path.display());
            return Ok(None);
        }

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Trace file {} is not readable: {}", path.display(), e);
                return Ok(None);
            }
        };

        let text = decode_text(bytes).map_err(|message| Error::malformed(path, message))?;
        Ok(Some(TraceFile {
            path: path.to_path_buf(),
            text,
        }))
    }

    /// Wrap text that did not come from disk
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Path the text was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decoded document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parse the text as a trace document.
    pub fn document(&self) -> Result<TraceDocument<'_>> {
        TraceDocument::parse(&self.text).map_err(|e| Error::malformed(&self.path, e.to_string()))
    }
}

/// A parsed trace document.
pub struct TraceDocument<'input> {
    doc: Document<'input>,
}

impl<'input> TraceDocument<'input> {
    /// Parse trace text.
    pub fn parse(text: &'input str) -> std::result::Result<Self, XmlError> {
        let doc = Document::parse(text)?;
        Ok(TraceDocument { doc })
    }

    /// Extract the rendering record for `record_id`.
    ///
    /// The first `debuginfo` entry in document order whose `id` equals
    /// `record_id` and that contains `debug/rendering` wins.
    pub fn rendering(&self, record_id: &str) -> Option<RenderingRecord> {
        self.rendering_nodes()
            .find(|(id, _)| *id == record_id)
            .map(|(_, node)| self.extract(node))
    }

    /// Identifiers of all entries carrying a rendering record, in document
    /// order, each listed once.
    pub fn record_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rendering_nodes()
            .filter(|(id, _)| seen.insert(*id))
            .map(|(id, _)| id.to_string())
            .collect()
    }

    /// All `(id, rendering)` pairs in document order.
    fn rendering_nodes<'a>(&'a self) -> impl Iterator<Item = (&'a str, Node<'a, 'input>)> + 'a {
        child_elements(self.doc.root_element(), DEBUG_INFO)
            .filter_map(|info| info.attribute("id").map(|id| (id, info)))
            .flat_map(|(id, info)| {
                child_elements(info, DEBUG)
                    .flat_map(|debug| child_elements(debug, RENDERING))
                    .map(move |rendering| (id, rendering))
            })
    }

    fn extract(&self, rendering: Node<'_, 'input>) -> RenderingRecord {
        let input = self.doc.input_text();

        let parameters = child_elements(rendering, VALUE)
            .map(|value| {
                Parameter::new(
                    value.attribute("name").unwrap_or_default(),
                    inner_markup(value, input),
                )
            })
            .collect();

        let cache_settings = child_elements(rendering, CACHING)
            .next()
            .map(|caching| CacheSettings::from_attributes(|name| caching.attribute(name)));

        let profile = child_elements(rendering, PROFILE).next().map(|profile| {
            let text = |name: &str| profile.attribute(name).map(str::to_string);
            ProfileRecord {
                render_time: text("rendertime"),
                items_read: text("itemsread"),
                data_cache_hits: text("datacachehits"),
                data_cache_misses: text("datacachemisses"),
                cached: renderinfo_core::record::flag(profile.attribute("cached")),
            }
        });

        RenderingRecord {
            rendering_name: rendering.attribute("renderingname").map(str::to_string),
            rendering_id: rendering.attribute("renderingid").map(str::to_string),
            parameters,
            cache_settings,
            profile,
        }
    }
}

fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && child.has_tag_name(name))
}

/// Markup between the start and end tags of `node`, as written.
///
/// The end bound comes from the element's own end tag. Text merged across
/// CDATA sections is one node whose range covers only its first piece.
fn inner_markup(node: Node<'_, '_>, input: &str) -> String {
    let Some(first) = node.first_child() else {
        return String::new();
    };
    let range = node.range();
    let start = first.range().start;
    match input[range.clone()].rfind("</") {
        Some(offset) if range.start + offset >= start => {
            input[start..range.start + offset].to_string()
        }
        _ => String::new(),
    }
}
