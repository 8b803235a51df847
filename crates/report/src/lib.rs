//! Rendering Report Builder
//!
//! Builds a displayable [`RenderingReport`] from a trace lookup result and
//! lays it out for display:
//!
//! - [`ReportBuilder`]: lookup result to report model
//! - [`render`]: HTML and plain text surfaces
//! - [`ReportOptions`]: source root, script template and the [`Texts`] catalog
//! - [`ContentItemStore`]: resolves rendering items for the source block
//!
//! Building never fails. Missing attributes, unparsable numbers and absent
//! sections degrade to placeholders.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod escape;
pub mod format;
pub mod items;
pub mod model;
pub mod options;
pub mod render;
pub mod source;
pub mod texts;

pub use builder::ReportBuilder;
pub use escape::html_escape;
pub use items::{ContentItem, ContentItemStore, EmptyItemStore, MemoryItemStore};
pub use model::{
    ParameterRow, ParameterTable, ProfileCounters, RenderingReport, ReportDetails, SourceBlock,
};
pub use options::ReportOptions;
pub use texts::Texts;
