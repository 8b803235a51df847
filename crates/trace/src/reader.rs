//! Record lookup entry point

use crate::document::TraceFile;
use renderinfo_core::{Lookup, NotFoundReason, Result};
use std::path::Path;
use tracing::{debug, info};

/// Locate the rendering record `record_id` in the trace file at `path`.
///
/// ## Outcomes
///
/// | Condition | Result |
/// |-----------|--------|
/// | Path is not an existing, readable file | `Ok(NotFound(FileNotFound))` |
/// | File is not valid text or not well-formed XML | `Err(MalformedDocument)` |
/// | No `debuginfo[id]/debug/rendering` for the id | `Ok(NotFound(RecordNotFound))` |
/// | Otherwise | `Ok(Found(record))`, first match in document order |
///
/// The file is read and parsed on every call.
pub fn locate(path: impl AsRef<Path>, record_id: &str) -> Result<Lookup> {
    let path = path.as_ref();

    let Some(file) = TraceFile::read(path)? else {
        info!("Trace file {} not found", path.display());
        return Ok(Lookup::NotFound(NotFoundReason::FileNotFound(
            path.to_path_buf(),
        )));
    };

    let document = file.document()?;
    match document.rendering(record_id) {
        Some(record) => {
            debug!(
                "Located rendering {:?} in {}",
                record_id,
                path.display()
            );
            Ok(Lookup::Found(record))
        }
        None => {
            info!(
                "No rendering record {:?} in {}",
                record_id,
                path.display()
            );
            Ok(Lookup::NotFound(NotFoundReason::RecordNotFound(
                record_id.to_string(),
            )))
        }
    }
}
