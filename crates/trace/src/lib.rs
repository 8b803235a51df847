//! Trace Store Reader
//!
//! Reads the debug trace document written during a page rendering pass and
//! extracts one rendering record from it.
//!
//! ## Document shape
//!
//! ```text
//! <any-root>
//!   <debuginfo id="42">
//!     <debug>
//!       <rendering renderingname="Header" renderingid="{...}">
//!         <value name="title">Hello</value>
//!         <caching cacheable="true" varybydata="false" ... />
//!         <profile rendertime="5" itemsread="3" datacachehits="1"
//!                  datacachemisses="0" cached="false" />
//!       </rendering>
//!     </debug>
//!   </debuginfo>
//! </any-root>
//! ```
//!
//! ## Lookup
//!
//! Records are found by walking `root/debuginfo[id]/debug/rendering` and
//! comparing the `id` attribute for string equality. The identifier never
//! becomes part of a query expression, so quotes and brackets in it are just
//! characters. When several entries share an identifier, the first one in
//! document order wins.
//!
//! Every call to [`locate`] re-reads the file. Trace files are small,
//! session-scoped artifacts.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod decode;
pub mod document;
pub mod reader;

pub use document::{TraceDocument, TraceFile, XmlError};
pub use reader::locate;
