//! User-visible text catalog
//!
//! Every string the report shows comes from [`Texts`]. The defaults are
//! English; a configuration file can override any of them. Message
//! templates take their argument through a `{0}` placeholder.

use serde::{Deserialize, Serialize};

/// Localizable report strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Texts {
    /// Header shown when no record was located
    pub unknown_rendering: String,
    /// Placeholder for a value that was recorded but cannot be shown
    pub unknown: String,
    /// Placeholder for counters when no record was located
    pub unknown_counter: String,
    /// Message for a missing trace file; `{0}` is the file name
    pub file_not_found: String,
    /// Message for a missing record; `{0}` is the record identifier
    pub record_not_found: String,
    /// Details placeholder when no record was located
    pub details_not_found: String,
    /// Cache sentence when the output came from the rendering cache
    pub rendered_from_cache: String,
    /// Cache sentence otherwise
    pub cache_not_used: String,
    /// Unit suffix of the render time
    pub render_time_unit: String,
}

impl Default for Texts {
    fn default() -> Self {
        Texts {
            unknown_rendering: "Unknown Rendering".to_string(),
            unknown: "Unknown".to_string(),
            unknown_counter: "?".to_string(),
            file_not_found: "The debug information file '{0}' was not found.".to_string(),
            record_not_found: "The rendering information with ID '{0}' was not found."
                .to_string(),
            details_not_found: "No information is available for this rendering.".to_string(),
            rendered_from_cache: "The rendering was rendered from the cache.".to_string(),
            cache_not_used: "Not used".to_string(),
            render_time_unit: "ms".to_string(),
        }
    }
}

/// Substitute `arg` for every `{0}` in `template`.
pub fn format_message(template: &str, arg: &str) -> String {
    template.replace("{0}", arg)
}
