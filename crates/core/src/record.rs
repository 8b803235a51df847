//! Rendering record model
//!
//! A [`RenderingRecord`] is the owned form of one
//! `debuginfo/debug/rendering` node of a trace document. Attribute values
//! are kept as the trace writer produced them; interpretation (number
//! formatting, escaping) belongs to the report builder.
//!
//! Optional child sections are `Option`s so that "the writer recorded
//! nothing" stays distinguishable from "the writer recorded false".

use serde::Serialize;

/// The literal attribute value that marks a boolean flag as set.
pub const TRUE_LITERAL: &str = "true";

/// Read a boolean attribute: only the exact literal `"true"` is true.
pub fn flag(raw: Option<&str>) -> bool {
    raw == Some(TRUE_LITERAL)
}

/// One rendering record located in a trace document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderingRecord {
    /// Display label (`renderingname`)
    pub rendering_name: Option<String>,
    /// Content item describing the rendering implementation (`renderingid`)
    pub rendering_id: Option<String>,
    /// Data values passed to the rendering, in document order
    pub parameters: Vec<Parameter>,
    /// Cache configuration (`caching` child), if recorded
    pub cache_settings: Option<CacheSettings>,
    /// Profiling counters (`profile` child), if recorded
    pub profile: Option<ProfileRecord>,
}

impl RenderingRecord {
    /// The display label, empty when absent.
    pub fn name(&self) -> &str {
        self.rendering_name.as_deref().unwrap_or_default()
    }
}

/// A named value passed to a rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Parameter name (`name` attribute)
    pub name: String,
    /// Inner markup of the `value` element, exactly as written
    pub raw_value: String,
}

impl Parameter {
    /// Create a parameter
    pub fn new(name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_value: raw_value.into(),
        }
    }
}

/// Attribute names of the eight cache flags, in display order.
pub const CACHE_FLAG_ATTRIBUTES: [&str; 8] = [
    "cacheable",
    "clearonindexupdate",
    "varybydata",
    "varybydevice",
    "varybylogin",
    "varybyparameters",
    "varybyquerystring",
    "varybyuser",
];

/// Cache-control configuration of a rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheSettings {
    /// Output may be cached
    pub cacheable: bool,
    /// Cached output is dropped when the search index updates
    pub clear_on_index_update: bool,
    /// Cache key varies by data source
    pub vary_by_data: bool,
    /// Cache key varies by device
    pub vary_by_device: bool,
    /// Cache key varies by login state
    pub vary_by_login: bool,
    /// Cache key varies by rendering parameters
    pub vary_by_parameters: bool,
    /// Cache key varies by query string
    pub vary_by_query_string: bool,
    /// Cache key varies by user
    pub vary_by_user: bool,
}

impl CacheSettings {
    /// Build settings from an attribute accessor.
    ///
    /// Each flag is true only when its attribute is exactly `"true"`.
    pub fn from_attributes<'a, F>(attr: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let [cacheable, clear, data, device, login, parameters, query, user] =
            CACHE_FLAG_ATTRIBUTES.map(|name| flag(attr(name)));
        Self {
            cacheable,
            clear_on_index_update: clear,
            vary_by_data: data,
            vary_by_device: device,
            vary_by_login: login,
            vary_by_parameters: parameters,
            vary_by_query_string: query,
            vary_by_user: user,
        }
    }

    /// Flags paired with their attribute names, in display order.
    pub fn flags(&self) -> [(&'static str, bool); 8] {
        let values = [
            self.cacheable,
            self.clear_on_index_update,
            self.vary_by_data,
            self.vary_by_device,
            self.vary_by_login,
            self.vary_by_parameters,
            self.vary_by_query_string,
            self.vary_by_user,
        ];
        std::array::from_fn(|i| (CACHE_FLAG_ATTRIBUTES[i], values[i]))
    }

    /// Number of flags that are set.
    pub fn enabled_count(&self) -> usize {
        self.flags().iter().filter(|(_, set)| *set).count()
    }
}

/// Raw profiling counters recorded for a rendering.
///
/// Counters are opaque strings; only `render_time` is ever parsed, and only
/// by the report builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    /// Render duration in milliseconds (`rendertime`), unparsed
    pub render_time: Option<String>,
    /// Items read (`itemsread`)
    pub items_read: Option<String>,
    /// Data cache hits (`datacachehits`)
    pub data_cache_hits: Option<String>,
    /// Data cache misses (`datacachemisses`)
    pub data_cache_misses: Option<String>,
    /// Output was served from the rendering cache (`cached`)
    pub cached: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_flag_requires_exact_literal() {
        assert!(flag(Some("true")));
        assert!(!flag(Some("True")));
        assert!(!flag(Some("1")));
        assert!(!flag(Some("")));
        assert!(!flag(None));
    }

    #[test]
    fn test_cache_settings_single_flag() {
        let map = attrs(&[("cacheable", "true"), ("varybyuser", "yes")]);
        let settings = CacheSettings::from_attributes(|name| map.get(name).copied());

        assert!(settings.cacheable);
        assert!(!settings.vary_by_user);
        assert_eq!(settings.enabled_count(), 1);
    }

    #[test]
    fn test_cache_settings_flags_order() {
        let map = attrs(&[("varybyquerystring", "true")]);
        let settings = CacheSettings::from_attributes(|name| map.get(name).copied());
        let flags = settings.flags();

        assert_eq!(flags[0], ("cacheable", false));
        assert_eq!(flags[6], ("varybyquerystring", true));
        assert_eq!(flags.iter().filter(|(_, set)| *set).count(), 1);
    }

    #[test]
    fn test_record_name_defaults_to_empty() {
        let record = RenderingRecord::default();
        assert_eq!(record.name(), "");

        let named = RenderingRecord {
            rendering_name: Some("Header".into()),
            ..Default::default()
        };
        assert_eq!(named.name(), "Header");
    }

    #[test]
    fn test_record_serializes_absent_sections_as_null() {
        let record = RenderingRecord::default();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["cache_settings"].is_null());
        assert!(json["profile"].is_null());
        assert_eq!(json["parameters"], serde_json::json!([]));
    }
}
