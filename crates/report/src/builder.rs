//! Rendering Report Builder
//!
//! Turns a [`Lookup`] into a [`RenderingReport`]. Each section is built
//! independently and tolerates missing input:
//!
//! | Section | Missing input |
//! |---------|---------------|
//! | Header | empty title |
//! | Parameters | empty table |
//! | Cache flags | section skipped (`None`) |
//! | Profile | section skipped (`None`); bad render time shows "unknown" |
//! | Source | block hidden |
//!
//! A not-found lookup produces the fallback report instead: fixed header,
//! error message, placeholder details and `?` counters.

use crate::format::format_render_time;
use crate::items::{ContentItemStore, EmptyItemStore};
use crate::model::{
    ParameterRow, ParameterTable, ProfileCounters, RenderingReport, ReportDetails, SourceBlock,
};
use crate::options::ReportOptions;
use crate::source::SourceResolver;
use crate::texts::format_message;
use renderinfo_core::{Lookup, NotFoundReason, ProfileRecord, RenderingRecord};
use std::sync::Arc;
use tracing::debug;

/// Builds reports from lookup results.
#[derive(Clone)]
pub struct ReportBuilder {
    options: ReportOptions,
    items: Arc<dyn ContentItemStore>,
}

impl ReportBuilder {
    /// Create a builder with the given options and item store
    pub fn new(options: ReportOptions, items: Arc<dyn ContentItemStore>) -> Self {
        Self { options, items }
    }

    /// Create a builder without an item store; source blocks never show.
    pub fn without_items(options: ReportOptions) -> Self {
        Self::new(options, Arc::new(EmptyItemStore))
    }

    /// Builder options
    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Build the report for a lookup result.
    pub fn build(&self, lookup: &Lookup) -> RenderingReport {
        match lookup {
            Lookup::Found(record) => self.build_record(record),
            Lookup::NotFound(reason) => self.build_not_found(reason),
        }
    }

    /// Build the report for a located record.
    pub fn build_record(&self, record: &RenderingRecord) -> RenderingReport {
        RenderingReport {
            header: record.name().to_string(),
            error: None,
            details: ReportDetails::Parameters(parameter_table(record)),
            cache_flags: record.cache_settings,
            profile: record.profile.as_ref().map(|p| self.profile_counters(p)),
            source: self.source_block(record),
        }
    }

    /// Build the fallback report.
    pub fn build_not_found(&self, reason: &NotFoundReason) -> RenderingReport {
        let texts = &self.options.texts;
        let template = match reason {
            NotFoundReason::FileNotFound(_) => &texts.file_not_found,
            NotFoundReason::RecordNotFound(_) => &texts.record_not_found,
        };
        let unknown = || texts.unknown_counter.clone();

        RenderingReport {
            header: texts.unknown_rendering.clone(),
            error: Some(format_message(template, &reason.subject())),
            details: ReportDetails::NotFound {
                message: texts.details_not_found.clone(),
            },
            cache_flags: None,
            profile: Some(ProfileCounters {
                render_time: unknown(),
                items_read: unknown(),
                data_cache_hits: unknown(),
                data_cache_misses: unknown(),
                cache: None,
            }),
            source: None,
        }
    }

    fn profile_counters(&self, profile: &ProfileRecord) -> ProfileCounters {
        let texts = &self.options.texts;
        let render_time = format_render_time(profile.render_time.as_deref(), &texts.render_time_unit)
            .unwrap_or_else(|| {
                debug!("Unparsable render time {:?}", profile.render_time);
                texts.unknown.clone()
            });
        let cache = if profile.cached {
            &texts.rendered_from_cache
        } else {
            &texts.cache_not_used
        };

        ProfileCounters {
            render_time,
            items_read: profile.items_read.clone().unwrap_or_default(),
            data_cache_hits: profile.data_cache_hits.clone().unwrap_or_default(),
            data_cache_misses: profile.data_cache_misses.clone().unwrap_or_default(),
            cache: Some(cache.clone()),
        }
    }

    fn source_block(&self, record: &RenderingRecord) -> Option<SourceBlock> {
        let rendering_id = record.rendering_id.as_deref()?;
        SourceResolver::new(
            self.items.as_ref(),
            self.options.script_template,
            self.options.source_root.as_deref(),
        )
        .resolve(rendering_id)
    }
}

fn parameter_table(record: &RenderingRecord) -> ParameterTable {
    ParameterTable {
        rows: record
            .parameters
            .iter()
            .map(|p| ParameterRow {
                key: p.name.clone(),
                value: p.raw_value.clone(),
            })
            .collect(),
    }
}
