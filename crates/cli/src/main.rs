//! renderinfo CLI: show rendering diagnostics from page debug traces.
//!
//! ```text
//! renderinfo show --id 42 --fi /tmp/trace.xml [--format human|json|html]
//! renderinfo list --fi /tmp/trace.xml [--json]
//! ```
//!
//! Exit codes: 0 when a report was printed (including not-found reports),
//! 1 on fatal errors (malformed trace, bad configuration or item manifest).

mod commands;
mod format;
mod parse;

use std::process;

use anyhow::Context;
use renderinfo::RenderingInfo;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_ids, format_report};
use parse::{global_options, matches_to_action, CliAction, GlobalOptions};

fn main() {
    let matches = build_cli().get_matches();
    let globals = global_options(&matches);

    // Initialize logging
    let filter = EnvFilter::try_new(&globals.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    debug!("Running {:?}", action);
    if let Err(e) = run(&globals, action) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn open(globals: &GlobalOptions) -> anyhow::Result<RenderingInfo> {
    let mut builder = RenderingInfo::builder();
    if let Some(config) = &globals.config {
        builder = builder.config(config);
    }
    if let Some(items) = &globals.items {
        builder = builder.items_manifest(items);
    }
    if let Some(root) = &globals.source_root {
        builder = builder.source_root(root);
    }
    builder.build().context("Failed to load renderinfo settings")
}

fn run(globals: &GlobalOptions, action: CliAction) -> anyhow::Result<()> {
    let info = open(globals)?;

    match action {
        CliAction::Show { id, file, mode } => {
            let report = info
                .report(&file, &id)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let formatted =
                format_report(&report, mode).context("Failed to format the report")?;
            println!("{}", formatted);
        }
        CliAction::List { file, json } => {
            let ids = info
                .record_ids(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            match ids {
                Some(ids) => {
                    let formatted = format_ids(&ids, json).context("Failed to format the ids")?;
                    if !formatted.is_empty() {
                        println!("{}", formatted);
                    }
                }
                None => anyhow::bail!("Trace file {} not found", file.display()),
            }
        }
    }
    Ok(())
}
