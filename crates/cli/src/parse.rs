//! ArgMatches → CliAction conversion.

use clap::ArgMatches;
use std::path::PathBuf;

use crate::format::OutputMode;

/// The result of parsing the command line.
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    /// Show one rendering report.
    Show {
        id: String,
        file: PathBuf,
        mode: OutputMode,
    },
    /// List record identifiers.
    List { file: PathBuf, json: bool },
}

/// Settings shared by every command.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub items: Option<PathBuf>,
    pub source_root: Option<PathBuf>,
    pub log_level: String,
}

/// Read the global flags.
pub fn global_options(matches: &ArgMatches) -> GlobalOptions {
    let path = |name: &str| matches.get_one::<String>(name).map(PathBuf::from);
    GlobalOptions {
        config: path("config"),
        items: path("items"),
        source_root: path("source-root"),
        log_level: matches
            .get_one::<String>("log-level")
            .cloned()
            .unwrap_or_else(|| "warn".to_string()),
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "show" => {
            let mode = match m.get_one::<String>("format").map(|s| s.as_str()) {
                Some("json") => OutputMode::Json,
                Some("html") => OutputMode::Html,
                _ => OutputMode::Human,
            };
            Ok(CliAction::Show {
                id: required(m, "id")?,
                file: PathBuf::from(required(m, "fi")?),
                mode,
            })
        }
        "list" => Ok(CliAction::List {
            file: PathBuf::from(required(m, "fi")?),
            json: m.get_flag("json"),
        }),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn required(matches: &ArgMatches, name: &str) -> Result<String, String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("Missing --{}", name))
}
