//! Command-line definition.

use clap::{Arg, ArgAction, Command};

/// Build the `renderinfo` command.
pub fn build_cli() -> Command {
    Command::new("renderinfo")
        .about("Show rendering diagnostics from page debug trace files")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .help("TOML options file"),
        )
        .arg(
            Arg::new("items")
                .long("items")
                .global(true)
                .value_name("FILE")
                .help("JSON content item manifest"),
        )
        .arg(
            Arg::new("source-root")
                .long("source-root")
                .global(true)
                .value_name("DIR")
                .help("Directory rendering source paths resolve against"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .value_name("FILTER")
                .default_value("warn")
                .help("Log filter written to stderr"),
        )
        .subcommand(
            Command::new("show")
                .about("Show the report for one rendering")
                .arg(
                    Arg::new("id")
                        .long("id")
                        .required(true)
                        .value_name("ID")
                        .help("Rendering record identifier"),
                )
                .arg(trace_file_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["human", "json", "html"])
                        .default_value("human")
                        .help("Output format"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List the rendering record identifiers in a trace file")
                .arg(trace_file_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the identifiers as a JSON array"),
                ),
        )
}

fn trace_file_arg() -> Arg {
    Arg::new("fi")
        .long("fi")
        .required(true)
        .value_name("FILE")
        .help("Debug trace file")
}
