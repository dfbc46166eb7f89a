//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Script file (positional). `-` reads standard input.
pub fn script_path_arg() -> Arg {
    Arg::new("script_path")
        .value_name("SCRIPT")
        .value_parser(value_parser!(PathBuf))
        .help("ASL script file (`-` for stdin)")
}

/// Inline script text (-s/--script).
pub fn script_text_arg() -> Arg {
    Arg::new("script_text")
        .short('s')
        .long("script")
        .value_name("TEXT")
        .conflicts_with("script_path")
        .help("Inline script text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Skip reference resolution (--no-check-refs).
pub fn no_check_refs_arg() -> Arg {
    Arg::new("no_check_refs")
        .long("no-check-refs")
        .action(ArgAction::SetTrue)
        .help("Do not require referenced sources and actions to be defined")
}

/// Emit JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print layers as JSON")
}

/// Binary layer cache output (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Also write the compiled layers to FILE in binary form")
}

/// Show source locations (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show byte spans next to line/column")
}

/// Log verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
}
