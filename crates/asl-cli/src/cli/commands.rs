//! Command builders for the CLI.

use clap::Command;

use super::args::*;

fn with_script_args(cmd: Command) -> Command {
    cmd.arg(script_path_arg())
        .arg(script_text_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("asl")
        .about("Compiler tools for the Action Scripting Language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(ast_command())
        .subcommand(tokens_command())
        .subcommand(dump_command())
}

/// Compile a script and report the first error.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a script")
        .after_help(
            r#"EXAMPLES:
  asl check player.asl                  # silent on success
  asl check -s 'layer L:'               # inline script
  asl check player.asl --no-check-refs  # allow names defined elsewhere"#,
        )
        .arg(no_check_refs_arg());
    with_script_args(cmd)
}

/// Print the syntax tree.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the syntax tree of a script")
        .after_help(
            r#"EXAMPLES:
  asl ast player.asl
  asl ast -s 'layer L:'"#,
        );
    with_script_args(cmd)
}

/// Print the token stream.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Show the tokens of a script")
        .arg(spans_arg());
    with_script_args(cmd)
}

/// Print compiled layers.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show compiled action layers")
        .after_help(
            r#"EXAMPLES:
  asl dump player.asl                   # normalized ASL
  asl dump player.asl --json            # layer definitions as JSON
  asl dump player.asl -o player.layers  # also write the binary cache"#,
        )
        .arg(json_arg())
        .arg(output_arg())
        .arg(no_check_refs_arg());
    with_script_args(cmd)
}
