//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, dump_command, tokens_command};

#[test]
fn check_extracts_path_and_refs() {
    let m = check_command()
        .try_get_matches_from(["check", "player.asl", "--no-check-refs"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.script_path, Some(PathBuf::from("player.asl")));
    assert!(!params.check_refs);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn inline_script_conflicts_with_path() {
    let result = check_command().try_get_matches_from(["check", "player.asl", "-s", "layer L:"]);
    assert!(result.is_err());
}

#[test]
fn dump_flags() {
    let m = dump_command()
        .try_get_matches_from([
            "dump", "-s", "layer L:", "--json", "-o", "out.bin", "--color", "never",
        ])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.script_text.as_deref(), Some("layer L:"));
    assert!(params.json);
    assert_eq!(params.output, Some(PathBuf::from("out.bin")));
    assert!(params.check_refs);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn tokens_accepts_spans() {
    let m = tokens_command()
        .try_get_matches_from(["tokens", "player.asl", "--spans"])
        .unwrap();
    assert!(TokensParams::from_matches(&m).spans);
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["asl", "-vv", "check", "player.asl"])
        .unwrap();
    assert_eq!(m.get_count("verbose"), 2);
}

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["asl"]).is_err());
}
