//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::tokens::TokensArgs;

pub struct CheckParams {
    pub script_path: Option<PathBuf>,
    pub script_text: Option<String>,
    pub check_refs: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            script_path: m.get_one::<PathBuf>("script_path").cloned(),
            script_text: m.get_one::<String>("script_text").cloned(),
            check_refs: !m.get_flag("no_check_refs"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            script_path: p.script_path,
            script_text: p.script_text,
            check_refs: p.check_refs,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub script_path: Option<PathBuf>,
    pub script_text: Option<String>,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            script_path: m.get_one::<PathBuf>("script_path").cloned(),
            script_text: m.get_one::<String>("script_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            script_path: p.script_path,
            script_text: p.script_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub script_path: Option<PathBuf>,
    pub script_text: Option<String>,
    pub spans: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            script_path: m.get_one::<PathBuf>("script_path").cloned(),
            script_text: m.get_one::<String>("script_text").cloned(),
            spans: m.get_flag("spans"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            script_path: p.script_path,
            script_text: p.script_text,
            spans: p.spans,
        }
    }
}

pub struct DumpParams {
    pub script_path: Option<PathBuf>,
    pub script_text: Option<String>,
    pub json: bool,
    pub output: Option<PathBuf>,
    pub check_refs: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            script_path: m.get_one::<PathBuf>("script_path").cloned(),
            script_text: m.get_one::<String>("script_text").cloned(),
            json: m.get_flag("json"),
            output: m.get_one::<PathBuf>("output").cloned(),
            check_refs: !m.get_flag("no_check_refs"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            script_path: p.script_path,
            script_text: p.script_text,
            json: p.json,
            output: p.output,
            check_refs: p.check_refs,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
