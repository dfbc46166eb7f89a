use std::fmt::Write;
use std::path::PathBuf;

use asl_lib::parser::Token;

use super::script_loader::load_or_exit;

pub struct TokensArgs {
    pub script_path: Option<PathBuf>,
    pub script_text: Option<String>,
    pub spans: bool,
}

pub fn run(args: TokensArgs) {
    let script = load_or_exit(args.script_path.as_deref(), args.script_text.as_deref());
    let tokens = asl_lib::tokenize(&script.text);
    print!("{}", format_tokens(&tokens, args.spans));
}

/// One token per line: location, kind, and the text for named kinds.
pub fn format_tokens(tokens: &[Token<'_>], spans: bool) -> String {
    let mut out = String::new();
    for token in tokens {
        let location = token.location.to_string();
        write!(out, "{location:<8}{:?}", token.kind).expect("String write never fails");
        if !token.text.is_empty() && token.kind.spelling().is_none() && token.text != "\n" {
            write!(out, " {:?}", token.text).expect("String write never fails");
        }
        if spans {
            write!(out, " @{}..{}", token.span.start, token.span.end)
                .expect("String write never fails");
        }
        out.push('\n');
    }
    out
}
