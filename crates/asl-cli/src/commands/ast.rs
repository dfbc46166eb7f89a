use std::path::PathBuf;

use asl_lib::Compiler;

use super::script_loader::{load_or_exit, report_and_exit};

pub struct AstArgs {
    pub script_path: Option<PathBuf>,
    pub script_text: Option<String>,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let script = load_or_exit(args.script_path.as_deref(), args.script_text.as_deref());

    match Compiler::new(&script.text).parse() {
        Ok(parsed) => print!("{}", parsed.dump()),
        Err(e) => report_and_exit(&e, &script, args.color),
    }
}
