use std::path::PathBuf;

use asl_lib::Compiler;

use super::script_loader::{load_or_exit, report_and_exit};

pub struct CheckArgs {
    pub script_path: Option<PathBuf>,
    pub script_text: Option<String>,
    pub check_refs: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let script = load_or_exit(args.script_path.as_deref(), args.script_text.as_deref());

    let compiled = Compiler::new(&script.text)
        .check_references(args.check_refs)
        .compile();
    if let Err(e) = compiled {
        report_and_exit(&e, &script, args.color);
    }

    // Silent on success (like cargo check)
}
