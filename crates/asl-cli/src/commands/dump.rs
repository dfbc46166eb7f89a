use std::fs;
use std::path::{Path, PathBuf};

use asl_core::ActionLayer;
use asl_lib::Compiler;

use super::script_loader::{load_or_exit, report_and_exit};

pub struct DumpArgs {
    pub script_path: Option<PathBuf>,
    pub script_text: Option<String>,
    pub json: bool,
    pub output: Option<PathBuf>,
    pub check_refs: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let script = load_or_exit(args.script_path.as_deref(), args.script_text.as_deref());

    let layers = match Compiler::new(&script.text)
        .check_references(args.check_refs)
        .compile()
    {
        Ok(layers) => layers,
        Err(e) => report_and_exit(&e, &script, args.color),
    };

    if let Some(path) = &args.output
        && let Err(msg) = write_cache(&layers, path)
    {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }

    if args.json {
        match serde_json::to_string_pretty(&layers) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize layers: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", asl_lib::write_script(&layers));
    }
}

/// The cache holds every layer as a single postcard sequence.
pub(crate) fn write_cache(layers: &[ActionLayer], path: &Path) -> Result<(), String> {
    let bytes = ActionLayer::list_to_bytes(layers)
        .map_err(|e| format!("failed to encode layers: {}", e))?;
    fs::write(path, bytes).map_err(|e| format!("failed to write '{}': {}", path.display(), e))
}
