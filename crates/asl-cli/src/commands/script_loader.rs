use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// A loaded script and the name used for it in diagnostics.
pub struct Script {
    pub name: String,
    pub text: String,
}

pub fn load_script(script_path: Option<&Path>, script_text: Option<&str>) -> Result<Script, String> {
    if let Some(text) = script_text {
        return Ok(Script {
            name: "<inline>".to_string(),
            text: text.to_string(),
        });
    }

    match script_path {
        Some(path) if path.as_os_str() == "-" => load_stdin(),
        Some(path) => load_file(path),
        None => Err("script is required: use a positional argument or -s/--script".to_string()),
    }
}

fn load_stdin() -> Result<Script, String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(Script {
        name: "<stdin>".to_string(),
        text,
    })
}

fn load_file(path: &Path) -> Result<Script, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    Ok(Script {
        name: path.to_string_lossy().into_owned(),
        text,
    })
}

/// Loads the script or exits with an error message.
pub fn load_or_exit(script_path: Option<&Path>, script_text: Option<&str>) -> Script {
    match load_script(script_path, script_text) {
        Ok(script) => script,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}

/// Prints a compile error against its script and exits.
pub fn report_and_exit(error: &asl_lib::Error, script: &Script, color: bool) -> ! {
    eprintln!(
        "{}",
        error
            .printer()
            .source(&script.text)
            .path(&script.name)
            .colored(color)
            .render()
    );
    std::process::exit(1);
}
