//! CLI utility helpers

use side_export::{Error, Result};
use std::fs;
use std::path::PathBuf;

/// Value following `flag` (or its short form)
pub fn parse_flag_arg(args: &[String], flag: &str, short: Option<&str>) -> Option<String> {
    for (i, arg) in args.iter().enumerate() {
        if arg == flag || Some(arg.as_str()) == short {
            if let Some(value) = args.get(i + 1) {
                return Some(value.clone());
            }
        }
    }
    None
}

/// Parse --output argument to determine output file path
pub fn parse_output_arg(args: &[String]) -> Option<PathBuf> {
    parse_flag_arg(args, "--output", Some("-o")).map(PathBuf::from)
}

/// Arguments that are not flags or flag values
pub fn positional_args(args: &[String]) -> Vec<&str> {
    const VALUE_FLAGS: [&str; 6] = ["--suite", "--output", "-o", "--config", "-c", "--template-dir"];
    let mut positional = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
            continue;
        }
        positional.push(arg.as_str());
    }
    positional
}

/// Write content to file or stdout
pub fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).map_err(Error::Io)?;
            eprintln!("Written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
