use std::io::Read;
use std::path::Path;

use crate::engine::RedactionEngine;
use crate::error::Result;

/// Redact a file (or stdin) to stdout. With `report`, a JSON summary of
/// per-category counts goes to stderr.
pub fn run(engine: &RedactionEngine, file: Option<&Path>, report: bool) -> Result<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if report {
        let full = engine.redact_with_report(&input)?;
        print!("{}", full.text);
        eprintln!("{}", serde_json::to_string_pretty(&full.counts)?);
    } else {
        print!("{}", engine.redact(&input));
    }
    Ok(())
}
