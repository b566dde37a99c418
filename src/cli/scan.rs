use std::path::{Path, PathBuf};

use crate::engine::RedactionEngine;
use crate::error::Result;

/// Pre-commit style scan: report lines containing detectable PII or
/// secrets in staged files or a given path. Returns the finding count;
/// the caller turns a non-zero count into a failing exit code.
pub fn run(engine: &RedactionEngine, staged: bool, path: Option<&str>) -> Result<usize> {
    let mut total_findings = 0;

    if staged {
        let output = std::process::Command::new("git")
            .args(["diff", "--cached", "--name-only"])
            .output()?;

        if !output.status.success() {
            eprintln!("textscrub: failed to get staged files (not a git repo?)");
            std::process::exit(1);
        }

        let file_list = String::from_utf8_lossy(&output.stdout);
        let files: Vec<&str> = file_list.lines().filter(|l| !l.is_empty()).collect();

        if files.is_empty() {
            eprintln!("textscrub: no staged files to scan.");
            return Ok(0);
        }

        eprintln!("textscrub: scanning {} staged file(s)...", files.len());
        for file in files {
            total_findings += scan_file(engine, Path::new(file))?;
        }
    } else if let Some(path) = path {
        let path_buf = PathBuf::from(path);
        if path_buf.is_dir() {
            eprintln!("textscrub: scanning directory {}...", path);
            total_findings += scan_dir(engine, &path_buf)?;
        } else if path_buf.is_file() {
            eprintln!("textscrub: scanning file {}...", path);
            total_findings += scan_file(engine, &path_buf)?;
        } else {
            eprintln!("textscrub: path not found: {}", path);
            std::process::exit(1);
        }
    } else {
        eprintln!("textscrub: use --staged or provide a path.");
        std::process::exit(1);
    }

    if total_findings > 0 {
        eprintln!(
            "\ntextscrub: {} line(s) with sensitive content found.",
            total_findings
        );
    } else {
        eprintln!("textscrub: scan clean -- nothing sensitive detected.");
    }
    Ok(total_findings)
}

/// Scan a single file. Returns the number of flagged lines.
fn scan_file(engine: &RedactionEngine, path: &Path) -> Result<usize> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return Ok(0), // Skip binary/unreadable files
    };

    let mut findings = 0;
    for (line_num, line) in contents.lines().enumerate() {
        if !engine.find_spans(line).is_empty() {
            findings += 1;
            eprintln!(
                "  {}:{}: sensitive content detected",
                path.display(),
                line_num + 1
            );
        }
    }
    Ok(findings)
}

fn scan_dir(engine: &RedactionEngine, dir: &Path) -> Result<usize> {
    let mut total = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            total += scan_dir(engine, &path)?;
        } else if path.is_file() {
            total += scan_file(engine, &path)?;
        }
    }
    Ok(total)
}
