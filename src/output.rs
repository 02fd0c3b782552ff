//! Output writers: per-file `.err.txt` reports, the `index.json` summary,
//! and the stdout summary.
//!
//! Supports `human` (default) and `json` stdout modes. Files on disk are the
//! same in both modes.

use crate::error::{Error, Result};
use crate::models::index::IssueIndex;
use crate::models::Issue;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::fs;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.json";
pub const REPORT_SUFFIX: &str = ".err.txt";

/// Turn `C:\path\to\File.cpp` into `C__path_to_File.cpp.err.txt`.
pub fn safe_name(file: &str) -> String {
    let mut s: String = file
        .chars()
        .map(|c| match c {
            ':' | '\\' | '/' => '_',
            c => c,
        })
        .collect();
    s.push_str(REPORT_SUFFIX);
    s
}

/// Render one issue as `file(line,col): kind CODE: message`.
pub fn format_issue(is: &Issue) -> String {
    let loc = match (is.line, is.col) {
        (Some(line), Some(col)) => format!("({},{})", line, col),
        (Some(line), None) => format!("({})", line),
        (None, _) => String::new(),
    };
    let code = if is.code.is_empty() {
        String::new()
    } else {
        format!(" {}", is.code)
    };
    format!("{}{}: {}{}: {}", is.file, loc, is.kind, code, is.message)
}

/// Report body for one file, one line per issue.
pub fn compose_report(issues: &[Issue]) -> String {
    let mut body = String::new();
    for is in issues {
        body.push_str(&format_issue(is));
        body.push('\n');
    }
    body
}

/// Write one report per file key into `dir`, overwriting old content.
pub fn write_reports(index: &IssueIndex, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(index.files_with_issues());
    for (file, issues) in index.iter() {
        let path = dir.join(safe_name(file));
        fs::write(&path, compose_report(issues)).map_err(|e| Error::io(&path, e))?;
        tracing::trace!(report = %path.display(), issues = issues.len(), "wrote report");
        written.push(path);
    }
    Ok(written)
}

/// Compose the index document (pure) for writing and testing.
pub fn compose_index_json(index: &IssueIndex) -> Result<JsonVal> {
    Ok(json!({
        "total_issues": index.total_issues(),
        "files_with_issues": index.files_with_issues(),
        "by_file": serde_json::to_value(index)?,
    }))
}

/// Write `index.json` into `dir` as indented UTF-8.
pub fn write_index(index: &IssueIndex, dir: &Path) -> Result<PathBuf> {
    let doc = compose_index_json(index)?;
    let path = dir.join(INDEX_FILE);
    fs::write(&path, serde_json::to_string_pretty(&doc)?).map_err(|e| Error::io(&path, e))?;
    Ok(path)
}

pub fn summary_line(index: &IssueIndex) -> String {
    format!(
        "Parsed {} issues across {} files.",
        index.total_issues(),
        index.files_with_issues()
    )
}

/// Print the run result in the requested stdout mode.
pub fn print_summary(index: &IssueIndex, output: &str) -> Result<()> {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_index_json(index)?)?
        ),
        _ => println!("{}", summary_line(index)),
    }
    Ok(())
}
