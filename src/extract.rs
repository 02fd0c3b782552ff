//! Extraction pipeline: locate → read → match → aggregate → write.
//!
//! Produces an `Extraction` holding the issue index and the paths written.
//! Nothing is created on disk when no candidate log exists.

use crate::error::{Error, Result};
use crate::locate::locate_log;
use crate::matcher::match_lines;
use crate::models::index::IssueIndex;
use crate::output;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of one run.
pub struct Extraction {
    pub log: PathBuf,
    pub index: IssueIndex,
    pub reports: Vec<PathBuf>,
    pub index_file: PathBuf,
}

/// Read a log as text, replacing invalid UTF-8 instead of failing.
pub fn read_log(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse log text into an index without touching the filesystem.
pub fn parse_log(text: &str) -> IssueIndex {
    IssueIndex::from_issues(match_lines(text))
}

/// Run the whole pipeline for the given candidates and output directory.
pub fn run_extract(candidates: &[PathBuf], errors_dir: &Path) -> Result<Extraction> {
    let log = locate_log(candidates)?;
    tracing::debug!(log = %log.display(), "using log");

    let text = read_log(&log)?;
    let index = parse_log(&text);
    tracing::debug!(
        issues = index.total_issues(),
        files = index.files_with_issues(),
        "parsed log"
    );

    fs::create_dir_all(errors_dir).map_err(|e| Error::io(errors_dir, e))?;
    let reports = output::write_reports(&index, errors_dir)?;
    let index_file = output::write_index(&index, errors_dir)?;
    tracing::debug!(dir = %errors_dir.display(), reports = reports.len(), "wrote outputs");

    Ok(Extraction {
        log,
        index,
        reports,
        index_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_log_replaces_invalid_utf8() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("bad.log");
        fs::write(&p, b"a.cpp(1): error E1: bad \xff byte\n").unwrap();
        let text = read_log(&p).unwrap();
        assert!(text.contains('\u{FFFD}'));
        let ix = parse_log(&text);
        assert_eq!(ix.total_issues(), 1);
    }

    #[test]
    fn test_total_equals_matched_lines() {
        let text = "\
Build started.
1>uMain.cpp(15,13): error E4656: Access violation [C:\\proj\\App.cbproj]
1>uMain.cpp(16): warning W8004: unused
linker: error L1000: unresolved symbol

Build FAILED.
";
        let ix = parse_log(text);
        assert_eq!(ix.total_issues(), 3);
        assert_eq!(
            ix.iter().map(|(_, v)| v.len()).sum::<usize>(),
            ix.total_issues()
        );
    }

    #[test]
    fn test_missing_input_creates_nothing() {
        let dir = tempdir().unwrap();
        let errors = dir.path().join("errors");
        let cands = vec![dir.path().join("logs/msbuild.errors.log")];
        let err = run_extract(&cands, &errors).err().unwrap();
        assert_eq!(err.exit_code(), 2);
        assert!(!errors.exists());
    }
}
