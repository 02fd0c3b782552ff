//! Log discovery: first existing candidate wins.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Default candidates relative to the tool root, errors-only log first.
pub const DEFAULT_LOGS: [&str; 2] = ["logs/msbuild.errors.log", "logs/msbuild.log"];

/// Resolve candidate log paths against `root`; absolute entries are kept as is.
pub fn candidate_paths<S: AsRef<str>>(root: &Path, logs: &[S]) -> Vec<PathBuf> {
    logs.iter().map(|l| root.join(l.as_ref())).collect()
}

/// Return the first candidate that exists.
pub fn locate_log(candidates: &[PathBuf]) -> Result<PathBuf> {
    candidates
        .iter()
        .find(|p| p.exists())
        .cloned()
        .ok_or_else(|| Error::NoInput {
            candidates: candidates.to_vec(),
        })
}
