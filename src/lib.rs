//! errdex core library.
//!
//! This crate turns an MSBuild / C++Builder diagnostic log into one text
//! report per source file plus a JSON index, for tools that should not have
//! to re-parse the raw build log.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery of `errdex.toml|yaml` and effective settings.
//! - `locate`: Picks the first existing candidate log.
//! - `matcher`: Line shapes and field normalization.
//! - `models`: `Issue` records and the per-file `IssueIndex`.
//! - `output`: `.err.txt` reports, `index.json`, and the stdout summary.
//! - `extract`: The single-pass pipeline tying the above together.
//! - `error`: Error taxonomy and exit codes.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod locate;
pub mod matcher;
pub mod models;
pub mod output;
pub mod utils;
