//! Line matcher for MSBuild / C++Builder diagnostics.
//!
//! Two shapes are tried in order; the first match wins:
//! - `[N>]File.cpp(12[,7]): error|warning [CODE]: message`
//! - `[N>]label: error|warning [CODE]: message` (no location)
//!
//! Anything else is log noise and yields `None`.

use crate::models::{Issue, Kind};
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn located_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?x)^
            (?:\d+>)?                                   # node prefix from parallel builds
            (?P<file>.+?)                               # shortest path before the location
            \(
                (?P<line>\d+)
                (?:,(?P<col>\d+))?
            \)
            \s*:\s*
            (?P<kind>(?i:error|warning))
            (?:\s+(?P<code>[A-Za-z][A-Za-z0-9]*))?
            \s*:\s*
            (?P<message>.*)
            $",
        )
        .expect("located diagnostic regex")
    })
}

fn unlocated_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?x)^
            (?:\d+>)?
            (?P<file>[^:]+?)                            # label up to the first colon
            \s*:\s*
            (?P<kind>(?i:error|warning))
            (?:\s+(?P<code>[A-Za-z][A-Za-z0-9]*))?
            \s*:\s*
            (?P<message>.*)
            $",
        )
        .expect("unlocated diagnostic regex")
    })
}

fn project_ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\s*\[[^\[\]]*\.cbproj\]\s*$").expect("project reference regex")
    })
}

/// Match one raw log line against the known diagnostic shapes.
pub fn match_line(raw: &str) -> Option<Issue> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }
    if let Some(caps) = located_re().captures(line) {
        let num = caps.name("line").map(|m| parse_number(m.as_str()));
        let col = caps.name("col").map(|m| parse_number(m.as_str()));
        return Some(build_issue(&caps, num, col));
    }
    unlocated_re()
        .captures(line)
        .map(|caps| build_issue(&caps, None, None))
}

/// Characters that end a line, including a lone `\r` left by progress output.
/// A `\r\n` pair yields an empty piece, which is skipped like any blank line.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Match every line of `text`, keeping log order.
pub fn match_lines(text: &str) -> Vec<Issue> {
    text.split(LINE_BREAKS)
        .filter_map(match_line)
        .inspect(|is| {
            tracing::trace!(file = %is.file, line = ?is.line, code = %is.code, "matched diagnostic")
        })
        .collect()
}

/// Digits only reach here; values past `u64::MAX` saturate.
fn parse_number(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

fn build_issue(caps: &Captures<'_>, line: Option<u64>, col: Option<u64>) -> Issue {
    Issue {
        file: normalize_file(caps.name("file").map_or("", |m| m.as_str())),
        line,
        col,
        kind: Kind::from_keyword(caps.name("kind").map(|m| m.as_str())),
        code: caps
            .name("code")
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
        message: clean_message(caps.name("message").map_or("", |m| m.as_str())),
    }
}

/// Strip quotes and whitespace, then use backslash separators.
pub fn normalize_file(raw: &str) -> String {
    raw.trim_matches(|c: char| c == '"' || c == '\'' || c.is_whitespace())
        .replace('/', "\\")
}

/// Trim and drop a trailing `[...\Project.cbproj]` reference.
pub fn clean_message(raw: &str) -> String {
    project_ref_re().replace(raw.trim(), "").trim().to_string()
}
