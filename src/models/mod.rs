//! Diagnostic records and their per-file grouping.

pub mod index;

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
/// Diagnostic severity.
pub enum Kind {
    #[default]
    Error,
    Warning,
}

impl Kind {
    /// Parse a captured severity keyword (any case). Anything unknown is an error.
    pub fn from_keyword(s: Option<&str>) -> Kind {
        match s.map(|k| k.to_ascii_lowercase()) {
            Some(k) if k == "warning" => Kind::Warning,
            _ => Kind::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Error => "error",
            Kind::Warning => "warning",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One parsed diagnostic line.
pub struct Issue {
    pub file: String,
    pub line: Option<u64>,
    /// Only set when `line` is set.
    pub col: Option<u64>,
    pub kind: Kind,
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_keyword_defaults_to_error() {
        assert_eq!(Kind::from_keyword(Some("WARNING")), Kind::Warning);
        assert_eq!(Kind::from_keyword(Some("Error")), Kind::Error);
        assert_eq!(Kind::from_keyword(None), Kind::Error);
    }

    #[test]
    fn test_issue_serializes_null_location() {
        let is = Issue {
            file: "linker".into(),
            line: None,
            col: None,
            kind: Kind::Warning,
            code: String::new(),
            message: "m".into(),
        };
        let v = serde_json::to_value(&is).unwrap();
        assert!(v["line"].is_null());
        assert!(v["col"].is_null());
        assert_eq!(v["kind"], "warning");
        let keys: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["file", "line", "col", "kind", "code", "message"]);
    }
}
