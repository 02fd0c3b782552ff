//! File → issues grouping built once per run.
//!
//! Keys keep first-seen order and each file's issues keep log order.

use super::Issue;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct IssueIndex {
    files: Vec<(String, Vec<Issue>)>,
    slots: HashMap<String, usize>,
}

impl IssueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from issues in log order.
    pub fn from_issues<I: IntoIterator<Item = Issue>>(issues: I) -> Self {
        let mut ix = Self::new();
        for is in issues {
            ix.push(is);
        }
        ix
    }

    /// Append `issue` under its own `file` key.
    pub fn push(&mut self, issue: Issue) {
        match self.slots.get(&issue.file) {
            Some(&slot) => self.files[slot].1.push(issue),
            None => {
                self.slots.insert(issue.file.clone(), self.files.len());
                self.files.push((issue.file.clone(), vec![issue]));
            }
        }
    }

    /// Files in first-seen order with their issues.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Issue])> {
        self.files.iter().map(|(f, v)| (f.as_str(), v.as_slice()))
    }

    pub fn get(&self, file: &str) -> Option<&[Issue]> {
        self.slots.get(file).map(|&slot| self.files[slot].1.as_slice())
    }

    /// Flat view of every issue, grouped by file.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.files.iter().flat_map(|(_, v)| v.iter())
    }

    pub fn total_issues(&self) -> usize {
        self.files.iter().map(|(_, v)| v.len()).sum()
    }

    pub fn files_with_issues(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FromIterator<Issue> for IssueIndex {
    fn from_iter<T: IntoIterator<Item = Issue>>(iter: T) -> Self {
        Self::from_issues(iter)
    }
}

impl Serialize for IssueIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.files.len()))?;
        for (file, issues) in &self.files {
            map.serialize_entry(file, issues)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Kind;

    fn issue(file: &str, msg: &str) -> Issue {
        Issue {
            file: file.into(),
            line: Some(1),
            col: None,
            kind: Kind::Error,
            code: String::new(),
            message: msg.into(),
        }
    }

    #[test]
    fn test_keys_first_seen_and_issues_in_log_order() {
        let ix: IssueIndex = vec![
            issue("b.cpp", "1"),
            issue("a.cpp", "2"),
            issue("b.cpp", "3"),
            issue("a.cpp", "4"),
        ]
        .into_iter()
        .collect();
        let keys: Vec<_> = ix.iter().map(|(f, _)| f.to_string()).collect();
        assert_eq!(keys, vec!["b.cpp", "a.cpp"]);
        let msgs: Vec<_> = ix
            .get("b.cpp")
            .unwrap()
            .iter()
            .map(|i| i.message.as_str())
            .collect();
        assert_eq!(msgs, vec!["1", "3"]);
        assert_eq!(ix.total_issues(), 4);
        assert_eq!(ix.files_with_issues(), 2);
        assert!(ix.iter().all(|(f, v)| v.iter().all(|i| i.file == f)));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let ix = IssueIndex::from_issues(vec![issue("x", "same"), issue("x", "same")]);
        assert_eq!(ix.get("x").map(|v| v.len()), Some(2));
        assert_eq!(ix.issues().count(), 2);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let ix = IssueIndex::from_issues(vec![issue("z", "a"), issue("a", "b")]);
        let v = serde_json::to_value(&ix).unwrap();
        let keys: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert_eq!(v["a"][0]["message"], "b");
    }
}
