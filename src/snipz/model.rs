use crate::error::{Result, SnipzError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The complete name → body mapping.
///
/// Backed by a `BTreeMap` so both listings and the serialized file come out in
/// byte order of the names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetTable {
    entries: BTreeMap<String, String>,
}

impl SnippetTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Inserts or overwrites. Returns the previous body, if any.
    pub fn insert(&mut self, name: String, body: String) -> Option<String> {
        self.entries.insert(name, body)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }

    /// Names in ascending byte order.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// Snippet names are any non-empty string.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SnipzError::InvalidName(
            "snippet name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

impl FromIterator<(String, String)> for SnippetTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_sorted_case_sensitively() {
        let table: SnippetTable = [("beta", ""), ("Zulu", ""), ("alpha", "")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        assert_eq!(table.names(), vec!["Zulu", "alpha", "beta"]);
    }

    #[test]
    fn insert_overwrites_existing_body() {
        let mut table = SnippetTable::new();
        assert!(table.insert("x".into(), "one".into()).is_none());
        assert_eq!(table.insert("x".into(), "two".into()), Some("one".into()));
        assert_eq!(table.get("x"), Some("two"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn serializes_as_plain_json_object() {
        let mut table = SnippetTable::new();
        table.insert("greet".into(), "hello\nworld".into());

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"greet":"hello\nworld"}"#);
    }

    #[test]
    fn rejects_non_string_values() {
        let parsed: std::result::Result<SnippetTable, _> = serde_json::from_str(r#"{"a": 1}"#);
        assert!(parsed.is_err());

        let parsed: std::result::Result<SnippetTable, _> = serde_json::from_str(r#"["a"]"#);
        assert!(parsed.is_err());
    }
}
