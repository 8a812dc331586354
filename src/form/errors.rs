//! Validation error map

use serde::Serialize;
use std::collections::BTreeMap;

/// Field name to optional message
///
/// A key mapped to `None` is a field that was checked and has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    entries: BTreeMap<&'static str, Option<String>>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error message for a field
    pub fn set(&mut self, field: &'static str, message: impl Into<String>) {
        self.entries.insert(field, Some(message.into()));
    }

    /// Mark a field as checked without error
    pub fn clear(&mut self, field: &'static str) {
        self.entries.insert(field, None);
    }

    /// Overwrite a field's entry
    pub fn insert(&mut self, field: &'static str, message: Option<String>) {
        self.entries.insert(field, message);
    }

    /// Builder form of [`ErrorMap::set`]
    pub fn with(mut self, field: &'static str, message: impl Into<String>) -> Self {
        self.set(field, message);
        self
    }

    /// Current message for a field, if any
    pub fn message(&self, field: &str) -> Option<&str> {
        self.entries.get(field).and_then(|m| m.as_deref())
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.message(field).is_some()
    }

    /// Whether the field has an entry at all (including a cleared one)
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// True when no entry holds a message
    pub fn is_valid(&self) -> bool {
        self.entries.values().all(Option::is_none)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_deref()))
    }

    /// Fields that currently carry a message
    pub fn invalid_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter()
            .filter_map(|(field, message)| message.map(|_| field))
    }

    /// Drop entries whose key is not in `fields`, returning the dropped keys
    pub(crate) fn retain_fields(&mut self, fields: &[&str]) -> Vec<&'static str> {
        let mut dropped = Vec::new();
        self.entries.retain(|field, _| {
            let known = fields.contains(field);
            if !known {
                dropped.push(*field);
            }
            known
        });
        dropped
    }
}

impl FromIterator<(&'static str, String)> for ErrorMap {
    fn from_iter<T: IntoIterator<Item = (&'static str, String)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(field, message)| (field, Some(message)))
                .collect(),
        }
    }
}

impl FromIterator<(&'static str, Option<String>)> for ErrorMap {
    fn from_iter<T: IntoIterator<Item = (&'static str, Option<String>)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_map_is_valid() {
        let errors = ErrorMap::new();
        assert!(errors.is_valid());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_cleared_entry_is_still_valid() {
        let mut errors = ErrorMap::new();
        errors.clear("name");
        assert!(errors.is_valid());
        assert!(errors.contains("name"));
        assert_eq!(errors.message("name"), None);
    }

    #[test]
    fn test_message_makes_map_invalid() {
        let errors = ErrorMap::new().with("age", "too young");
        assert!(!errors.is_valid());
        assert!(errors.has_error("age"));
        assert_eq!(errors.message("age"), Some("too young"));
    }

    #[test]
    fn test_set_then_clear() {
        let mut errors = ErrorMap::new().with("age", "too young");
        errors.clear("age");
        assert!(errors.is_valid());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_invalid_fields_skips_cleared() {
        let mut errors = ErrorMap::new().with("a", "bad").with("c", "worse");
        errors.clear("b");
        let invalid: Vec<_> = errors.invalid_fields().collect();
        assert_eq!(invalid, vec!["a", "c"]);
    }

    #[test]
    fn test_retain_fields_reports_dropped() {
        let mut errors = ErrorMap::new().with("a", "bad").with("zzz", "stray");
        let dropped = errors.retain_fields(&["a", "b"]);
        assert_eq!(dropped, vec!["zzz"]);
        assert_eq!(errors, ErrorMap::new().with("a", "bad"));
    }

    #[test]
    fn test_collect_from_messages() {
        let errors: ErrorMap = [("a", "bad".to_string())].into_iter().collect();
        assert_eq!(errors.message("a"), Some("bad"));
    }

    #[test]
    fn test_serializes_cleared_as_null() {
        let mut errors = ErrorMap::new().with("a", "bad");
        errors.clear("b");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"a": "bad", "b": null}));
    }
}
