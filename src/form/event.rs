//! Change notifications delivered by text inputs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The element whose value changed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventTarget {
    pub value: String,
}

/// A text input's change notification
///
/// Serializes as `{"currentTarget": {"value": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub current_target: EventTarget,
}

impl ChangeEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            current_target: EventTarget {
                value: value.into(),
            },
        }
    }

    pub fn value(&self) -> &str {
        &self.current_target.value
    }

    pub fn into_value(self) -> String {
        self.current_target.value
    }

    /// Probe an untyped input for the change-event shape
    ///
    /// Matches only an object with a `currentTarget` object whose `value` is a
    /// string. Extra properties are ignored.
    pub fn from_json(input: &Value) -> Option<Self> {
        input
            .get("currentTarget")
            .filter(|target| target.is_object())
            .and_then(|target| target.get("value"))
            .and_then(Value::as_str)
            .map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_sets_target_value() {
        let event = ChangeEvent::new("hello");
        assert_eq!(event.value(), "hello");
        assert_eq!(event.into_value(), "hello");
    }

    #[test]
    fn test_serializes_in_camel_case() {
        let json = serde_json::to_value(ChangeEvent::new("x")).unwrap();
        assert_eq!(json, json!({"currentTarget": {"value": "x"}}));
    }

    mod from_json {
        use super::*;

        #[test]
        fn test_accepts_event_shape() {
            let input = json!({"currentTarget": {"value": "abc", "id": 3}, "type": "input"});
            assert_eq!(ChangeEvent::from_json(&input), Some(ChangeEvent::new("abc")));
        }

        #[test]
        fn test_rejects_scalars() {
            assert_eq!(ChangeEvent::from_json(&json!(42)), None);
            assert_eq!(ChangeEvent::from_json(&json!("abc")), None);
            assert_eq!(ChangeEvent::from_json(&Value::Null), None);
        }

        #[test]
        fn test_rejects_missing_target() {
            assert_eq!(ChangeEvent::from_json(&json!({"target": {"value": "a"}})), None);
        }

        #[test]
        fn test_rejects_non_object_target() {
            assert_eq!(ChangeEvent::from_json(&json!({"currentTarget": "a"})), None);
        }

        #[test]
        fn test_rejects_non_string_value() {
            assert_eq!(
                ChangeEvent::from_json(&json!({"currentTarget": {"value": 5}})),
                None
            );
            assert_eq!(ChangeEvent::from_json(&json!({"currentTarget": {}})), None);
        }
    }
}
