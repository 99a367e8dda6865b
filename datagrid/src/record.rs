//! Records and their identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One data row: an opaque mapping of field key to JSON value.
pub type Record = serde_json::Map<String, Value>;

/// Field holding the row identifier.
pub const ID_FIELD: &str = "id";

/// Text form of a field, shared by filtering, sorting and display.
///
/// Strings are taken as-is, numbers and booleans in their JSON text form,
/// nested values as compact JSON. Absent and `null` fields are empty.
pub fn field_text(record: &Record, key: &str) -> String {
    record.get(key).map(value_text).unwrap_or_default()
}

pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Identifier correlating an action-menu request back to its row.
///
/// Keeps the JSON value of the record's `id` field, so numeric IDs stay
/// numeric in notification payloads. A record without an `id` gets
/// [`RecordId::missing`], which still dispatches.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Option<Value>);

impl RecordId {
    pub fn of(record: &Record) -> Self {
        Self(record.get(ID_FIELD).filter(|v| !v.is_null()).cloned())
    }

    pub fn missing() -> Self {
        Self(None)
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    pub fn value(&self) -> Option<&Value> {
        self.0.as_ref()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => f.write_str(&value_text(value)),
            None => f.write_str("undefined"),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(Some(Value::from(id)))
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(Some(Value::from(id)))
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(Some(Value::from(id)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn field_text_forms() {
        let r = record(json!({"s": "Bold", "n": 7, "f": 1.5, "b": true, "z": null, "a": [1, 2]}));
        assert_eq!(field_text(&r, "s"), "Bold");
        assert_eq!(field_text(&r, "n"), "7");
        assert_eq!(field_text(&r, "f"), "1.5");
        assert_eq!(field_text(&r, "b"), "true");
        assert_eq!(field_text(&r, "z"), "");
        assert_eq!(field_text(&r, "a"), "[1,2]");
        assert_eq!(field_text(&r, "absent"), "");
    }

    #[test]
    fn record_id_keeps_json_value() {
        let id = RecordId::of(&record(json!({"id": 7})));
        assert_eq!(id, RecordId::from(7));
        assert_eq!(serde_json::to_value(&id).unwrap(), json!(7));
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn missing_id() {
        let id = RecordId::of(&record(json!({"name": "x"})));
        assert!(id.is_missing());
        assert_eq!(id.to_string(), "undefined");
        assert_eq!(serde_json::to_value(&id).unwrap(), Value::Null);
        assert!(RecordId::of(&record(json!({"id": null}))).is_missing());
    }
}
