use crate::error::{Error, Result};
use crate::types::Row;
use serde_json::{Map, Value};
use std::io::Read;

/// A parsed top-level JSON object, iterated in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: Map<String, Value>,
}

impl Document {
    /// Parse a complete JSON document that must be an object.
    ///
    /// Duplicate keys keep their first position and take their last value.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Read `reader` to the end, then parse it with [`Document::from_slice`]
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(|e| Error::io("<reader>", e))?;
        Self::from_slice(&content)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(entries) => Ok(Document { entries }),
            other => Err(Error::NotAnObject {
                found: kind_of(&other),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One row per key, in iteration order
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| Row::new(key.as_str(), stringify(value)))
    }
}

/// Textual form of a value in the second CSV column.
///
/// Strings are written verbatim; everything else as compact JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_follow_document_order() {
        let doc = Document::from_slice(br#"{"zeta": 1, "alpha": "x", "mid": true}"#).unwrap();
        let keys: Vec<String> = doc.rows().map(|r| r.key).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn test_stringify() {
        assert_eq!(stringify(&json!("plain text")), "plain text");
        assert_eq!(stringify(&json!(1)), "1");
        assert_eq!(stringify(&json!(-2.5)), "-2.5");
        assert_eq!(stringify(&json!(true)), "true");
        assert_eq!(stringify(&Value::Null), "null");
        assert_eq!(stringify(&json!([1, 2])), "[1,2]");
        assert_eq!(stringify(&json!({"a": {"b": null}})), r#"{"a":{"b":null}}"#);
    }

    #[test]
    fn test_numbers_keep_source_text() {
        let doc = Document::from_slice(
            br#"{"big": 12345678901234567890123, "neg": -99999999999999999999, "exp": 1e100, "frac": 1.50}"#,
        )
        .unwrap();
        let rows: Vec<Row> = doc.rows().collect();
        assert_eq!(
            rows,
            vec![
                Row::new("big", "12345678901234567890123"),
                Row::new("neg", "-99999999999999999999"),
                Row::new("exp", "1e100"),
                Row::new("frac", "1.50"),
            ]
        );
    }

    #[test]
    fn test_rejects_non_objects() {
        let err = Document::from_slice(b"[1,2,3]").unwrap_err();
        assert!(matches!(err, Error::NotAnObject { found: "array" }));

        let err = Document::from_slice(b"\"just a string\"").unwrap_err();
        assert!(matches!(err, Error::NotAnObject { found: "string" }));

        let err = Document::from_slice(b"{\"a\": ").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_duplicate_keys_last_value_wins() {
        let doc = Document::from_slice(br#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        let rows: Vec<Row> = doc.rows().collect();
        assert_eq!(rows, vec![Row::new("a", "3"), Row::new("b", "2")]);
    }

    #[test]
    fn test_empty_object() {
        let doc = Document::from_reader(&b" {} "[..]).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.rows().count(), 0);
    }
}
