// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON file parser.

use crate::domain::{ConfigError, FieldName, FieldValue, LoadedFields, Result};
use crate::ports::ConfigParser;

/// JSON parser implementation.
///
/// The document must be a JSON object. Each top-level key becomes a field and
/// keeps its decoded value, nested objects and arrays included.
///
/// # Examples
///
/// ```rust
/// use greenhorn::adapters::JsonParser;
/// use greenhorn::domain::FieldValue;
/// use greenhorn::ports::ConfigParser;
///
/// let fields = JsonParser::new().parse(r#"{"a": 1, "b": [1, 2]}"#).unwrap();
/// assert_eq!(fields.get("a"), Some(&FieldValue::from(1)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }
}

impl ConfigParser for JsonParser {
    fn parse(&self, content: &str) -> Result<LoadedFields> {
        let document: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ConfigError::source_parse("json", e))?;

        match document {
            serde_json::Value::Object(map) => Ok(map
                .into_iter()
                .map(|(k, v)| (FieldName::from(k), FieldValue::from(v)))
                .collect()),
            other => Err(ConfigError::SourceParse {
                format: "json".to_string(),
                message: format!(
                    "top-level value must be an object, found {}",
                    FieldValue::from(other).type_name()
                ),
                source: None,
            }),
        }
    }
}
