// SPDX-License-Identifier: MIT OR Apache-2.0

//! TOML file parser.

use crate::domain::{ConfigError, FieldName, FieldValue, LoadedFields, Result};
use crate::ports::ConfigParser;

/// TOML parser implementation.
///
/// Each top-level key or table becomes a field. Datetimes are kept as their
/// TOML text, since the value model has no datetime variant.
///
/// # Examples
///
/// ```rust
/// use greenhorn::adapters::TomlParser;
/// use greenhorn::domain::FieldValue;
/// use greenhorn::ports::ConfigParser;
///
/// let toml = "[build-system]\nrequires = [\"setuptools\"]\n";
/// let fields = TomlParser::new().parse(toml).unwrap();
/// let build = fields.get("build-system").unwrap();
/// assert_eq!(
///     build.get("requires"),
///     Some(&FieldValue::List(vec![FieldValue::from("setuptools")]))
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TomlParser;

impl TomlParser {
    /// Creates a new TOML parser.
    pub fn new() -> Self {
        TomlParser
    }

    /// Converts a TOML value into a field value.
    fn convert(value: toml::Value) -> FieldValue {
        match value {
            toml::Value::String(s) => FieldValue::String(s),
            toml::Value::Integer(n) => FieldValue::Integer(n),
            toml::Value::Float(n) => FieldValue::Float(n),
            toml::Value::Boolean(b) => FieldValue::Bool(b),
            toml::Value::Datetime(dt) => FieldValue::String(dt.to_string()),
            toml::Value::Array(items) => {
                FieldValue::List(items.into_iter().map(Self::convert).collect())
            }
            toml::Value::Table(table) => FieldValue::Map(
                table
                    .into_iter()
                    .map(|(k, v)| (k, Self::convert(v)))
                    .collect(),
            ),
        }
    }
}

impl ConfigParser for TomlParser {
    fn parse(&self, content: &str) -> Result<LoadedFields> {
        let table: toml::Table =
            toml::from_str(content).map_err(|e| ConfigError::source_parse("toml", e))?;

        Ok(table
            .into_iter()
            .map(|(k, v)| (FieldName::from(k), Self::convert(v)))
            .collect())
    }
}
