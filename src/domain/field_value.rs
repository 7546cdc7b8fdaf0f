// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decoded field values.
//!
//! This module provides [`FieldValue`], the tagged variant every loaded field is
//! stored as, whatever format it came from, and the [`LoadedFields`] mapping a
//! store owns.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::field_name::FieldName;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The mapping from field name to decoded value held by a store.
pub type LoadedFields = BTreeMap<FieldName, FieldValue>;

/// A decoded configuration value.
///
/// The shape follows whatever the source format produced: environment variables
/// and INI keys are always strings, an INI section is a map of strings, and JSON
/// or TOML values keep their native types. Accessors never convert between
/// variants; `as_i64` on `String("42")` is `None`.
///
/// # Examples
///
/// ```
/// use greenhorn::domain::field_value::FieldValue;
///
/// let value = FieldValue::from(42);
/// assert_eq!(value.as_i64(), Some(42));
/// assert_eq!(value.as_str(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// An explicit null (JSON only).
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// An integer above `i64::MAX` (JSON only). Smaller values are `Integer`.
    Unsigned(u64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    List(Vec<FieldValue>),
    /// A nested mapping.
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Returns the string if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Integer`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float if this is a `Float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the elements if this is a `List`.
    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this is a `Map`.
    pub fn as_map(&self) -> Option<&BTreeMap<String, FieldValue>> {
        match self {
            FieldValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns `true` for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Looks up `key` when this value is a `Map`.
    ///
    /// # Examples
    ///
    /// ```
    /// use greenhorn::domain::field_value::FieldValue;
    /// use std::collections::BTreeMap;
    ///
    /// let mut section = BTreeMap::new();
    /// section.insert("host".to_string(), FieldValue::from("localhost"));
    /// let server = FieldValue::from(section);
    ///
    /// assert_eq!(server.get("host").and_then(FieldValue::as_str), Some("localhost"));
    /// assert!(server.get("port").is_none());
    /// ```
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Returns the integer as `u64` if this is a non-negative `Integer` or an
    /// `Unsigned`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::Integer(n) => u64::try_from(*n).ok(),
            FieldValue::Unsigned(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a short name for the variant, used in logs and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Integer(_) | FieldValue::Unsigned(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::String(_) => "string",
            FieldValue::List(_) => "list",
            FieldValue::Map(_) => "map",
        }
    }

    /// Deserializes this value into `T`.
    ///
    /// The conversion is structural: a `Map` can become a struct and a `List` a
    /// `Vec`, but a `String` holding digits does not become a number. `field` is
    /// only used to label the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use greenhorn::domain::field_value::FieldValue;
    ///
    /// let value = FieldValue::List(vec![FieldValue::from(1), FieldValue::from(2)]);
    /// let ports: Vec<u16> = value.deserialize_into("ports").unwrap();
    /// assert_eq!(ports, vec![1, 2]);
    ///
    /// let text = FieldValue::from("8080");
    /// assert!(text.deserialize_into::<u16>("port").is_err());
    /// ```
    pub fn deserialize_into<T>(&self, field: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let conversion_error = |e: serde_json::Error| ConfigError::TypeConversion {
            field: field.to_string(),
            target_type: std::any::type_name::<T>().to_string(),
            source: Box::new(e),
        };

        let json = serde_json::to_value(self).map_err(conversion_error)?;
        serde_json::from_value(json).map_err(conversion_error)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => FieldValue::Integer(i),
                (None, Some(u)) => FieldValue::Unsigned(u),
                (None, None) => FieldValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => FieldValue::String(s),
            serde_json::Value::Array(items) => {
                FieldValue::List(items.into_iter().map(FieldValue::from).collect())
            }
            serde_json::Value::Object(map) => FieldValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, FieldValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Integer(i64::from(n))
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Float(n)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(items: Vec<FieldValue>) -> Self {
        FieldValue::List(items)
    }
}

impl From<BTreeMap<String, FieldValue>> for FieldValue {
    fn from(map: BTreeMap<String, FieldValue>) -> Self {
        FieldValue::Map(map)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Unsigned(n) => write!(f, "{}", n),
            FieldValue::Float(n) => write!(f, "{}", n),
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::List(_) | FieldValue::Map(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                write!(f, "{}", json)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn section(pairs: &[(&str, &str)]) -> FieldValue {
        FieldValue::Map(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), FieldValue::from(*v)))
                .collect(),
        )
    }

    #[test]
    fn test_accessors_match_variant() {
        assert_eq!(FieldValue::from("x").as_str(), Some("x"));
        assert_eq!(FieldValue::from(true).as_bool(), Some(true));
        assert_eq!(FieldValue::from(7).as_i64(), Some(7));
        assert_eq!(FieldValue::from(1.5).as_f64(), Some(1.5));
        assert!(FieldValue::Null.is_null());
    }

    #[test]
    fn test_accessors_do_not_coerce() {
        let text = FieldValue::from("42");
        assert_eq!(text.as_i64(), None);
        assert_eq!(text.as_bool(), None);

        let int = FieldValue::from(42);
        assert_eq!(int.as_f64(), None);
        assert_eq!(int.as_str(), None);
    }

    #[test]
    fn test_map_lookup() {
        let server = section(&[("host", "localhost")]);
        assert_eq!(server.get("host"), Some(&FieldValue::from("localhost")));
        assert_eq!(FieldValue::from("host").get("host"), None);
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(FieldValue::from(json!(null)), FieldValue::Null);
        assert_eq!(FieldValue::from(json!(1)), FieldValue::Integer(1));
        assert_eq!(FieldValue::from(json!(-3)), FieldValue::Integer(-3));
        assert_eq!(FieldValue::from(json!(2.5)), FieldValue::Float(2.5));
        assert_eq!(FieldValue::from(json!("s")), FieldValue::from("s"));
    }

    #[test]
    fn test_from_json_large_unsigned_is_exact() {
        let value = FieldValue::from(json!(u64::MAX));
        assert_eq!(value, FieldValue::Unsigned(u64::MAX));
        assert_eq!(value.type_name(), "integer");
        assert_eq!(value.as_u64(), Some(u64::MAX));
        assert_eq!(value.as_i64(), None);
        assert_eq!(value.to_string(), "18446744073709551615");
        assert_eq!(value.deserialize_into::<u64>("big").unwrap(), u64::MAX);

        // values that fit stay signed
        assert_eq!(
            FieldValue::from(json!(i64::MAX as u64)),
            FieldValue::Integer(i64::MAX)
        );
    }

    #[test]
    fn test_as_u64() {
        assert_eq!(FieldValue::from(7).as_u64(), Some(7));
        assert_eq!(FieldValue::from(-1).as_u64(), None);
        assert_eq!(FieldValue::from("7").as_u64(), None);
    }

    #[test]
    fn test_deserialize_untagged_large_unsigned() {
        let value: FieldValue = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(value, FieldValue::Unsigned(u64::MAX));
    }

    #[test]
    fn test_from_json_nested() {
        let value = FieldValue::from(json!({"b": [1, 2], "c": {"d": true}}));
        let map = value.as_map().unwrap();
        assert_eq!(
            map.get("b"),
            Some(&FieldValue::List(vec![FieldValue::from(1), FieldValue::from(2)]))
        );
        assert_eq!(
            map.get("c").and_then(|c| c.get("d")),
            Some(&FieldValue::Bool(true))
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(FieldValue::Null.type_name(), "null");
        assert_eq!(FieldValue::List(vec![]).type_name(), "list");
        assert_eq!(section(&[]).type_name(), "map");
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::from("plain").to_string(), "plain");
        assert_eq!(FieldValue::from(3).to_string(), "3");
        assert_eq!(FieldValue::Null.to_string(), "null");
        assert_eq!(
            FieldValue::List(vec![FieldValue::from(1), FieldValue::from("a")]).to_string(),
            "[1,\"a\"]"
        );
        assert_eq!(
            section(&[("host", "localhost")]).to_string(),
            "{\"host\":\"localhost\"}"
        );
    }

    #[test]
    fn test_serialize_untagged() {
        let value = section(&[("host", "localhost")]);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!({"host": "localhost"}));
    }

    #[test]
    fn test_deserialize_untagged() {
        let value: FieldValue = serde_json::from_str("[1, 2.5, \"x\", null]").unwrap();
        assert_eq!(
            value,
            FieldValue::List(vec![
                FieldValue::Integer(1),
                FieldValue::Float(2.5),
                FieldValue::from("x"),
                FieldValue::Null,
            ])
        );
    }

    #[test]
    fn test_deserialize_into_struct() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Server {
            host: String,
        }

        let server: Server = section(&[("host", "localhost")])
            .deserialize_into("server")
            .unwrap();
        assert_eq!(
            server,
            Server {
                host: "localhost".to_string()
            }
        );
    }

    #[test]
    fn test_deserialize_into_rejects_strings_as_numbers() {
        let err = FieldValue::from("8080")
            .deserialize_into::<u16>("port")
            .unwrap_err();
        match err {
            ConfigError::TypeConversion {
                field, target_type, ..
            } => {
                assert_eq!(field, "port");
                assert_eq!(target_type, "u16");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
