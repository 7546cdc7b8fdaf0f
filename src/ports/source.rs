// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, the port through which a store
//! reads its external source. The process environment and files of every
//! supported format implement it.

use crate::domain::{FieldName, FieldValue, LoadedFields, Result, SourceFormat};
use std::path::Path;

/// A trait for configuration sources.
///
/// A source is stateless with respect to the store: every call reads the live
/// external data again, so two consecutive reads see any change made in between.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a store can be moved to, or shared
/// behind a lock with, other threads.
///
/// # Examples
///
/// ```rust
/// use greenhorn::domain::{FieldName, FieldValue, LoadedFields, Result, SourceFormat};
/// use greenhorn::ports::ConfigSource;
///
/// struct Constant;
///
/// impl ConfigSource for Constant {
///     fn name(&self) -> &str {
///         "constant"
///     }
///
///     fn format(&self) -> SourceFormat {
///         SourceFormat::Environment
///     }
///
///     fn read(&self) -> Result<LoadedFields> {
///         let mut fields = LoadedFields::new();
///         fields.insert(FieldName::from("mode"), FieldValue::from("test"));
///         Ok(fields)
///     }
/// }
///
/// let source = Constant;
/// assert_eq!(source.read().unwrap().len(), 1);
/// assert!(source.read_field(&FieldName::from("other")).unwrap().is_none());
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this source.
    ///
    /// Used in log lines and error messages, e.g. `"env"` or `"json-file"`.
    fn name(&self) -> &str;

    /// Returns the format this source is read in.
    fn format(&self) -> SourceFormat;

    /// Returns the backing file, if the source has one.
    fn path(&self) -> Option<&Path> {
        None
    }

    /// Reads every field currently present in the source.
    ///
    /// # Returns
    ///
    /// * `Ok(LoadedFields)` - The decoded fields, possibly empty
    /// * `Err(ConfigError)` - The source could not be read or parsed
    fn read(&self) -> Result<LoadedFields>;

    /// Reads a single field from the source.
    ///
    /// Returns `Ok(None)` when the source does not contain the field. The default
    /// implementation reads the whole source; implementations that can look a
    /// single field up directly should override it.
    fn read_field(&self, name: &FieldName) -> Result<Option<FieldValue>> {
        Ok(self.read()?.remove(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;

    // Test implementation of ConfigSource for testing purposes
    struct TestSource {
        fields: Vec<(&'static str, &'static str)>,
        fail: bool,
    }

    impl ConfigSource for TestSource {
        fn name(&self) -> &str {
            "test-source"
        }

        fn format(&self) -> SourceFormat {
            SourceFormat::Json
        }

        fn read(&self) -> Result<LoadedFields> {
            if self.fail {
                return Err(ConfigError::SourceRead {
                    source_name: self.name().to_string(),
                    message: "unavailable".to_string(),
                    source: None,
                });
            }
            Ok(self
                .fields
                .iter()
                .map(|(k, v)| (FieldName::from(*k), FieldValue::from(*v)))
                .collect())
        }
    }

    #[test]
    fn test_config_source_default_path() {
        let source = TestSource {
            fields: vec![],
            fail: false,
        };
        assert!(source.path().is_none());
    }

    #[test]
    fn test_config_source_read_field_default() {
        let source = TestSource {
            fields: vec![("a", "1"), ("b", "2")],
            fail: false,
        };
        let value = source.read_field(&FieldName::from("b")).unwrap();
        assert_eq!(value, Some(FieldValue::from("2")));

        let missing = source.read_field(&FieldName::from("c")).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_config_source_read_field_propagates_errors() {
        let source = TestSource {
            fields: vec![("a", "1")],
            fail: true,
        };
        assert!(source.read_field(&FieldName::from("a")).is_err());
    }

    #[test]
    fn test_config_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn ConfigSource>>();
    }
}
