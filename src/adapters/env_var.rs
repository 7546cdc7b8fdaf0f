// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration source adapter.
//!
//! This module provides a source that exposes every process environment variable
//! as a string field.

use crate::domain::{FieldName, FieldValue, LoadedFields, Result, SourceFormat};
use crate::ports::ConfigSource;
use std::collections::BTreeMap;
use std::env;

/// Configuration source adapter for environment variables.
///
/// Every variable becomes a field of the same name holding its value as a
/// `String`. Names are taken verbatim: there is no prefix filtering, case
/// folding or underscore rewriting. Variables whose name or value is not valid
/// Unicode are skipped.
///
/// # Examples
///
/// ```rust
/// use greenhorn::adapters::EnvVarSource;
/// use greenhorn::ports::ConfigSource;
///
/// let source = EnvVarSource::new();
/// let fields = source.read().unwrap();
/// assert_eq!(fields.len(), std::env::vars().count());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvVarSource {
    /// Fixed values used instead of the live environment
    values: Option<BTreeMap<String, String>>,
}

impl EnvVarSource {
    /// Creates a source reading the live process environment.
    pub fn new() -> Self {
        Self { values: None }
    }

    /// Creates a source with pre-populated values for testing.
    ///
    /// **Note**: This method is primarily intended for testing. The returned
    /// source never looks at the process environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use greenhorn::adapters::EnvVarSource;
    /// use greenhorn::ports::ConfigSource;
    /// use std::collections::BTreeMap;
    ///
    /// let mut values = BTreeMap::new();
    /// values.insert("HOME".to_string(), "/home/test".to_string());
    ///
    /// let source = EnvVarSource::with_values(values);
    /// assert_eq!(source.read().unwrap().len(), 1);
    /// ```
    pub fn with_values(values: BTreeMap<String, String>) -> Self {
        Self {
            values: Some(values),
        }
    }

    /// Returns `true` if `name` can be passed to the OS as a variable name.
    fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && !name.contains('=') && !name.contains('\0')
    }
}

impl ConfigSource for EnvVarSource {
    fn name(&self) -> &str {
        "env"
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Environment
    }

    fn read(&self) -> Result<LoadedFields> {
        if let Some(values) = &self.values {
            return Ok(values
                .iter()
                .map(|(k, v)| (FieldName::from(k.as_str()), FieldValue::from(v.as_str())))
                .collect());
        }

        let mut fields = LoadedFields::new();
        for (key, value) in env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    fields.insert(FieldName::from(key), FieldValue::from(value));
                }
                (key, _) => {
                    tracing::debug!(
                        "Skipping environment variable with non-Unicode name or value: {:?}",
                        key
                    );
                }
            }
        }

        tracing::debug!("Read {} environment variables", fields.len());
        Ok(fields)
    }

    fn read_field(&self, name: &FieldName) -> Result<Option<FieldValue>> {
        if let Some(values) = &self.values {
            return Ok(values.get(name.as_str()).map(|v| FieldValue::from(v.as_str())));
        }

        if !Self::is_valid_name(name.as_str()) {
            return Ok(None);
        }

        match env::var(name.as_str()) {
            Ok(value) => Ok(Some(FieldValue::from(value))),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => {
                tracing::debug!(
                    "Skipping environment variable '{}' with non-Unicode value",
                    name
                );
                Ok(None)
            }
        }
    }
}
