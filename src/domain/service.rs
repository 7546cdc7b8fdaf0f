// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! This module defines the `ConfigurationService` trait, the interface for
//! loading fields from a source, refreshing them and reading them back.

use crate::domain::{FieldName, FieldValue, Result};

/// The logical state of a configuration store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreState {
    /// Nothing loaded yet, or everything removed again.
    Empty,
    /// At least one successful `load` or `reload_field` since the store was
    /// last emptied.
    Populated,
}

/// The main configuration service trait.
///
/// A service owns a mapping of field names to values that it fills from a
/// single external source. All operations are synchronous and all-or-nothing:
/// when one fails the mapping is left as it was before the call.
///
/// # Examples
///
/// ```rust
/// use greenhorn::domain::{ConfigError, ConfigurationService, FieldName, FieldValue, Result};
/// use std::collections::BTreeMap;
///
/// struct FixedService {
///     fields: BTreeMap<FieldName, FieldValue>,
/// }
///
/// impl ConfigurationService for FixedService {
///     fn get(&self, name: &FieldName) -> Result<FieldValue> {
///         self.fields
///             .get(name)
///             .cloned()
///             .ok_or_else(|| ConfigError::field_not_found(name.as_str()))
///     }
///
///     fn load(&mut self) -> Result<()> {
///         self.fields.insert(FieldName::from("answer"), FieldValue::from(42));
///         Ok(())
///     }
///
///     fn reload(&mut self) -> Result<()> {
///         self.fields.remove("answer");
///         Ok(())
///     }
///
///     fn reload_field(&mut self, name: &FieldName) -> Result<()> {
///         self.load()?;
///         self.get(name).map(|_| ())
///     }
/// }
///
/// let mut service = FixedService { fields: BTreeMap::new() };
/// assert!(!service.has(&FieldName::from("answer")));
/// service.load().unwrap();
/// assert_eq!(service.get_str("answer").unwrap(), FieldValue::from(42));
/// ```
pub trait ConfigurationService {
    /// Returns a copy of the named field.
    ///
    /// # Errors
    ///
    /// [`ConfigError::FieldNotFound`](crate::domain::ConfigError::FieldNotFound)
    /// if the field is not currently loaded.
    fn get(&self, name: &FieldName) -> Result<FieldValue>;

    /// Reads the whole source and stores every field it contains.
    ///
    /// Existing fields with the same name are overwritten; fields missing from
    /// the source are left untouched.
    fn load(&mut self) -> Result<()>;

    /// Reads the whole source and removes every field it contains.
    ///
    /// Fields that were loaded earlier but have since disappeared from the
    /// source are not removed.
    fn reload(&mut self) -> Result<()>;

    /// Reads the source and stores only the named field.
    ///
    /// # Errors
    ///
    /// [`ConfigError::FieldNotFound`](crate::domain::ConfigError::FieldNotFound)
    /// if the fresh read does not contain the field.
    fn reload_field(&mut self, name: &FieldName) -> Result<()>;

    /// Returns the named field, or `default` if it is not loaded.
    fn get_or_default(&self, name: &FieldName, default: FieldValue) -> FieldValue {
        self.get(name).unwrap_or(default)
    }

    /// Returns `true` if the named field is loaded.
    fn has(&self, name: &FieldName) -> bool {
        self.get(name).is_ok()
    }

    /// Convenience form of [`get`](Self::get) taking a string slice.
    fn get_str(&self, name: &str) -> Result<FieldValue> {
        self.get(&FieldName::from(name))
    }
}
