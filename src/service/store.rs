// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration store implementation.
//!
//! This module provides [`ConfigurationStore`], the implementation of the
//! `ConfigurationService` trait. A store reads one source and keeps the fields
//! it found in an explicit mapping.

use crate::adapters::file::{default_location, DEFAULT_FILE_NAME};
use crate::adapters::FileSource;
use crate::domain::{
    ConfigError, ConfigurationService, FieldName, FieldValue, LoadedFields, Result, SourceFormat,
    StoreState,
};
use crate::ports::ConfigSource;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::Path;

/// A configuration store over a single source.
///
/// The store starts out empty. [`load`](ConfigurationService::load) copies every
/// field of the source into the store, [`reload`](ConfigurationService::reload)
/// removes the fields the source currently contains, and
/// [`reload_field`](ConfigurationService::reload_field) refreshes one field.
/// Every operation reads the live source again and either succeeds completely
/// or leaves the store untouched.
///
/// The store is not internally synchronized; wrap it in a `Mutex` to share it.
///
/// # Examples
///
/// ```rust,no_run
/// use greenhorn::prelude::*;
///
/// # fn main() -> Result<()> {
/// let mut store = ConfigurationStore::from_path("config.toml")?;
/// store.load()?;
///
/// let server = store.get_str("server")?;
/// println!("server = {}", server);
/// # Ok(())
/// # }
/// ```
pub struct ConfigurationStore {
    /// The source every operation reads
    source: Box<dyn ConfigSource>,
    /// Loaded fields
    fields: LoadedFields,
    /// Current logical state
    state: StoreState,
}

impl ConfigurationStore {
    /// Creates an empty store over any configuration source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use greenhorn::adapters::EnvVarSource;
    /// use greenhorn::prelude::*;
    /// use std::collections::BTreeMap;
    ///
    /// let mut values = BTreeMap::new();
    /// values.insert("MODE".to_string(), "test".to_string());
    ///
    /// let mut store = ConfigurationStore::with_source(Box::new(EnvVarSource::with_values(values)));
    /// store.load().unwrap();
    /// assert_eq!(store.get_str("MODE").unwrap(), FieldValue::from("test"));
    /// ```
    pub fn with_source(source: Box<dyn ConfigSource>) -> Self {
        Self {
            source,
            fields: LoadedFields::new(),
            state: StoreState::Empty,
        }
    }

    /// Creates an empty store for the file at `path`.
    ///
    /// The format is taken from the extension: `ini`, `json` or `toml`. An `env`
    /// extension is accepted as well and selects the process environment, in
    /// which case the path is not kept. The file is not opened here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for any other extension.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use greenhorn::prelude::*;
    ///
    /// assert!(ConfigurationStore::from_path("config.json").is_ok());
    /// assert!(ConfigurationStore::from_path("config.yaml").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        #[cfg(feature = "env")]
        {
            if SourceFormat::from_path(path)? == SourceFormat::Environment {
                tracing::debug!(
                    "Path {} selects the process environment; the path is ignored",
                    path.display()
                );
                return Ok(Self::for_environment());
            }
        }

        Ok(Self::with_source(Box::new(FileSource::from_path(path)?)))
    }

    /// Creates an empty store over the process environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use greenhorn::prelude::*;
    ///
    /// let store = ConfigurationStore::for_environment();
    /// assert_eq!(store.format(), SourceFormat::Environment);
    /// assert!(store.path().is_none());
    /// ```
    #[cfg(feature = "env")]
    pub fn for_environment() -> Self {
        Self::with_source(Box::new(crate::adapters::EnvVarSource::new()))
    }

    /// Creates a store for `config.json` in the OS configuration directory of
    /// the application.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use greenhorn::service::ConfigurationStore;
    ///
    /// # fn main() -> greenhorn::domain::Result<()> {
    /// let store = ConfigurationStore::from_default_location("com.example", "myapp")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_default_location(qualifier: &str, app_name: &str) -> Result<Self> {
        Self::with_filename(qualifier, app_name, DEFAULT_FILE_NAME)
    }

    /// Creates a store for `filename` in the OS configuration directory of the
    /// application. The format follows the file name's extension.
    pub fn with_filename(qualifier: &str, app_name: &str, filename: &str) -> Result<Self> {
        let path = default_location(qualifier, app_name, filename)?;
        Self::from_path(path)
    }

    /// Returns the format of the underlying source.
    pub fn format(&self) -> SourceFormat {
        self.source.format()
    }

    /// Returns the file backing the store, if any.
    pub fn path(&self) -> Option<&Path> {
        self.source.path()
    }

    /// Returns the name of the underlying source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Returns the current state.
    pub fn state(&self) -> StoreState {
        self.state
    }

    /// Returns a reference to the named field, if loaded.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Returns all loaded fields.
    pub fn fields(&self) -> &LoadedFields {
        &self.fields
    }

    /// Returns the names of all loaded fields in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &FieldName> {
        self.fields.keys()
    }

    /// Returns the number of loaded fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is loaded.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Deserializes the named field into `T`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::FieldNotFound`] if the field is not loaded, or
    /// [`ConfigError::TypeConversion`] if its shape does not fit `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use greenhorn::adapters::EnvVarSource;
    /// use greenhorn::prelude::*;
    /// use std::collections::BTreeMap;
    ///
    /// let mut values = BTreeMap::new();
    /// values.insert("HOST".to_string(), "localhost".to_string());
    ///
    /// let mut store = ConfigurationStore::with_source(Box::new(EnvVarSource::with_values(values)));
    /// store.load().unwrap();
    ///
    /// let host: String = store.get_as("HOST").unwrap();
    /// assert_eq!(host, "localhost");
    /// ```
    pub fn get_as<T>(&self, name: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.field(name)
            .ok_or_else(|| ConfigError::field_not_found(name))?
            .deserialize_into(name)
    }

    /// Removes every field, including stale ones, and returns to `Empty`.
    pub fn clear(&mut self) {
        tracing::debug!(
            "Clearing {} fields loaded from '{}'",
            self.fields.len(),
            self.source.name()
        );
        self.fields.clear();
        self.state = StoreState::Empty;
    }
}

impl fmt::Debug for ConfigurationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationStore")
            .field("source", &self.source.name())
            .field("format", &self.source.format())
            .field("path", &self.source.path())
            .field("state", &self.state)
            .field("fields", &self.fields)
            .finish()
    }
}

impl ConfigurationService for ConfigurationStore {
    fn get(&self, name: &FieldName) -> Result<FieldValue> {
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::field_not_found(name.as_str()))
    }

    fn load(&mut self) -> Result<()> {
        let fresh = self.source.read()?;

        tracing::debug!(
            "Loaded {} fields from '{}'",
            fresh.len(),
            self.source.name()
        );

        self.fields.extend(fresh);
        self.state = StoreState::Populated;
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        let fresh = self.source.read()?;

        let before = self.fields.len();
        for name in fresh.keys() {
            self.fields.remove(name);
        }

        tracing::debug!(
            "Removed {} fields present in '{}'",
            before - self.fields.len(),
            self.source.name()
        );

        if self.fields.is_empty() {
            self.state = StoreState::Empty;
        } else {
            tracing::warn!(
                "{} fields no longer present in '{}' were left in place: {:?}",
                self.fields.len(),
                self.source.name(),
                self.fields.keys().map(FieldName::as_str).collect::<Vec<_>>()
            );
        }
        Ok(())
    }

    fn reload_field(&mut self, name: &FieldName) -> Result<()> {
        let value = self
            .source
            .read_field(name)?
            .ok_or_else(|| ConfigError::field_not_found(name.as_str()))?;

        tracing::debug!(
            "Reloaded field '{}' ({}) from '{}'",
            name,
            value.type_name(),
            self.source.name()
        );

        self.fields.insert(name.clone(), value);
        self.state = StoreState::Populated;
        Ok(())
    }
}
