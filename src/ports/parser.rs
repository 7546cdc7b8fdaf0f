// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns the text of a
//! configuration file into the fields a store holds.

use crate::domain::{LoadedFields, Result};

/// A trait for parsing configuration files.
///
/// Unlike a flattening parser, a `ConfigParser` only splits the document at its
/// top level: each top-level key (or INI section) becomes one field and keeps its
/// nested value intact. Which parser handles which extension is decided by
/// `SourceFormat`, so a parser only deals with content.
///
/// # Examples
///
/// ```rust
/// use greenhorn::domain::{FieldName, FieldValue, LoadedFields, Result};
/// use greenhorn::ports::ConfigParser;
///
/// struct LineParser;
///
/// impl ConfigParser for LineParser {
///     fn parse(&self, content: &str) -> Result<LoadedFields> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once(' '))
///             .map(|(k, v)| (FieldName::from(k), FieldValue::from(v)))
///             .collect())
///     }
/// }
///
/// let fields = LineParser.parse("name demo").unwrap();
/// assert_eq!(fields.get("name"), Some(&FieldValue::from("demo")));
/// ```
pub trait ConfigParser: Send + Sync {
    /// Parses configuration content into top-level fields.
    ///
    /// # Returns
    ///
    /// * `Ok(LoadedFields)` - One entry per top-level key
    /// * `Err(ConfigError)` - The content is not valid for this format
    fn parse(&self, content: &str) -> Result<LoadedFields>;
}
