// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field name newtype.
//!
//! A `FieldName` is the key a loaded value is stored under: a top-level JSON or
//! TOML key, an INI section name, or an environment variable name.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// The name of a field held by a configuration store.
///
/// Field names are compared and ordered as plain strings, and borrow as `&str`
/// so a store can be queried without allocating a `FieldName`.
///
/// # Examples
///
/// ```
/// use greenhorn::domain::field_name::FieldName;
///
/// let name = FieldName::from("server");
/// assert_eq!(name.as_str(), "server");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    /// Creates a new `FieldName` from a `String`.
    pub fn new(name: String) -> Self {
        FieldName(name)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `FieldName` into its inner `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use greenhorn::domain::field_name::FieldName;
    ///
    /// let name = FieldName::from("build-system");
    /// assert_eq!(name.into_string(), "build-system");
    /// ```
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for FieldName {
    fn from(s: String) -> Self {
        FieldName(s)
    }
}

impl From<&str> for FieldName {
    fn from(s: &str) -> Self {
        FieldName(s.to_string())
    }
}

impl From<FieldName> for String {
    fn from(name: FieldName) -> Self {
        name.0
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
