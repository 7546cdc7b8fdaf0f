// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source format selection.

use crate::domain::errors::{ConfigError, Result};
use std::fmt;
use std::path::Path;

/// The format a configuration source is read in.
///
/// A store's format is fixed when it is constructed: explicitly for the process
/// environment, or from the file extension for everything else.
///
/// # Examples
///
/// ```
/// use greenhorn::domain::SourceFormat;
///
/// assert_eq!(SourceFormat::from_path("app/config.toml").unwrap(), SourceFormat::Toml);
/// assert!(SourceFormat::from_path("config.yaml").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// The process environment.
    Environment,
    /// An INI file (`.ini`).
    Ini,
    /// A JSON file (`.json`).
    Json,
    /// A TOML file (`.toml`).
    Toml,
}

impl SourceFormat {
    /// Every format, in declaration order.
    pub const ALL: [SourceFormat; 4] = [
        SourceFormat::Environment,
        SourceFormat::Ini,
        SourceFormat::Json,
        SourceFormat::Toml,
    ];

    /// Returns the file extension mapped to this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::Environment => "env",
            SourceFormat::Ini => "ini",
            SourceFormat::Json => "json",
            SourceFormat::Toml => "toml",
        }
    }

    /// Returns `true` if support for this format was compiled in.
    pub fn is_enabled(self) -> bool {
        match self {
            SourceFormat::Environment => cfg!(feature = "env"),
            SourceFormat::Ini => cfg!(feature = "ini"),
            SourceFormat::Json => cfg!(feature = "json"),
            SourceFormat::Toml => cfg!(feature = "toml"),
        }
    }

    /// Maps a bare extension (no dot, any ASCII case) to a format.
    ///
    /// Returns `None` for unknown extensions and for formats whose feature is
    /// disabled.
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
            .filter(|format| format.is_enabled())
    }

    /// Derives the format from a path's extension.
    ///
    /// No file system access happens here; the path does not have to exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] when the path has no extension
    /// or the extension is not one of `env`, `ini`, `json`, `toml`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_extension(&extension).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.display().to_string(),
            extension,
        })
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Environment => write!(f, "environment"),
            other => write!(f, "{}", other.extension()),
        }
    }
}
