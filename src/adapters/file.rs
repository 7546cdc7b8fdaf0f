// SPDX-License-Identifier: MIT OR Apache-2.0

//! File configuration source adapter.
//!
//! This module provides a source that reads a single INI, JSON or TOML file and
//! hands its content to the parser for that format.

use crate::domain::{ConfigError, LoadedFields, Result, SourceFormat};
use crate::ports::{ConfigParser, ConfigSource};
use directories::ProjectDirs;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for configuration files (10MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default file name looked up in the OS configuration directory.
pub const DEFAULT_FILE_NAME: &str = "config.json";

/// Returns the parser for a file format, if support for it was compiled in.
///
/// `SourceFormat::Environment` has no parser.
pub fn parser_for(format: SourceFormat) -> Option<Box<dyn ConfigParser>> {
    match format {
        #[cfg(feature = "ini")]
        SourceFormat::Ini => Some(Box::new(crate::adapters::IniParser::new())),
        #[cfg(feature = "json")]
        SourceFormat::Json => Some(Box::new(crate::adapters::JsonParser::new())),
        #[cfg(feature = "toml")]
        SourceFormat::Toml => Some(Box::new(crate::adapters::TomlParser::new())),
        _ => None,
    }
}

/// Resolves `filename` inside the OS configuration directory of an application.
///
/// Uses the `directories` crate, so the result is e.g.
/// `~/.config/<app_name>/<filename>` on Linux.
///
/// # Errors
///
/// Returns [`ConfigError::SourceRead`] when no home directory can be determined.
pub fn default_location(qualifier: &str, app_name: &str, filename: &str) -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceRead {
            source_name: "file".to_string(),
            message: "Failed to determine project directories".to_string(),
            source: None,
        })?;

    let path = proj_dirs.config_dir().join(filename);
    tracing::debug!("Resolved default configuration path: {}", path.display());
    Ok(path)
}

/// Configuration source adapter for configuration files.
///
/// Construction only inspects the path's extension; the file is opened on every
/// [`read`](ConfigSource::read), so it does not need to exist until then.
///
/// # Examples
///
/// ```rust,no_run
/// use greenhorn::adapters::FileSource;
/// use greenhorn::ports::ConfigSource;
///
/// let source = FileSource::from_path("/etc/myapp/config.toml").unwrap();
/// let fields = source.read().unwrap();
/// ```
pub struct FileSource {
    /// Path to the configuration file
    path: PathBuf,
    /// Format derived from the extension
    format: SourceFormat,
    /// Source name used in logs and errors, e.g. "json-file"
    name: String,
    /// Parser for `format`
    parser: Box<dyn ConfigParser>,
}

impl FileSource {
    /// Creates a file source, selecting the parser from the path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] if the extension is not `ini`,
    /// `json` or `toml`, or its feature is disabled.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = SourceFormat::from_path(path)?;

        let parser = parser_for(format).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.display().to_string(),
            extension: format.extension().to_string(),
        })?;

        Ok(Self::with_parser(path, format, parser))
    }

    /// Creates a file source with an explicit parser.
    ///
    /// The extension of `path` is not checked.
    pub fn with_parser(
        path: impl Into<PathBuf>,
        format: SourceFormat,
        parser: Box<dyn ConfigParser>,
    ) -> Self {
        Self {
            path: path.into(),
            format,
            name: format!("{}-file", format.extension()),
            parser,
        }
    }

    fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "<unknown>".to_string())
    }

    /// Reads the file as UTF-8 text after checking its size.
    fn read_content(&self) -> Result<String> {
        let metadata = fs::metadata(&self.path).map_err(|e| {
            ConfigError::source_read(
                &self.name,
                format!("Failed to read file metadata: {}", self.display_name()),
                e,
            )
        })?;

        if metadata.len() > MAX_FILE_SIZE {
            return Err(ConfigError::SourceRead {
                source_name: self.name.clone(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_FILE_SIZE
                ),
                source: None,
            });
        }

        let bytes = fs::read(&self.path).map_err(|e| {
            ConfigError::source_read(
                &self.name,
                format!("Failed to read configuration file: {}", self.display_name()),
                e,
            )
        })?;

        String::from_utf8(bytes).map_err(|e| ConfigError::source_parse(self.format.to_string(), e))
    }
}

impl fmt::Debug for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSource")
            .field("path", &self.path)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl ConfigSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn format(&self) -> SourceFormat {
        self.format
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }

    fn read(&self) -> Result<LoadedFields> {
        let content = self.read_content()?;
        let fields = self.parser.parse(&content)?;

        tracing::debug!(
            "Read {} fields from {} ({})",
            fields.len(),
            self.path.display(),
            self.name
        );
        Ok(fields)
    }
}
