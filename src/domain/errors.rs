// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration store.
//!
//! Every fallible operation in the crate returns [`ConfigError`]. The variants map
//! one-to-one onto the ways a store can fail: the path names a format we cannot
//! read, the source cannot be read, its content does not parse, or a requested
//! field is missing.

use thiserror::Error;

/// The main error type for configuration store operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use greenhorn::domain::errors::ConfigError;
///
/// fn lookup() -> Result<String, ConfigError> {
///     Err(ConfigError::FieldNotFound {
///         field: "server".to_string(),
///     })
/// }
///
/// assert!(lookup().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The path's extension does not name a supported format.
    ///
    /// Raised at construction time, before any file is touched.
    #[error("Unsupported configuration format '{extension}' for path '{path}'")]
    UnsupportedFormat {
        /// The offending path
        path: String,
        /// The extension that was found (empty when the path has none)
        extension: String,
    },

    /// The source could not be opened or read.
    #[error("Failed to read configuration source '{source_name}': {message}")]
    SourceRead {
        /// The name of the source that failed
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The source content is not valid for its declared format.
    #[error("Failed to parse {format} configuration: {message}")]
    SourceParse {
        /// The format that was being parsed
        format: String,
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The requested field is not present.
    #[error("Configuration field not found: {field}")]
    FieldNotFound {
        /// The field that was not found
        field: String,
    },

    /// A field could not be deserialized into the requested type.
    #[error("Failed to convert configuration field '{field}' to type {target_type}: {source}")]
    TypeConversion {
        /// The field being converted
        field: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ConfigError {
    /// Creates a `SourceRead` error from an I/O failure on `source_name`.
    pub fn source_read(
        source_name: impl Into<String>,
        message: impl Into<String>,
        err: std::io::Error,
    ) -> Self {
        ConfigError::SourceRead {
            source_name: source_name.into(),
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a `SourceParse` error carrying the parser's own error.
    pub fn source_parse<E>(format: impl Into<String>, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::SourceParse {
            format: format.into(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a `FieldNotFound` error.
    pub fn field_not_found(field: impl Into<String>) -> Self {
        ConfigError::FieldNotFound {
            field: field.into(),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unsupported_format_error() {
        let error = ConfigError::UnsupportedFormat {
            path: "config.yaml".to_string(),
            extension: "yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unsupported configuration format 'yaml' for path 'config.yaml'"
        );
    }

    #[test]
    fn test_source_read_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::source_read("json-file", "cannot open config.json", io_error);
        assert_eq!(
            error.to_string(),
            "Failed to read configuration source 'json-file': cannot open config.json"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_source_parse_error() {
        let error = ConfigError::SourceParse {
            format: "toml".to_string(),
            message: "expected `=`".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse toml configuration: expected `=`"
        );
    }

    #[test]
    fn test_source_parse_wraps_underlying_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ConfigError::source_parse("json", parse_err);
        assert!(matches!(error, ConfigError::SourceParse { .. }));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_field_not_found_error() {
        let error = ConfigError::field_not_found("server");
        assert_eq!(error.to_string(), "Configuration field not found: server");
    }

    #[test]
    fn test_type_conversion_error() {
        let source_error = "invalid value".parse::<i32>().unwrap_err();
        let error = ConfigError::TypeConversion {
            field: "port".to_string(),
            target_type: "i32".to_string(),
            source: Box::new(source_error),
        };
        assert!(error.to_string().contains("port"));
        assert!(error.to_string().contains("i32"));
    }
}
