// SPDX-License-Identifier: MIT OR Apache-2.0

//! A small configuration store.
//!
//! This crate loads configuration from the process environment or from an INI,
//! JSON or TOML file and exposes it as named fields held in an explicit mapping.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`FieldName`, `FieldValue`, `SourceFormat`, errors)
//! - **Ports**: Trait definitions (`ConfigSource`, `ConfigParser`)
//! - **Adapters**: The environment source, the file source and the format parsers
//! - **Service**: `ConfigurationStore`, which owns the loaded fields
//!
//! # Fields
//!
//! A field is a top-level key of a JSON or TOML document, a section of an INI
//! file, or an environment variable. Nested values are kept whole: the INI
//! section `[server]` with `host = localhost` becomes the field `server` holding
//! `{"host": "localhost"}`.
//!
//! # Lifecycle
//!
//! - `load` reads the source and stores every field found
//! - `reload` reads the source and removes every field found; fields that have
//!   disappeared from the source stay behind (`clear` removes everything)
//! - `reload_field` reads the source and refreshes a single field
//!
//! # Feature Flags
//!
//! - `env`: Enable the process environment source (default)
//! - `ini`: Enable INI file support (default)
//! - `json`: Enable JSON file support (default)
//! - `toml`: Enable TOML file support (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use greenhorn::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let mut store = ConfigurationStore::from_path("config.ini")?;
//! store.load()?;
//!
//! if let Some(server) = store.field("server") {
//!     println!("host = {:?}", server.get("host"));
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigurationService, FieldName, FieldValue, LoadedFields, Result,
        SourceFormat, StoreState,
    };
    pub use crate::ports::{ConfigParser, ConfigSource};
    pub use crate::service::ConfigurationStore;

    // Re-export adapters based on feature flags
    pub use crate::adapters::FileSource;
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarSource;
    #[cfg(feature = "ini")]
    pub use crate::adapters::IniParser;
    #[cfg(feature = "json")]
    pub use crate::adapters::JsonParser;
    #[cfg(feature = "toml")]
    pub use crate::adapters::TomlParser;
}
