// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types of the crate. It is independent of
//! any file format or environment access and defines the fundamental concepts
//! used throughout the library.

pub mod errors;
pub mod field_name;
pub mod field_value;
pub mod format;
pub mod service;

// Re-export commonly used types
pub use errors::{ConfigError, Result};
pub use field_name::FieldName;
pub use field_value::{FieldValue, LoadedFields};
pub use format::SourceFormat;
pub use service::{ConfigurationService, StoreState};
