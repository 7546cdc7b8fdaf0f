// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration source implementations.
//!
//! This module contains the concrete implementations of the ports: the
//! environment source, the file source and one parser per file format.

#[cfg(feature = "env")]
pub mod env_var;
pub mod file;
#[cfg(feature = "ini")]
pub mod ini_file;
#[cfg(feature = "json")]
pub mod json_file;
#[cfg(feature = "toml")]
pub mod toml_file;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvVarSource;
pub use file::FileSource;
#[cfg(feature = "ini")]
pub use ini_file::IniParser;
#[cfg(feature = "json")]
pub use json_file::JsonParser;
#[cfg(feature = "toml")]
pub use toml_file::TomlParser;
