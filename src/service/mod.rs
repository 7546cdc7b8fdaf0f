// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration store.
//!
//! This module contains the concrete implementation of the
//! `ConfigurationService` trait.

pub mod store;

// Re-export commonly used types
pub use store::ConfigurationStore;
