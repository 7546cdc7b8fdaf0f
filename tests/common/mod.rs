// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers shared by the integration tests.

use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

/// Creates a temporary configuration file with the given extension and content.
///
/// The file is deleted when the returned handle is dropped.
#[allow(dead_code)]
pub fn temp_config(extension: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("greenhorn-")
        .suffix(&format!(".{}", extension))
        .tempfile()
        .unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Sets environment variables for the lifetime of the guard.
#[allow(dead_code)]
pub struct EnvGuard {
    keys: Vec<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Creates a guard with no variables set.
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    /// Sets `key` to `value`, removing it again when the guard drops.
    pub fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }

    /// Removes `key` now.
    pub fn remove(&mut self, key: &str) {
        env::remove_var(key);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}
