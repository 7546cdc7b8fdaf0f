// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the configuration store.
//!
//! This example demonstrates:
//! - Creating a store from a file path (format chosen by extension)
//! - Loading fields and reading them back
//! - Section granularity for INI files
//! - Using default values for missing fields
//!
//! To run this example:
//! ```bash
//! # Load a file of your own
//! cargo run --example basic_usage -- path/to/config.toml
//!
//! # Or let the example write sample files
//! cargo run --example basic_usage
//! ```

use greenhorn::prelude::*;
use std::io::Write;

fn sample_file(extension: &str, content: &str) -> std::io::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{}", extension))
        .tempfile()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

fn show(store: &ConfigurationStore) {
    println!(
        "{} fields from {} ({})",
        store.len(),
        store
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<environment>".to_string()),
        store.format()
    );
    for name in store.field_names() {
        if let Some(value) = store.field(name.as_str()) {
            println!("  {} = {} ({})", name, value, value.type_name());
        }
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== Configuration Store: Basic Usage ===\n");

    if let Some(path) = std::env::args().nth(1) {
        let mut store = ConfigurationStore::from_path(&path)?;
        store.load()?;
        show(&store);
        return Ok(());
    }

    // Example 1: JSON keeps native types
    println!("--- Example 1: JSON ---");
    let json = sample_file("json", r#"{"a": 1, "b": [1, 2], "name": "demo"}"#)?;
    let mut store = ConfigurationStore::from_path(json.path())?;
    store.load()?;
    show(&store);

    // Example 2: INI sections become fields
    println!("\n--- Example 2: INI ---");
    let ini = sample_file("ini", "[server]\nhost = localhost\nport = 8080\n")?;
    let mut store = ConfigurationStore::from_path(ini.path())?;
    store.load()?;
    show(&store);
    match store.get_str("host") {
        Ok(value) => println!("✗ unexpected field 'host': {}", value),
        Err(e) => println!("✓ no 'host' field: {}", e),
    }

    // Example 3: TOML tables and typed access
    println!("\n--- Example 3: TOML ---");
    let toml = sample_file("toml", "[build-system]\nrequires = [\"setuptools\"]\n")?;
    let mut store = ConfigurationStore::from_path(toml.path())?;
    store.load()?;
    show(&store);
    let requires: Vec<String> = store
        .field("build-system")
        .and_then(|b| b.get("requires"))
        .map(|r| r.deserialize_into("build-system.requires"))
        .transpose()?
        .unwrap_or_default();
    println!("requires: {:?}", requires);

    // Example 4: Defaults for missing fields
    println!("\n--- Example 4: Defaults ---");
    let level = store.get_or_default(&FieldName::from("log-level"), FieldValue::from("info"));
    println!("log-level: {}", level);

    // Example 5: Unsupported formats are rejected up front
    println!("\n--- Example 5: Unsupported Format ---");
    if let Err(e) = ConfigurationStore::from_path("config.yaml") {
        println!("✓ {}", e);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
