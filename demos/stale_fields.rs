// SPDX-License-Identifier: MIT OR Apache-2.0

//! How `reload` treats fields that have left the source.
//!
//! `reload` only removes the fields the source still contains. A field deleted
//! from the file in the meantime stays in the store until `clear` is called.
//!
//! To run this example:
//! ```bash
//! RUST_LOG=warn cargo run --example stale_fields
//! ```

use greenhorn::prelude::*;
use std::fs;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let file = tempfile::Builder::new().suffix(".json").tempfile()?;
    fs::write(file.path(), r#"{"kept": 1, "dropped": 2}"#)?;

    let mut store = ConfigurationStore::from_path(file.path())?;
    store.load()?;
    println!("after load:   {:?} {:?}", store.state(), names(&store));

    fs::write(file.path(), r#"{"kept": 1}"#)?;
    store.reload()?;
    println!("after reload: {:?} {:?}", store.state(), names(&store));

    store.clear();
    println!("after clear:  {:?} {:?}", store.state(), names(&store));

    Ok(())
}

fn names(store: &ConfigurationStore) -> Vec<&str> {
    store.field_names().map(FieldName::as_str).collect()
}
