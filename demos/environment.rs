// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loading the process environment.
//!
//! To run this example:
//! ```bash
//! GREETING=hello cargo run --example environment
//! ```

use greenhorn::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut store = ConfigurationStore::for_environment();
    store.load()?;
    println!("Loaded {} environment variables", store.len());

    let greeting = store.get_or_default(&FieldName::from("GREETING"), FieldValue::from("(unset)"));
    println!("GREETING = {}", greeting);

    // Refresh one variable without touching the others
    std::env::set_var("GREETING", "changed at runtime");
    store.reload_field(&FieldName::from("GREETING"))?;
    println!("GREETING after reload_field = {}", store.get_str("GREETING")?);

    Ok(())
}
