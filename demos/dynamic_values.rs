//! Working with Value trees at runtime.
//!
//! Run with: cargo run --example dynamic_values

use json_borrow::{from_str, to_string, value, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Build a tree with the value! macro
    let config = value!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Config: {}\n", config);

    // Parse one and read it back
    let input = String::from(r#"{"host": "example.org", "port": 443, "features": []}"#);
    let parsed = from_str(&input)?;

    if let Some(host) = parsed.get("host").and_then(Value::as_str) {
        println!("Accessing field 'host': {}", host);
    }

    if let Some(port) = parsed.get("port").and_then(Value::as_f64) {
        println!("Accessing field 'port': {}", port);
    }

    if let Some(Value::Array(features)) = config.get("features") {
        println!("Accessing field 'features': {} items\n", features.len());
    }

    // Strings borrow from `input`; copy out what must outlive it
    let host: Option<String> = parsed.get("host").and_then(Value::as_str).map(str::to_owned);
    drop(parsed);
    drop(input);
    println!("Owned host: {:?}\n", host);

    // Runtime type checking
    println!("Type checks:");
    println!("  is_object: {}", config.is_object());
    println!("  is_array:  {}", config.is_array());
    println!("  is_string: {}", config.is_string());

    println!("\nSerialized: {}", to_string(&config));

    Ok(())
}
