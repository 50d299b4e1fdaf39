//! Parse, bump a counter in place, serialize.
//!
//! Malformed documents are reported and skipped rather than aborting the run.
//!
//! Run with: cargo run --example counter_pipeline

use json_borrow::{from_str, to_string, Value};

fn main() {
    let documents = [
        r#"{"name": "Test", "counter": 1, "tags": ["a", "b"]}"#,
        r#"{"name": "No counter here"}"#,
        r#"{"name": "Broken", "counter": 1"#,
        r#"{"counter": 41, "counter": 99}"#,
        r#"{"counter": 7} trailing"#,
    ];

    let mut ok = 0;
    let mut failed = 0;

    for (i, text) in documents.iter().enumerate() {
        let mut root = match from_str(text) {
            Ok(root) => root,
            Err(e) => {
                eprintln!("document {}: skipped: {}", i, e);
                failed += 1;
                continue;
            }
        };

        match root.get_mut("counter") {
            Some(Value::Number(counter)) => *counter += 1.0,
            _ => eprintln!("document {}: no numeric counter", i),
        }

        println!("document {}: {}", i, to_string(&root));
        ok += 1;
    }

    println!("\n{} rendered, {} skipped", ok, failed);
}
