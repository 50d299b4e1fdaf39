//! JSON serialization.
//!
//! This module provides the [`Serializer`], a recursive visitor that renders a
//! [`Value`] tree as compact JSON text. Serialization cannot fail.
//!
//! ## Output Rules
//!
//! - `null`, `true`, `false` as literals
//! - numbers through `f64`'s `Display`, so `2.0` renders as `2`; non-finite numbers
//!   render as `NaN`, `inf` or `-inf`, which the parser does not read back
//! - strings and object keys are emitted between quotes exactly as stored, with no
//!   re-escaping, so a slice parsed from an escaped string is written back verbatim
//! - arrays keep their order; objects are written in the map's iteration order
//! - no whitespace anywhere
//!
//! ## Usage
//!
//! ```rust
//! use json_borrow::{from_str, to_string};
//!
//! let value = from_str(r#"{ "a" : [ 1 , true , "x\"y" ] }"#).unwrap();
//! assert_eq!(to_string(&value), r#"{"a":[1,true,"x\"y"]}"#);
//! ```
//!
//! ## Direct Serializer Usage
//!
//! A [`Serializer`] can render several values into one buffer:
//!
//! ```rust
//! use json_borrow::{Serializer, Value};
//!
//! let mut serializer = Serializer::new();
//! serializer.serialize_value(&Value::Number(1.5));
//! serializer.serialize_value(&Value::Null);
//! assert_eq!(serializer.into_inner(), "1.5null");
//! ```

use crate::{Map, Value};

/// The JSON serializer.
///
/// Appends rendered values to an owned output buffer.
pub struct Serializer {
    output: String,
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Serializer {
            output: String::with_capacity(capacity),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends `value` to the output.
    pub fn serialize_value(&mut self, value: &Value<'_>) {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.output.push_str(&n.to_string()),
            Value::String(s) => self.write_quoted(s),
            Value::Array(items) => self.write_array(items),
            Value::Object(map) => self.write_object(map),
        }
    }

    #[inline]
    fn write_quoted(&mut self, s: &str) {
        self.output.push('"');
        self.output.push_str(s);
        self.output.push('"');
    }

    fn write_array(&mut self, items: &[Value<'_>]) {
        self.output.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.serialize_value(item);
        }
        self.output.push(']');
    }

    fn write_object(&mut self, map: &Map<'_>) {
        self.output.push('{');
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_quoted(key);
            self.output.push(':');
            self.serialize_value(value);
        }
        self.output.push('}');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: &Value<'_>) -> String {
        let mut serializer = Serializer::new();
        serializer.serialize_value(value);
        serializer.into_inner()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(&Value::Null), "null");
        assert_eq!(render(&Value::Bool(true)), "true");
        assert_eq!(render(&Value::Bool(false)), "false");
        assert_eq!(render(&Value::Number(-3.5)), "-3.5");
        assert_eq!(render(&Value::Number(2.0)), "2");
        assert_eq!(render(&Value::Number(0.1)), "0.1");
    }

    #[test]
    fn test_non_finite_numbers() {
        assert_eq!(render(&Value::Number(f64::NAN)), "NaN");
        assert_eq!(render(&Value::Number(f64::INFINITY)), "inf");
        assert_eq!(render(&Value::Number(f64::NEG_INFINITY)), "-inf");
    }

    #[test]
    fn test_strings_are_not_escaped() {
        assert_eq!(render(&Value::String("plain")), "\"plain\"");
        assert_eq!(render(&Value::String(r#"x\"y"#)), r#""x\"y""#);
        assert_eq!(render(&Value::String("a\"b")), "\"a\"b\"");
        assert_eq!(render(&Value::String("line\nbreak")), "\"line\nbreak\"");
    }

    #[test]
    fn test_containers() {
        assert_eq!(render(&Value::Array(vec![])), "[]");
        assert_eq!(render(&Value::Object(Map::new())), "{}");

        let items = vec![Value::Number(1.0), Value::Null, Value::String("s")];
        assert_eq!(render(&Value::Array(items)), r#"[1,null,"s"]"#);

        let mut map = Map::new();
        map.insert("b".to_string(), Value::Bool(false));
        map.insert("a".to_string(), Value::Array(vec![Value::Number(1.0)]));
        assert_eq!(render(&Value::Object(map)), r#"{"b":false,"a":[1]}"#);
    }

    #[test]
    fn test_keys_are_not_escaped() {
        let mut map = Map::new();
        map.insert(r"k\n".to_string(), Value::Null);
        assert_eq!(render(&Value::Object(map)), r#"{"k\n":null}"#);
    }

    #[test]
    fn test_accumulates() {
        let mut serializer = Serializer::with_capacity(0);
        serializer.serialize_value(&Value::Bool(true));
        serializer.serialize_value(&Value::Array(vec![]));
        assert_eq!(serializer.into_inner(), "true[]");
    }
}
