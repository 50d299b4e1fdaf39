//! # json_borrow
//!
//! A small JSON value model with a zero-copy recursive-descent parser and a compact
//! serializer.
//!
//! ## Key Features
//!
//! - **Zero-copy strings**: [`Value::String`] is a slice of the parsed text; only object
//!   keys are copied
//! - **Typed errors**: every failure is an [`ErrorKind`] with a byte offset, line and column
//! - **Bounded recursion**: nesting depth is capped (see [`ParseOptions`])
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```rust
//! use json_borrow::{from_str, to_string, Value};
//!
//! let input = r#"{"name": "Test", "counter": 1}"#;
//! let mut root = from_str(input).unwrap();
//!
//! if let Some(Value::Number(counter)) = root.get_mut("counter") {
//!     *counter += 1.0;
//! }
//!
//! assert_eq!(to_string(&root), r#"{"name":"Test","counter":2}"#);
//! ```
//!
//! ## Strings Are Raw
//!
//! The parser does not decode escape sequences and the serializer does not add any.
//! A backslash and the byte after it are kept as they appear in the input:
//!
//! ```rust
//! use json_borrow::{from_str, to_string, Value};
//!
//! let value = from_str(r#"["tab\there"]"#).unwrap();
//! assert_eq!(value.as_array().unwrap()[0], Value::String(r"tab\there"));
//! assert_eq!(to_string(&value), r#"["tab\there"]"#);
//! ```
//!
//! Text whose strings contain escapes therefore only round-trips as long as the
//! stored slices are written back untouched; building a [`Value::String`] from text
//! with a bare `"` produces output that is not valid JSON.
//!
//! ## Object Semantics
//!
//! Duplicate keys keep the **first** value seen. Member order is not part of a value's
//! identity (equality ignores it); output follows insertion order.
//!
//! ```rust
//! use json_borrow::from_str;
//!
//! let value = from_str(r#"{"a": 1, "a": 2}"#).unwrap();
//! assert_eq!(value.get("a").and_then(|v| v.as_f64()), Some(1.0));
//! ```
//!
//! ## Concurrency
//!
//! Parsing and serialization are synchronous and share no state, so independent inputs
//! can be processed on separate threads. A parsed tree is `Send + Sync` and can be read
//! from many threads at once.

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use de::Parser;
pub use error::{Error, ErrorKind, Result};
pub use map::Map;
pub use options::ParseOptions;
pub use ser::Serializer;
pub use value::Value;

use std::io;

/// Parses one JSON document with default [`ParseOptions`].
///
/// The returned tree borrows string values from `s`.
///
/// # Examples
///
/// ```rust
/// use json_borrow::{from_str, Value};
///
/// assert_eq!(from_str("true").unwrap(), Value::Bool(true));
/// assert_eq!(from_str("null").unwrap(), Value::Null);
/// assert_eq!(from_str("-3.5").unwrap(), Value::Number(-3.5));
/// ```
///
/// # Errors
///
/// Returns an error if `s` is not a single well-formed value followed only by
/// whitespace, or if it nests deeper than the default limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Value<'_>> {
    Parser::new(s).parse()
}

/// Parses one JSON document with custom options.
///
/// # Errors
///
/// Same as [`from_str`], with the nesting limit taken from `options`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: ParseOptions) -> Result<Value<'_>> {
    Parser::with_options(s, options).parse()
}

/// Renders a value as compact JSON text.
///
/// # Examples
///
/// ```rust
/// use json_borrow::{to_string, value};
///
/// assert_eq!(to_string(&value!([1, 2.5, "x"])), r#"[1,2.5,"x"]"#);
/// ```
#[must_use]
pub fn to_string(value: &Value<'_>) -> String {
    let mut serializer = Serializer::new();
    serializer.serialize_value(value);
    serializer.into_inner()
}

/// Writes a value as compact JSON text to `writer`.
///
/// # Examples
///
/// ```rust
/// use json_borrow::{to_writer, Value};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Value::Bool(true)).unwrap();
/// assert_eq!(buffer, b"true");
/// ```
///
/// # Errors
///
/// Returns any error produced by `writer`.
pub fn to_writer<W>(mut writer: W, value: &Value<'_>) -> io::Result<()>
where
    W: io::Write,
{
    writer.write_all(to_string(value).as_bytes())
}
