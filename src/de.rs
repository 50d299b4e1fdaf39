//! JSON parsing.
//!
//! This module provides the [`Parser`], a recursive-descent reader that turns JSON
//! text into a [`Value`] tree without copying string contents.
//!
//! ## Overview
//!
//! - **Single pass**: one byte of lookahead picks the production; nothing is re-read
//! - **Zero-copy strings**: string values are slices of the input, escapes left as written
//! - **Owned keys**: object keys are copied into the [`Map`]; duplicate keys keep their
//!   first value
//! - **Bounded nesting**: container depth is checked against
//!   [`ParseOptions::max_depth`]
//!
//! ## Usage
//!
//! Most users should call [`from_str`](crate::from_str):
//!
//! ```rust
//! use json_borrow::{from_str, Value};
//!
//! let value = from_str(r#"{"a": [1, 2.5, -3]}"#).unwrap();
//! let items = value.get("a").and_then(Value::as_array).unwrap();
//! assert_eq!(items.len(), 3);
//! ```
//!
//! ## Accepted Text
//!
//! The grammar is small:
//!
//! - numbers are `-? digit* ('.' digit*)?` with no exponent and no leading `+`; a span
//!   with no digits at all (a lone `-`) reads as zero
//! - `\` inside a string skips the next byte unconditionally and is kept in the slice
//! - whitespace is space, tab, newline, carriage return, vertical tab and form feed
//! - exactly one value, optionally surrounded by whitespace

use crate::{Error, ErrorKind, Map, ParseOptions, Result, Value};

/// The JSON parser.
///
/// Borrows the input for `'a`; every [`Value::String`] it produces points into it.
/// Created via [`Parser::new`] or [`Parser::with_options`] and consumed by
/// [`Parser::parse`].
///
/// # Examples
///
/// ```rust
/// use json_borrow::{ParseOptions, Parser, Value};
///
/// let parser = Parser::with_options("[true]", ParseOptions::new().with_max_depth(4));
/// assert_eq!(parser.parse().unwrap(), Value::Array(vec![Value::Bool(true)]));
/// ```
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Parser {
            input,
            position: 0,
            depth: 0,
            options,
        }
    }

    /// Parses exactly one value followed by optional whitespace.
    ///
    /// # Errors
    ///
    /// Returns the first grammar violation with its location. No partial tree is
    /// returned.
    pub fn parse(mut self) -> Result<Value<'a>> {
        self.skip_whitespace();
        let value = self.parse_value()?;
        self.skip_whitespace();
        if !self.at_end() {
            return Err(self.error(ErrorKind::TrailingCharacters));
        }
        Ok(value)
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn error(&self, kind: ErrorKind) -> Error {
        Error::at(kind, self.input, self.position)
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if is_space(b) {
                self.position += 1;
            } else {
                break;
            }
        }
    }

    fn skip_digits(&mut self) {
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.position += 1;
        }
    }

    /// Consumes `literal` if the input continues with it.
    fn eat_literal(&mut self, literal: &str) -> bool {
        if self.input.as_bytes()[self.position..].starts_with(literal.as_bytes()) {
            self.position += literal.len();
            true
        } else {
            false
        }
    }

    fn enter_container(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(self.error(ErrorKind::MaxDepthExceeded {
                limit: self.options.max_depth,
            }));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_value(&mut self) -> Result<Value<'a>> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'-' | b'0'..=b'9') => Ok(Value::Number(self.parse_number())),
            _ if self.eat_literal("true") => Ok(Value::Bool(true)),
            _ if self.eat_literal("false") => Ok(Value::Bool(false)),
            _ if self.eat_literal("null") => Ok(Value::Null),
            _ => Err(self.error(ErrorKind::UnexpectedToken)),
        }
    }

    fn parse_object(&mut self) -> Result<Value<'a>> {
        self.enter_container()?;
        self.position += 1; // '{'
        self.skip_whitespace();

        let mut map = Map::new();
        if self.peek() == Some(b'}') {
            self.position += 1;
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(self.error(ErrorKind::ExpectedStringKey));
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.error(ErrorKind::ExpectedColon));
            }
            self.position += 1;

            let value = self.parse_value()?;
            map.insert_if_absent(key.to_owned(), value);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.position += 1,
                Some(b'}') => {
                    self.position += 1;
                    break;
                }
                _ => return Err(self.error(ErrorKind::ExpectedCommaOrEndOfObject)),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value<'a>> {
        self.enter_container()?;
        self.position += 1; // '['
        self.skip_whitespace();

        let mut items = Vec::new();
        if self.peek() == Some(b']') {
            self.position += 1;
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.position += 1,
                Some(b']') => {
                    self.position += 1;
                    break;
                }
                _ => return Err(self.error(ErrorKind::ExpectedCommaOrEndOfArray)),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    /// Returns the raw text between the quotes. The cursor must be on the opening quote.
    fn parse_string(&mut self) -> Result<&'a str> {
        let input = self.input;
        let bytes = input.as_bytes();
        let start = self.position + 1;
        let mut pos = start;

        loop {
            let Some(offset) = bytes[pos..].iter().position(|&b| b == b'"' || b == b'\\') else {
                self.position = bytes.len();
                return Err(self.error(ErrorKind::UnterminatedString));
            };
            pos += offset;

            if bytes[pos] == b'"' {
                self.position = pos + 1;
                // Both ends sit on ASCII quotes, so they are char boundaries.
                return Ok(&input[start..pos]);
            }

            // Backslash: keep it and skip whatever byte follows.
            if pos + 1 >= bytes.len() {
                self.position = bytes.len();
                return Err(self.error(ErrorKind::UnexpectedEndOfEscape));
            }
            pos += 2;
        }
    }

    fn parse_number(&mut self) -> f64 {
        let start = self.position;

        if self.peek() == Some(b'-') {
            self.position += 1;
        }
        self.skip_digits();
        if self.peek() == Some(b'.') {
            self.position += 1;
            self.skip_digits();
        }

        // A span without digits converts to zero.
        self.input[start..self.position].parse().unwrap_or(0.0)
    }
}

#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Value<'_>> {
        Parser::new(input).parse()
    }

    fn kind(input: &str) -> ErrorKind {
        parse(input).unwrap_err().kind().clone()
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse("true").unwrap(), Value::Bool(true));
        assert_eq!(parse("false").unwrap(), Value::Bool(false));
        assert_eq!(parse(" null ").unwrap(), Value::Null);
        assert_eq!(kind("tru"), ErrorKind::UnexpectedToken);
        assert_eq!(kind("nul"), ErrorKind::UnexpectedToken);
        assert_eq!(kind("True"), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse("-3.5").unwrap(), Value::Number(-3.5));
        assert_eq!(parse("0").unwrap(), Value::Number(0.0));
        assert_eq!(parse("42").unwrap(), Value::Number(42.0));
        assert_eq!(parse("007").unwrap(), Value::Number(7.0));
        assert_eq!(parse("1.").unwrap(), Value::Number(1.0));
        assert_eq!(parse("-.25").unwrap(), Value::Number(-0.25));
        assert_eq!(parse("-").unwrap(), Value::Number(0.0));
    }

    #[test]
    fn test_number_rejects_exponent_and_plus() {
        assert_eq!(kind("1e5"), ErrorKind::TrailingCharacters);
        assert_eq!(kind("[1E5]"), ErrorKind::ExpectedCommaOrEndOfArray);
        assert_eq!(kind("+1"), ErrorKind::UnexpectedToken);
        assert_eq!(kind(".5"), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_whitespace_kinds() {
        let value = parse("\t\r\n\u{0b}\u{0c} [ 1 ,\n2 ] \n").unwrap();
        assert_eq!(
            value,
            Value::Array(vec![Value::Number(1.0), Value::Number(2.0)])
        );
    }

    #[test]
    fn test_string_borrows_input() {
        let input = String::from(r#""hello""#);
        let value = parse(&input).unwrap();
        let slice = value.as_str().unwrap();
        assert_eq!(slice, "hello");
        assert_eq!(slice.as_ptr(), input[1..].as_ptr());
    }

    #[test]
    fn test_string_escapes_are_raw() {
        assert_eq!(parse(r#""a\nb""#).unwrap(), Value::String(r"a\nb"));
        assert_eq!(parse(r#""x\"y""#).unwrap(), Value::String(r#"x\"y"#));
        assert_eq!(parse(r#""\\""#).unwrap(), Value::String(r"\\"));
        assert_eq!(parse(r#""\u00e9""#).unwrap(), Value::String(r"\u00e9"));
    }

    #[test]
    fn test_string_multibyte() {
        assert_eq!(parse("\"héllo ✓\"").unwrap(), Value::String("héllo ✓"));
        assert_eq!(parse("\"\\é\"").unwrap(), Value::String("\\é"));
    }

    #[test]
    fn test_string_errors() {
        assert_eq!(kind(r#""abc"#), ErrorKind::UnterminatedString);
        assert_eq!(kind(r#""abc\"#), ErrorKind::UnexpectedEndOfEscape);
        assert_eq!(kind(r#""abc\""#), ErrorKind::UnterminatedString);
    }

    #[test]
    fn test_object_keys_are_owned() {
        let value = {
            let input = String::from(r#"{"k": 1}"#);
            let value = parse(&input).unwrap();
            let map = value.as_object().unwrap().clone();
            map.into_iter()
                .map(|(k, v)| (k, v.as_f64()))
                .collect::<Vec<_>>()
        };
        assert_eq!(value, vec![("k".to_string(), Some(1.0))]);
    }

    #[test]
    fn test_duplicate_keys_first_wins() {
        let value = parse(r#"{"a":1,"b":true,"a":2}"#).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn test_object_errors() {
        assert_eq!(kind("{"), ErrorKind::ExpectedStringKey);
        assert_eq!(kind("{1:2}"), ErrorKind::ExpectedStringKey);
        assert_eq!(kind(r#"{"a":1,}"#), ErrorKind::ExpectedStringKey);
        assert_eq!(kind(r#"{"a" 1}"#), ErrorKind::ExpectedColon);
        assert_eq!(kind(r#"{"a":1"#), ErrorKind::ExpectedCommaOrEndOfObject);
        assert_eq!(kind(r#"{"a":1 "b":2}"#), ErrorKind::ExpectedCommaOrEndOfObject);
        assert_eq!(kind(r#"{"a":}"#), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_array_errors() {
        assert_eq!(kind("["), ErrorKind::UnexpectedToken);
        assert_eq!(kind("[1"), ErrorKind::ExpectedCommaOrEndOfArray);
        assert_eq!(kind("[1,]"), ErrorKind::UnexpectedToken);
        assert_eq!(kind("[1 2]"), ErrorKind::ExpectedCommaOrEndOfArray);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(kind(""), ErrorKind::UnexpectedToken);
        assert_eq!(kind("   "), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_depth_limit() {
        let options = ParseOptions::new().with_max_depth(3);
        assert!(Parser::with_options("[[[]]]", options.clone()).parse().is_ok());
        assert!(Parser::with_options(r#"{"a":[{}]}"#, options.clone()).parse().is_ok());

        let err = Parser::with_options("[[[[]]]]", options).parse().unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MaxDepthExceeded { limit: 3 });
        assert_eq!(err.offset(), 3);
    }

    #[test]
    fn test_depth_is_per_branch() {
        let options = ParseOptions::new().with_max_depth(2);
        let input = "[[1],[2],{\"a\":3}]";
        assert!(Parser::with_options(input, options).parse().is_ok());
    }

    #[test]
    fn test_zero_depth_allows_scalars_only() {
        let options = ParseOptions::new().with_max_depth(0);
        assert!(Parser::with_options("1", options.clone()).parse().is_ok());
        assert!(Parser::with_options("{}", options).parse().is_err());
    }

    #[test]
    fn test_default_depth_rejects_deep_nesting() {
        let input = "[".repeat(10_000);
        let err = parse(&input).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::MaxDepthExceeded {
                limit: crate::options::DEFAULT_MAX_DEPTH
            }
        );
    }
}
