//! Error types for JSON parsing and value extraction.
//!
//! Every parse failure is fatal to the current [`from_str`](crate::from_str) call: the
//! parser never resynchronizes and never hands back a partial tree. The returned
//! [`Error`] names what went wrong ([`ErrorKind`]) and where, as a byte offset into the
//! input plus a 1-based line and column.
//!
//! ## Examples
//!
//! ```rust
//! use json_borrow::{from_str, ErrorKind};
//!
//! let err = from_str("{} x").unwrap_err();
//! assert_eq!(err.kind(), &ErrorKind::TrailingCharacters);
//! assert_eq!(err.offset(), 3);
//! assert!(err.to_string().contains("line 1, column 4"));
//! ```

use thiserror::Error;

/// The reason a parse (or a typed extraction) failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The next non-whitespace character cannot start a value.
    #[error("unexpected token while parsing value")]
    UnexpectedToken,

    /// An object member did not start with a quoted key.
    #[error("expected string for object key")]
    ExpectedStringKey,

    #[error("expected ':' after object key")]
    ExpectedColon,

    #[error("expected ',' or '}}' after object member")]
    ExpectedCommaOrEndOfObject,

    #[error("expected ',' or ']' after array element")]
    ExpectedCommaOrEndOfArray,

    /// Input ended before the closing quote of a string.
    #[error("unterminated string")]
    UnterminatedString,

    /// Input ended right after a backslash inside a string.
    #[error("unexpected end of input in escape sequence")]
    UnexpectedEndOfEscape,

    /// Non-whitespace input remains after the top-level value.
    #[error("trailing characters after JSON value")]
    TrailingCharacters,

    /// Containers are nested deeper than [`ParseOptions::max_depth`](crate::ParseOptions).
    #[error("nesting exceeds maximum depth of {limit}")]
    MaxDepthExceeded { limit: usize },

    /// A [`Value`](crate::Value) was converted into a Rust type of a different variant.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// A located error.
///
/// Parse errors carry the byte offset of the failure and its line/column.
/// Extraction errors (see [`ErrorKind::TypeMismatch`]) have no input to point into and
/// report offset 0, line 0, column 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {column} (byte {offset})")]
pub struct Error {
    kind: ErrorKind,
    offset: usize,
    line: usize,
    column: usize,
}

impl Error {
    /// Creates an error located at `offset` within `input`.
    ///
    /// Line and column are 1-based; the column counts characters, not bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_borrow::{Error, ErrorKind};
    ///
    /// let err = Error::at(ErrorKind::ExpectedColon, "{\n  \"a\" 1}", 8);
    /// assert_eq!(err.line(), 2);
    /// assert_eq!(err.column(), 7);
    /// ```
    #[must_use]
    pub fn at(kind: ErrorKind, input: &str, offset: usize) -> Self {
        let offset = offset.min(input.len());
        let consumed = &input.as_bytes()[..offset];
        let line = 1 + consumed.iter().filter(|&&b| b == b'\n').count();
        let line_start = consumed
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |nl| nl + 1);
        // Continuation bytes don't start a character.
        let column = 1 + consumed[line_start..]
            .iter()
            .filter(|&&b| (b & 0xC0) != 0x80)
            .count();
        Error {
            kind,
            offset,
            line,
            column,
        }
    }

    /// Creates a type mismatch error for a failed `TryFrom<Value>` conversion.
    #[must_use]
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Error {
            kind: ErrorKind::TypeMismatch { expected, found },
            offset: 0,
            line: 0,
            column: 0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Byte offset into the input where the failure was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

pub type Result<T> = std::result::Result<T, Error>;
