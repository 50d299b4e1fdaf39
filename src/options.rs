//! Configuration options for parsing.
//!
//! The parser has a single knob: how deeply arrays and objects may nest before the
//! parse is rejected with [`ErrorKind::MaxDepthExceeded`](crate::ErrorKind). Without a
//! limit, recursion depth is bounded only by the call stack.
//!
//! ## Examples
//!
//! ```rust
//! use json_borrow::{from_str_with_options, ErrorKind, ParseOptions};
//!
//! let options = ParseOptions::new().with_max_depth(2);
//! assert!(from_str_with_options("[[1]]", options.clone()).is_ok());
//!
//! let err = from_str_with_options("[[[1]]]", options).unwrap_err();
//! assert_eq!(err.kind(), &ErrorKind::MaxDepthExceeded { limit: 2 });
//! ```

/// Default nesting limit for arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for [`Parser`](crate::Parser).
///
/// Depth counts open containers: `[]` has depth 1, `[[]]` depth 2, and a bare scalar
/// depth 0.
///
/// # Examples
///
/// ```rust
/// use json_borrow::ParseOptions;
///
/// let options = ParseOptions::new();
/// assert_eq!(options.max_depth, 128);
///
/// let options = ParseOptions::unlimited();
/// assert_eq!(options.max_depth, usize::MAX);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Creates default options (nesting limit of [`DEFAULT_MAX_DEPTH`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with no practical nesting limit.
    ///
    /// Deeply nested input can then overflow the stack.
    #[must_use]
    pub fn unlimited() -> Self {
        ParseOptions {
            max_depth: usize::MAX,
        }
    }

    /// Sets the maximum nesting depth.
    ///
    /// A limit of 0 accepts only scalar documents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_borrow::ParseOptions;
    ///
    /// let options = ParseOptions::new().with_max_depth(16);
    /// assert_eq!(options.max_depth, 16);
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
