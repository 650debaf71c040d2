//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! byte offsets into the source buffer together with the 1-based line and
//! column of the first byte.
//!
//! # Examples
//!
//! ```
//! use gqlex_util::span::Span;
//!
//! let span = Span::new(10, 20, 1, 11);
//! assert_eq!(span.len(), 10);
//! ```

mod source_text;

pub use source_text::{is_line_terminator, SourceText};

use std::fmt;

/// Source location span
///
/// A `Span` represents a half-open byte range `[start, end)` in a source
/// buffer, plus the line and column of `start` for human-readable output.
/// Columns count bytes from the start of the line.
///
/// # Examples
///
/// ```
/// use gqlex_util::span::Span;
///
/// let span = Span::new(4, 9, 2, 1);
/// assert!(span.contains(4));
/// assert!(!span.contains(9));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

static_assertions::assert_impl_all!(Span: Copy, Send, Sync);

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a zero-width span at `offset`
    ///
    /// ```
    /// use gqlex_util::span::Span;
    ///
    /// let point = Span::point(12, 3, 1);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both.
    ///
    /// The line and column are taken from whichever span starts first.
    ///
    /// ```
    /// use gqlex_util::span::Span;
    ///
    /// let a = Span::new(0, 1, 1, 1);
    /// let b = Span::new(5, 8, 2, 3);
    /// assert_eq!(a.to(b), Span::new(0, 8, 1, 1));
    /// ```
    pub fn to(self, other: Span) -> Span {
        let first = if self.start <= other.start { self } else { other };
        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(3, 7, 2, 4);
        assert_eq!(span.start, 3);
        assert_eq!(span.end, 7);
        assert_eq!(span.line, 2);
        assert_eq!(span.column, 4);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_span_point_is_empty() {
        let span = Span::point(5, 1, 6);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert!(!span.contains(5));
    }

    #[test]
    fn test_span_merge_order_independent() {
        let a = Span::new(10, 12, 3, 1);
        let b = Span::new(2, 4, 1, 3);
        assert_eq!(a.to(b), Span::new(2, 12, 1, 3));
        assert_eq!(b.to(a), Span::new(2, 12, 1, 3));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(0, 1, 4, 9).to_string(), "4:9");
    }
}
