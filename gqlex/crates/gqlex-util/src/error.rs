//! Core error types for gqlex-util crate

use thiserror::Error;

/// Error type for source lookup operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for the source buffer
    #[error("Span out of bounds: source has {len} bytes, span is {start}..{end}")]
    SpanOutOfBounds { len: usize, start: usize, end: usize },

    /// Invalid line number
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },
}

/// Result type alias for source lookup operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
