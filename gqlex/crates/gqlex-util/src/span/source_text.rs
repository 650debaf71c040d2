//! Line lookup over a raw source buffer.
//!
//! [`SourceText`] precomputes the offset of every line start so that a
//! diagnostic can recover the text of the line an error points into. Line
//! terminators are `\n`, `\r\n` and a lone `\r`, the same set the lexer
//! counts.

use std::borrow::Cow;

use crate::error::{SourceError, SourceResult};

/// Returns true for the bytes that can start a line terminator.
#[inline]
pub fn is_line_terminator(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// A source buffer with precomputed line starts.
///
/// # Examples
///
/// ```
/// use gqlex_util::span::SourceText;
///
/// let text = SourceText::new(b"query\r\n{ a }\rb");
/// assert_eq!(text.line_count(), 3);
/// assert_eq!(text.line_at(2).unwrap(), "{ a }");
/// assert_eq!(text.offset_to_line_col(9), (2, 3));
/// ```
#[derive(Clone, Debug)]
pub struct SourceText<'a> {
    bytes: &'a [u8],
    line_starts: Vec<usize>,
}

impl<'a> SourceText<'a> {
    /// Index the given buffer.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            line_starts: Self::line_starts(bytes),
        }
    }

    fn line_starts(bytes: &[u8]) -> Vec<usize> {
        let mut starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => starts.push(i + 1),
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    i += 1;
                    starts.push(i + 1);
                },
                b'\r' => starts.push(i + 1),
                _ => {},
            }
            i += 1;
        }
        starts
    }

    /// The underlying buffer.
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Number of lines (an empty buffer has one empty line).
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where a 1-based line starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        line.checked_sub(1)
            .and_then(|idx| self.line_starts.get(idx))
            .copied()
    }

    /// Convert a byte offset to 1-based (line, column) coordinates.
    ///
    /// Columns are measured in bytes from the start of the line. Offsets past
    /// the end are clamped to the end of the buffer.
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.bytes.len());
        let idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        (idx + 1, offset - self.line_starts[idx] + 1)
    }

    /// Text of a 1-based line, without its terminator.
    ///
    /// Malformed UTF-8 is replaced with U+FFFD so the line can always be
    /// displayed.
    pub fn line_at(&self, line: usize) -> SourceResult<Cow<'a, str>> {
        let start = self
            .line_start(line)
            .ok_or(SourceError::InvalidLineNumber {
                line,
                max_lines: self.line_count(),
            })?;
        let mut end = start;
        while end < self.bytes.len() && !is_line_terminator(self.bytes[end]) {
            end += 1;
        }
        Ok(String::from_utf8_lossy(&self.bytes[start..end]))
    }

    /// Extract the bytes covered by `start..end`.
    pub fn extract_range(&self, start: usize, end: usize) -> SourceResult<&'a [u8]> {
        if start > end {
            return Err(SourceError::InvalidSpan { start, end });
        }
        if end > self.bytes.len() {
            return Err(SourceError::SpanOutOfBounds {
                len: self.bytes.len(),
                start,
                end,
            });
        }
        Ok(&self.bytes[start..end])
    }
}

impl<'a> From<&'a str> for SourceText<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_empty_source_has_one_line() {
        let text = SourceText::new(b"");
        assert_eq!(text.line_count(), 1);
        assert_eq!(text.line_at(1).unwrap(), "");
        assert_eq!(text.offset_to_line_col(0), (1, 1));
    }

    #[test]
    fn test_crlf_counts_once() {
        let text = SourceText::new(b"a\r\nb\nc\rd");
        assert_eq!(text.line_count(), 4);
        assert_eq!(text.line_start(2), Some(3));
        assert_eq!(text.line_start(3), Some(5));
        assert_eq!(text.line_start(4), Some(7));
        assert_eq!(text.line_start(0), None);
        assert_eq!(text.line_start(5), None);
    }

    #[test]
    fn test_line_at_strips_terminator() {
        let text = SourceText::from("first\r\nsecond\n");
        assert_eq!(text.line_at(1).unwrap(), "first");
        assert_eq!(text.line_at(2).unwrap(), "second");
        assert_eq!(text.line_at(3).unwrap(), "");
        assert!(matches!(
            text.line_at(4),
            Err(SourceError::InvalidLineNumber { line: 4, max_lines: 3 })
        ));
    }

    #[test]
    fn test_line_at_lossy() {
        let text = SourceText::new(b"a\xffb");
        assert_eq!(text.line_at(1).unwrap(), "a\u{FFFD}b");
    }

    #[test]
    fn test_extract_range() {
        let text = SourceText::from("{ hero }");
        assert_eq!(text.extract_range(2, 6).unwrap(), b"hero");
        assert!(matches!(
            text.extract_range(6, 2),
            Err(SourceError::InvalidSpan { .. })
        ));
        assert!(matches!(
            text.extract_range(2, 60),
            Err(SourceError::SpanOutOfBounds { len: 8, .. })
        ));
    }

    #[quickcheck]
    fn prop_line_start_maps_to_column_one(source: String) -> bool {
        let text = SourceText::from(source.as_str());
        (1..=text.line_count()).all(|line| {
            let start = text.line_start(line).unwrap();
            text.offset_to_line_col(start) == (line, 1)
        })
    }

    #[quickcheck]
    fn prop_columns_never_zero(source: String, offset: usize) -> bool {
        let text = SourceText::from(source.as_str());
        let (line, column) = text.offset_to_line_col(offset);
        line >= 1 && column >= 1 && line <= text.line_count()
    }
}
