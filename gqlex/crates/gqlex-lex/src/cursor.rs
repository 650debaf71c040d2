//! Byte cursor for traversing a source buffer.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking a document. It works on raw bytes, decodes UTF-8 on demand
//! through [`decode_at`], and tracks the current line together with the
//! offset at which that line starts. Columns are derived from those two
//! values rather than counted, so they are always byte based.

use crate::unicode::{decode_at, Codepoint};

/// A cursor over a source buffer.
///
/// Line tracking only changes through [`Cursor::consume_line_terminator`];
/// every other movement is a plain byte advance.
///
/// # Example
///
/// ```
/// use gqlex_lex::cursor::Cursor;
/// use gqlex_lex::unicode::Codepoint;
///
/// let mut cursor = Cursor::new(b"a\r\nb");
/// assert_eq!(cursor.current(), Codepoint::Char('a', 1));
/// cursor.advance_bytes(1);
/// assert!(cursor.consume_line_terminator());
/// assert_eq!(cursor.line(), 2);
/// assert_eq!(cursor.line_start(), 3);
/// assert_eq!(cursor.column(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source buffer being traversed.
    source: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Byte offset of the first byte of the current line.
    line_start: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// The whole source buffer.
    #[inline]
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Offset of the first byte of the current line.
    #[inline]
    pub fn line_start(&self) -> usize {
        self.line_start
    }

    /// Column of the current position (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column_at(self.position)
    }

    /// Column of an offset on the current line (1-based).
    ///
    /// Offsets before the current line start clamp to column 1.
    #[inline]
    pub fn column_at(&self, offset: usize) -> u32 {
        u32::try_from(offset.saturating_sub(self.line_start) + 1).unwrap_or(u32::MAX)
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Decodes the codepoint at the current position.
    #[inline]
    pub fn current(&self) -> Codepoint {
        decode_at(self.source, self.position)
    }

    /// Decodes the codepoint `offset` bytes ahead of the current position.
    #[inline]
    pub fn peek(&self, offset: usize) -> Codepoint {
        decode_at(self.source, self.position + offset)
    }

    /// Returns the raw byte at the current position.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.source.get(self.position).copied()
    }

    /// Returns the raw byte `offset` bytes ahead of the current position.
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    /// Returns true if the remaining input starts with `prefix`.
    ///
    /// ```
    /// use gqlex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(br#""""doc""""#);
    /// assert!(cursor.starts_with(b"\"\"\""));
    /// assert!(!cursor.starts_with(b"..."));
    /// ```
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// The unread part of the source.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        self.source.get(self.position..).unwrap_or(&[])
    }

    /// Bytes from `start` up to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.source.get(start..self.position).unwrap_or(&[])
    }

    /// Advances by `count` bytes without touching line tracking.
    ///
    /// Callers must not step over a line terminator with this method.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        self.position = (self.position + count).min(self.source.len());
    }

    /// Consumes `\n`, `\r\n` or a lone `\r` and starts a new line.
    ///
    /// Returns false, without moving, when the cursor is not on a line
    /// terminator.
    ///
    /// ```
    /// use gqlex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"\r\r\n\nx");
    /// assert!(cursor.consume_line_terminator());
    /// assert!(cursor.consume_line_terminator());
    /// assert!(cursor.consume_line_terminator());
    /// assert!(!cursor.consume_line_terminator());
    /// assert_eq!(cursor.line(), 4);
    /// assert_eq!(cursor.position(), 4);
    /// ```
    pub fn consume_line_terminator(&mut self) -> bool {
        match self.current_byte() {
            Some(b'\n') => self.position += 1,
            Some(b'\r') => {
                self.position += 1;
                if self.current_byte() == Some(b'\n') {
                    self.position += 1;
                }
            },
            _ => return false,
        }
        self.new_line();
        true
    }

    #[inline]
    fn new_line(&mut self) {
        self.line += 1;
        self.line_start = self.position;
    }
}
