//! Ignored content and comment lexing.
//!
//! This module skips everything that separates tokens: spaces, tabs, commas,
//! line terminators, the byte-order mark and `#` comments.

use crate::token::{Token, TokenKind};
use crate::unicode::{Codepoint, BOM};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips ignored content and returns the offset of the next significant
    /// codepoint.
    ///
    /// When comments are preserved the skipper stops on `#` so the dispatcher
    /// can emit a comment token.
    pub(crate) fn skip_ignored(&mut self) -> usize {
        loop {
            match self.cursor.current() {
                Codepoint::Char('\t' | ' ' | ',', _) => self.cursor.advance_bytes(1),
                Codepoint::Char('\n' | '\r', _) => {
                    self.cursor.consume_line_terminator();
                },
                Codepoint::Char(BOM, width) => self.cursor.advance_bytes(width),
                Codepoint::Char('#', _) if !self.config.preserve_comments => {
                    self.scan_comment();
                },
                _ => return self.cursor.position(),
            }
        }
    }

    /// Consumes a comment starting at `#` and returns the byte range of its
    /// text after the `#`.
    ///
    /// The comment ends before a line terminator, at the end of input, or
    /// before any control character other than tab.
    fn scan_comment(&mut self) -> (usize, usize) {
        self.cursor.advance_bytes(1);
        let start = self.cursor.position();
        while let Codepoint::Char(c, width) = self.cursor.current() {
            if c != '\t' && c < ' ' {
                break;
            }
            self.cursor.advance_bytes(width);
        }
        (start, self.cursor.position())
    }

    /// Lexes a comment into a `Comment` token.
    ///
    /// The value is the comment text with leading spaces and tabs removed.
    pub(crate) fn lex_comment(&mut self) -> Token {
        let (start, end) = self.scan_comment();
        // Every byte in the range decoded as a char, so this never replaces.
        let text = String::from_utf8_lossy(&self.cursor.source()[start..end]);
        let value = text.trim_start_matches([' ', '\t']).to_string();
        self.make_token(TokenKind::Comment, value)
    }
}
