//! String literal lexing.
//!
//! This module handles single-line quoted strings and their escape
//! sequences. Block strings live in `block_string`.

use crate::error::{LexError, LexErrorKind, Result};
use crate::token::{Token, TokenKind};
use crate::unicode::{
    combine_surrogates, describe_char, hex_digit_to_value, is_forbidden_control,
    is_leading_surrogate, is_trailing_surrogate, parse_hex4, Codepoint,
};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Parses a string enclosed in double quotes, resolving escape sequences.
    /// The string must close on the line it starts on.
    pub(crate) fn lex_string(&mut self) -> Result<Token> {
        self.cursor.advance_bytes(1);

        let mut value = String::new();

        loop {
            match self.cursor.current() {
                Codepoint::Char('"', _) => {
                    self.cursor.advance_bytes(1);
                    return Ok(self.make_token(TokenKind::String, value));
                },
                Codepoint::Char('\\', _) => value.push(self.lex_escape()?),
                Codepoint::Char('\n' | '\r', _) | Codepoint::Eof => {
                    return Err(self.unterminated_string());
                },
                Codepoint::Char(c, width) if is_forbidden_control(c) => {
                    let start = self.cursor.position();
                    return Err(self.error_at(
                        LexErrorKind::InvalidCharacter,
                        start,
                        start + width,
                        format!("invalid character within string {}", describe_char(c)),
                    ));
                },
                Codepoint::Char(c, width) => {
                    value.push(c);
                    self.cursor.advance_bytes(width);
                },
                Codepoint::Invalid(_) => return Err(self.invalid_character()),
            }
        }
    }

    fn unterminated_string(&self) -> LexError {
        let offset = self.cursor.position();
        self.error_at(
            LexErrorKind::UnterminatedString,
            offset,
            offset,
            "unterminated string",
        )
    }

    /// Decodes one escape sequence starting at `\`.
    fn lex_escape(&mut self) -> Result<char> {
        let escape_start = self.cursor.position();
        self.cursor.advance_bytes(1);

        let (c, width) = match self.cursor.current() {
            Codepoint::Char(c, width) => (c, width),
            Codepoint::Eof => return Err(self.unterminated_string()),
            Codepoint::Invalid(_) => return Err(self.invalid_character()),
        };

        let decoded = match c {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{8}',
            'f' => '\u{C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => return self.lex_unicode_escape(escape_start),
            _ => {
                let message = if c.is_control() {
                    format!("invalid escape sequence: '\\' followed by {}", describe_char(c))
                } else {
                    format!("invalid escape sequence '\\{}'", c)
                };
                return Err(self.error_at(
                    LexErrorKind::InvalidEscape,
                    escape_start,
                    escape_start + 1 + width,
                    message,
                ));
            },
        };

        self.cursor.advance_bytes(width);
        Ok(decoded)
    }

    /// Decodes `\uXXXX`, pairing a leading surrogate with the escape after it.
    ///
    /// The cursor is on the `u`.
    fn lex_unicode_escape(&mut self, escape_start: usize) -> Result<char> {
        self.cursor.advance_bytes(1);
        let Some(value) = parse_hex4(self.cursor.remaining()) else {
            return Err(self.bad_unicode_escape(escape_start));
        };
        self.cursor.advance_bytes(4);

        if is_leading_surrogate(value) {
            let trail = self
                .cursor
                .starts_with(b"\\u")
                .then(|| self.cursor.remaining().get(2..).and_then(parse_hex4))
                .flatten();
            if let Some(c) = trail.and_then(|trail| combine_surrogates(value, trail)) {
                self.cursor.advance_bytes(6);
                return Ok(c);
            }
            return Err(self.unpaired_surrogate(escape_start));
        }
        if is_trailing_surrogate(value) {
            return Err(self.unpaired_surrogate(escape_start));
        }

        // Every non-surrogate value below 0x10000 is a valid char.
        char::from_u32(value).ok_or_else(|| self.unpaired_surrogate(escape_start))
    }

    /// Error for a `\u` not followed by four hex digits.
    ///
    /// The reported text runs from the backslash through the first offending
    /// codepoint, unless that codepoint ends the string.
    fn bad_unicode_escape(&self, escape_start: usize) -> LexError {
        let hex_len = self
            .cursor
            .remaining()
            .iter()
            .take(4)
            .take_while(|&&b| hex_digit_to_value(b).is_some())
            .count();
        let mut end = self.cursor.position() + hex_len;
        if let Codepoint::Char(c, width) = self.cursor.peek(hex_len) {
            if c != '"' && c != '\n' && c != '\r' {
                end += width;
            }
        }
        let text = String::from_utf8_lossy(&self.cursor.source()[escape_start..end]);
        self.error_at(
            LexErrorKind::InvalidUnicodeEscape,
            escape_start,
            end,
            format!("invalid unicode escape sequence '{}'", text),
        )
    }

    /// Error for a surrogate escape that isn't half of a valid pair.
    fn unpaired_surrogate(&self, escape_start: usize) -> LexError {
        let end = escape_start + 6;
        let text = String::from_utf8_lossy(&self.cursor.source()[escape_start..end]);
        self.error_at(
            LexErrorKind::InvalidUnicodeEscape,
            escape_start,
            end,
            format!("invalid unicode escape sequence '{}': unpaired surrogate", text),
        )
    }
}
