//! Number literal lexing.
//!
//! This module handles lexing of Int and Float literals:
//!
//! ```text
//! -? (0 | [1-9][0-9]*) (\.[0-9]+)? ([eE][+-]?[0-9]+)?
//! ```
//!
//! The value of the token is the matched source text; no numeric conversion
//! happens here.

use crate::error::{LexError, LexErrorKind, Result};
use crate::token::{Token, TokenKind};
use crate::unicode::{describe_codepoint, Codepoint};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at a digit or `-`.
    ///
    /// # Returns
    ///
    /// `Int` unless a fraction or exponent is present, then `Float`.
    pub(crate) fn lex_number(&mut self) -> Result<Token> {
        let start = self.cursor.position();
        let mut is_float = false;

        if self.cursor.current_byte() == Some(b'-') {
            self.cursor.advance_bytes(1);
        }

        if self.cursor.current_byte() == Some(b'0') {
            self.cursor.advance_bytes(1);
            if let Some(digit) = self.cursor.current_byte().filter(u8::is_ascii_digit) {
                return Err(self.number_error(format!(
                    "invalid number, unexpected digit after 0: '{}'",
                    digit as char
                )));
            }
        } else {
            self.lex_digits()?;
        }

        if self.cursor.current_byte() == Some(b'.') {
            is_float = true;
            self.cursor.advance_bytes(1);
            self.lex_digits()?;
        }

        if let Some(b'e' | b'E') = self.cursor.current_byte() {
            is_float = true;
            self.cursor.advance_bytes(1);
            if let Some(b'+' | b'-') = self.cursor.current_byte() {
                self.cursor.advance_bytes(1);
            }
            self.lex_digits()?;
        }

        // Numbers must not run straight into a name or another dot.
        if let Codepoint::Char(c, _) = self.cursor.current() {
            if c == '.' || c == '_' || c.is_ascii_alphabetic() {
                return Err(self.expected_digit());
            }
        }

        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        // Number bytes are ASCII.
        let value = String::from_utf8_lossy(self.cursor.slice_from(start)).into_owned();
        Ok(self.make_token(kind, value))
    }

    /// Consumes one or more digits.
    fn lex_digits(&mut self) -> Result<()> {
        if !self.cursor.current_byte().is_some_and(|b| b.is_ascii_digit()) {
            return Err(self.expected_digit());
        }
        while self.cursor.current_byte().is_some_and(|b| b.is_ascii_digit()) {
            self.cursor.advance_bytes(1);
        }
        Ok(())
    }

    fn expected_digit(&self) -> LexError {
        self.number_error(format!(
            "invalid number, expected digit but got {}",
            describe_codepoint(self.cursor.current())
        ))
    }

    /// Builds an `InvalidNumber` error pointing at the codepoint under the
    /// cursor.
    fn number_error(&self, message: String) -> LexError {
        let start = self.cursor.position();
        let width = match self.cursor.current() {
            Codepoint::Char(_, width) => width,
            Codepoint::Invalid(_) => 1,
            Codepoint::Eof => 0,
        };
        self.error_at(LexErrorKind::InvalidNumber, start, start + width, message)
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexErrorKind, Token, TokenKind};

    fn single(source: &str) -> Token {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 3, "{source:?} -> {tokens:?}");
        tokens[1].clone()
    }

    #[test]
    fn test_ints() {
        for source in ["0", "-0", "4", "-4", "9876543210", "-9"] {
            let token = single(source);
            assert_eq!(token.kind, TokenKind::Int, "{source}");
            assert_eq!(token.value, source);
        }
    }

    #[test]
    fn test_floats() {
        for source in [
            "0.0", "4.123", "-4.123", "0.123", "123e4", "123E4", "123e-4", "123e+4", "-1.123e4",
            "-1.123E-4", "1e10",
        ] {
            let token = single(source);
            assert_eq!(token.kind, TokenKind::Float, "{source}");
            assert_eq!(token.value, source);
        }
    }

    #[test]
    fn test_number_errors() {
        for (source, message, offset) in [
            ("01", "invalid number, unexpected digit after 0: '1'", 1),
            ("-01", "invalid number, unexpected digit after 0: '1'", 2),
            ("-", "invalid number, expected digit but got <EOF>", 1),
            ("-A", "invalid number, expected digit but got 'A' (U+0041)", 1),
            ("1.", "invalid number, expected digit but got <EOF>", 2),
            ("1.A", "invalid number, expected digit but got 'A' (U+0041)", 2),
            (".123", "invalid character '.', expected '...'", 0),
            ("1e", "invalid number, expected digit but got <EOF>", 2),
            ("1e+", "invalid number, expected digit but got <EOF>", 3),
            ("1.0e", "invalid number, expected digit but got <EOF>", 4),
            ("123abc", "invalid number, expected digit but got 'a' (U+0061)", 3),
            ("1.2.3", "invalid number, expected digit but got '.' (U+002E)", 3),
            ("0x1", "invalid number, expected digit but got 'x' (U+0078)", 1),
            ("1_000", "invalid number, expected digit but got '_' (U+005F)", 1),
            ("1.23f", "invalid number, expected digit but got 'f' (U+0066)", 4),
        ] {
            let err = tokenize(source).unwrap_err();
            assert_eq!(err.message, message, "{source}");
            assert_eq!(err.offset(), offset, "{source}");
        }
    }

    #[test]
    fn test_number_error_kind() {
        assert_eq!(tokenize("00").unwrap_err().kind, LexErrorKind::InvalidNumber);
        assert_eq!(tokenize("1e").unwrap_err().kind, LexErrorKind::InvalidNumber);
        assert_eq!(tokenize(".5").unwrap_err().kind, LexErrorKind::InvalidSpread);
    }

    #[test]
    fn test_number_followed_by_punctuator() {
        let tokens = tokenize("[1,2.5]").unwrap();
        assert_eq!(tokens[2].kind, TokenKind::Int);
        assert_eq!(tokens[3].kind, TokenKind::Float);
        assert_eq!(tokens[4].kind, TokenKind::BracketClose);
    }

    #[test]
    fn test_number_followed_by_non_ascii() {
        let err = tokenize("1é").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidCharacter);
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn test_number_span() {
        let token = single("  -12.5e3 ");
        assert_eq!((token.span.start, token.span.end, token.span.column), (2, 9, 3));
    }
}
