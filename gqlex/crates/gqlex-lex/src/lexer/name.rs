//! Name lexing.

use crate::token::{Token, TokenKind};
use crate::unicode::is_name_continue_byte;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a name: `[A-Za-z_][A-Za-z0-9_]*`.
    ///
    /// Keywords are not recognized here; `query` and `true` are plain names.
    pub(crate) fn lex_name(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance_bytes(1);
        while self.cursor.current_byte().is_some_and(is_name_continue_byte) {
            self.cursor.advance_bytes(1);
        }
        // Name bytes are ASCII.
        let value = String::from_utf8_lossy(self.cursor.slice_from(start)).into_owned();
        self.make_token(TokenKind::Name, value)
    }
}
