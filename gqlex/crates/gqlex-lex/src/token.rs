//! Token definitions.
//!
//! A [`Token`] is a kind, the span it covers in the source, and its decoded
//! value. Only names, numbers, strings and comments carry a value; for every
//! other kind the value is empty.

use std::fmt;

use gqlex_util::Span;

/// The kind of a lexical token.
///
/// `Display` renders the form used in error messages: punctuators as their
/// literal text, the stream markers as `<SOF>` / `<EOF>`, and value-bearing
/// kinds by name.
///
/// # Example
///
/// ```
/// use gqlex_lex::TokenKind;
///
/// assert_eq!(TokenKind::Spread.to_string(), "...");
/// assert_eq!(TokenKind::EndOfFile.to_string(), "<EOF>");
/// assert_eq!(TokenKind::BlockString.to_string(), "BlockString");
/// assert!(TokenKind::Pipe.is_punctuator());
/// assert!(!TokenKind::Name.is_punctuator());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Start of the stream. Never produced by scanning.
    StartOfFile,
    /// End of the stream.
    EndOfFile,
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `...`
    Spread,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `{`
    BraceOpen,
    /// `|`
    Pipe,
    /// `}`
    BraceClose,
    /// `[_A-Za-z][_0-9A-Za-z]*`
    Name,
    /// Integer literal.
    Int,
    /// Float literal.
    Float,
    /// Single-line quoted string.
    String,
    /// Triple-quoted block string.
    BlockString,
    /// `#` comment, only produced when comments are preserved.
    Comment,
}

impl TokenKind {
    /// All kinds, in declaration order.
    pub const ALL: [TokenKind; 21] = [
        TokenKind::StartOfFile,
        TokenKind::EndOfFile,
        TokenKind::Bang,
        TokenKind::Dollar,
        TokenKind::ParenOpen,
        TokenKind::ParenClose,
        TokenKind::Spread,
        TokenKind::Colon,
        TokenKind::Equals,
        TokenKind::At,
        TokenKind::BracketOpen,
        TokenKind::BracketClose,
        TokenKind::BraceOpen,
        TokenKind::Pipe,
        TokenKind::BraceClose,
        TokenKind::Name,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::BlockString,
        TokenKind::Comment,
    ];

    /// Returns the display form of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::StartOfFile => "<SOF>",
            TokenKind::EndOfFile => "<EOF>",
            TokenKind::Bang => "!",
            TokenKind::Dollar => "$",
            TokenKind::ParenOpen => "(",
            TokenKind::ParenClose => ")",
            TokenKind::Spread => "...",
            TokenKind::Colon => ":",
            TokenKind::Equals => "=",
            TokenKind::At => "@",
            TokenKind::BracketOpen => "[",
            TokenKind::BracketClose => "]",
            TokenKind::BraceOpen => "{",
            TokenKind::Pipe => "|",
            TokenKind::BraceClose => "}",
            TokenKind::Name => "Name",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::BlockString => "BlockString",
            TokenKind::Comment => "Comment",
        }
    }

    /// Returns true for the fixed-text punctuators.
    pub const fn is_punctuator(self) -> bool {
        matches!(
            self,
            TokenKind::Bang
                | TokenKind::Dollar
                | TokenKind::ParenOpen
                | TokenKind::ParenClose
                | TokenKind::Spread
                | TokenKind::Colon
                | TokenKind::Equals
                | TokenKind::At
                | TokenKind::BracketOpen
                | TokenKind::BracketClose
                | TokenKind::BraceOpen
                | TokenKind::Pipe
                | TokenKind::BraceClose
        )
    }

    /// Returns true for kinds whose token carries a decoded value.
    pub const fn has_value(self) -> bool {
        matches!(
            self,
            TokenKind::Name
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::BlockString
                | TokenKind::Comment
        )
    }

    /// Maps a single-byte punctuator to its kind.
    ///
    /// `...` is not included since it spans three bytes.
    pub const fn from_punctuator_byte(b: u8) -> Option<TokenKind> {
        Some(match b {
            b'!' => TokenKind::Bang,
            b'$' => TokenKind::Dollar,
            b'(' => TokenKind::ParenOpen,
            b')' => TokenKind::ParenClose,
            b':' => TokenKind::Colon,
            b'=' => TokenKind::Equals,
            b'@' => TokenKind::At,
            b'[' => TokenKind::BracketOpen,
            b']' => TokenKind::BracketClose,
            b'{' => TokenKind::BraceOpen,
            b'|' => TokenKind::Pipe,
            b'}' => TokenKind::BraceClose,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexical token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What was scanned.
    pub kind: TokenKind,
    /// Source range, plus the line and column of the first byte.
    pub span: Span,
    /// Decoded value, empty unless the kind carries one.
    pub value: String,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, span: Span, value: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            value: value.into(),
        }
    }

    /// The `<SOF>` token every stream starts with.
    pub fn start_of_file() -> Self {
        Self::new(TokenKind::StartOfFile, Span::point(0, 1, 1), String::new())
    }

    /// Byte offset of the first byte.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Byte offset one past the last byte.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Line of the first byte (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the first byte (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns true if this token has the given kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Short description for "expected X, found Y" style messages.
    ///
    /// ```
    /// use gqlex_lex::{Token, TokenKind};
    /// use gqlex_util::Span;
    ///
    /// let name = Token::new(TokenKind::Name, Span::new(0, 4, 1, 1), "hero");
    /// assert_eq!(name.describe(), "Name \"hero\"");
    ///
    /// let colon = Token::new(TokenKind::Colon, Span::new(4, 5, 1, 5), "");
    /// assert_eq!(colon.describe(), ":");
    /// ```
    pub fn describe(&self) -> String {
        if self.value.is_empty() {
            self.kind.to_string()
        } else {
            format!("{} \"{}\"", self.kind, self.value)
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.describe(), self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuator_display_round_trips_bytes() {
        for kind in TokenKind::ALL {
            if kind.is_punctuator() && kind != TokenKind::Spread {
                let text = kind.as_str();
                assert_eq!(text.len(), 1);
                assert_eq!(TokenKind::from_punctuator_byte(text.as_bytes()[0]), Some(kind));
            }
        }
        assert_eq!(TokenKind::from_punctuator_byte(b'.'), None);
        assert_eq!(TokenKind::from_punctuator_byte(b'#'), None);
    }

    #[test]
    fn test_punctuator_and_value_kinds_are_disjoint() {
        for kind in TokenKind::ALL {
            assert!(!(kind.is_punctuator() && kind.has_value()), "{kind:?}");
        }
        assert!(!TokenKind::StartOfFile.is_punctuator());
        assert!(!TokenKind::EndOfFile.has_value());
    }

    #[test]
    fn test_all_kinds_have_distinct_display() {
        let mut seen = std::collections::HashSet::new();
        for kind in TokenKind::ALL {
            assert!(seen.insert(kind.as_str()));
        }
    }

    #[test]
    fn test_start_of_file() {
        let sof = Token::start_of_file();
        assert_eq!(sof.kind, TokenKind::StartOfFile);
        assert_eq!((sof.start(), sof.end()), (0, 0));
        assert_eq!((sof.line(), sof.column()), (1, 1));
        assert_eq!(sof.describe(), "<SOF>");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Int, Span::new(6, 8, 2, 3), "42");
        assert_eq!(token.to_string(), "Int \"42\" at 2:3");
        assert!(token.is(TokenKind::Int));
    }
}
