//! Error types for the gqlex lexer.
//!
//! Lexing stops at the first error. A [`LexError`] records the category of
//! the failure, a human-readable message, and the exact source location, and
//! can be rendered as a [`Diagnostic`] with the offending line underlined.

use std::fmt;
use std::path::PathBuf;

use gqlex_util::span::is_line_terminator;
use gqlex_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceSnippet, SourceText, Span};
use thiserror::Error;

/// Category of a lexical error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A character that can't start a token, a forbidden control character,
    /// or a malformed UTF-8 sequence.
    InvalidCharacter,
    /// An unknown `\x` escape inside a string.
    InvalidEscape,
    /// A malformed `\uXXXX` escape or an unpaired surrogate.
    InvalidUnicodeEscape,
    /// A string that hits a line terminator or the end of input.
    UnterminatedString,
    /// A block string that hits the end of input.
    UnterminatedBlockString,
    /// A numeric literal that doesn't follow the grammar.
    InvalidNumber,
    /// A `.` that isn't part of `...`.
    InvalidSpread,
    /// A token longer than the configured limit.
    TokenTooLong,
}

impl LexErrorKind {
    /// Diagnostic code for this category.
    pub const fn code(self) -> DiagnosticCode {
        match self {
            LexErrorKind::InvalidCharacter => DiagnosticCode::E_LEXER_INVALID_CHARACTER,
            LexErrorKind::InvalidSpread => DiagnosticCode::E_LEXER_INVALID_SPREAD,
            LexErrorKind::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexErrorKind::InvalidNumber => DiagnosticCode::E_LEXER_INVALID_NUMBER,
            LexErrorKind::InvalidEscape => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            LexErrorKind::InvalidUnicodeEscape => DiagnosticCode::E_LEXER_INVALID_UNICODE_ESCAPE,
            LexErrorKind::UnterminatedBlockString => {
                DiagnosticCode::E_LEXER_UNTERMINATED_BLOCK_STRING
            },
            LexErrorKind::TokenTooLong => DiagnosticCode::E_LEXER_TOKEN_TOO_LONG,
        }
    }

    /// Suggestion attached to the rendered diagnostic, if any.
    pub const fn help(self) -> Option<&'static str> {
        match self {
            LexErrorKind::InvalidSpread => Some("a spread is written as three dots: '...'"),
            LexErrorKind::UnterminatedString => {
                Some("close the string with '\"'; use a block string (\"\"\") for multi-line text")
            },
            LexErrorKind::UnterminatedBlockString => Some("close the block string with '\"\"\"'"),
            LexErrorKind::InvalidEscape => {
                Some("valid escapes are \\\", \\\\, \\/, \\b, \\f, \\n, \\r, \\t and \\uXXXX")
            },
            LexErrorKind::InvalidNumber => {
                Some("numbers have no leading zeros and must be separated from names")
            },
            LexErrorKind::TokenTooLong => Some("raise `max_token_length` in the lexer configuration"),
            LexErrorKind::InvalidCharacter | LexErrorKind::InvalidUnicodeEscape => None,
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LexErrorKind::InvalidCharacter => "invalid character",
            LexErrorKind::InvalidEscape => "invalid escape sequence",
            LexErrorKind::InvalidUnicodeEscape => "invalid unicode escape",
            LexErrorKind::UnterminatedString => "unterminated string",
            LexErrorKind::UnterminatedBlockString => "unterminated block string",
            LexErrorKind::InvalidNumber => "invalid number",
            LexErrorKind::InvalidSpread => "invalid spread",
            LexErrorKind::TokenTooLong => "token too long",
        };
        f.write_str(text)
    }
}

/// A lexical error with its position.
///
/// # Example
///
/// ```
/// use gqlex_lex::{tokenize, LexErrorKind};
///
/// let err = tokenize("{ hero ? }").unwrap_err();
/// assert_eq!(err.kind, LexErrorKind::InvalidCharacter);
/// assert_eq!((err.line(), err.column()), (1, 8));
/// assert_eq!(err.to_string(), "invalid character '?' (U+003F) at 1:8");
/// ```
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{message} at {}:{}", .span.line, .span.column)]
pub struct LexError {
    /// Error category.
    pub kind: LexErrorKind,
    /// Human-readable message.
    pub message: String,
    /// Offending range; `line` and `column` locate its first byte.
    pub span: Span,
}

impl LexError {
    /// Creates an error.
    pub fn new(kind: LexErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }

    /// Byte offset of the error.
    #[inline]
    pub fn offset(&self) -> usize {
        self.span.start
    }

    /// Line of the error (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the error (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Renders this error against the source it came from.
    ///
    /// The diagnostic carries the category's code, a snippet of the offending
    /// line and, for some categories, a help line.
    ///
    /// ```
    /// use gqlex_lex::tokenize;
    ///
    /// let source = "{ a ..b }";
    /// let err = tokenize(source).unwrap_err();
    /// let rendered = err.to_diagnostic(source.as_bytes()).render();
    /// assert!(rendered.starts_with("error[E1002]: invalid character '.', expected '...'"));
    /// assert!(rendered.contains("  1 | { a ..b }"));
    /// ```
    pub fn to_diagnostic(&self, source: &[u8]) -> Diagnostic {
        let mut builder = DiagnosticBuilder::error(self.message.clone())
            .code(self.kind.code())
            .span(self.span);

        let text = SourceText::new(source);
        let line_number = self.span.line as usize;
        let line_start = text.line_start(line_number);
        if let (Ok(line), Some(line_start)) = (text.line_at(line_number), line_start) {
            let line_end = source[line_start..]
                .iter()
                .position(|&b| is_line_terminator(b))
                .map_or(source.len(), |len| line_start + len);
            // Multi-line spans are cut at the end of the first line.
            let start = self.span.start.clamp(line_start, line_end);
            let end = self.span.end.clamp(start, line_end);

            // Carets count characters, not bytes.
            let start_column = char_count(&source[line_start..start]) + 1;
            let end_column = start_column + char_count(&source[start..end]);
            builder = builder.snippet(SourceSnippet::new(
                line,
                line_number,
                start_column,
                end_column,
                Some(self.kind.to_string()),
            ));
        }

        if let Some(help) = self.kind.help() {
            builder = builder.help(help);
        }
        builder.build()
    }
}

fn char_count(bytes: &[u8]) -> usize {
    String::from_utf8_lossy(bytes).chars().count()
}

/// Result type for lexing operations.
pub type Result<T> = std::result::Result<T, LexError>;

/// Errors raised while loading or saving a lexer configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for a lexer configuration.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value is out of range.
    #[error("Validation error: {0}")]
    Validation(String),
}
