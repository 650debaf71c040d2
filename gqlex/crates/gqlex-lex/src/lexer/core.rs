//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the token dispatch, and the
//! stepping API the parser drives.

use gqlex_util::Span;
use tracing::{debug, trace};

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, Result};
use crate::token::{Token, TokenKind};
use crate::unicode::{describe_char, describe_codepoint, is_name_start, Codepoint};

/// Lexer for GraphQL-style documents.
///
/// The lexer is a pull-based cursor over a borrowed source buffer. It starts
/// positioned on a `<SOF>` token and moves one token forward on every call to
/// [`advance`](Lexer::advance). Whitespace, commas, the byte-order mark and
/// (unless [`LexerConfig::preserve_comments`] is set) comments are skipped
/// between tokens.
///
/// # Example
///
/// ```
/// use gqlex_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("{ hero }");
/// assert_eq!(lexer.token().kind, TokenKind::StartOfFile);
///
/// assert_eq!(lexer.advance().unwrap().kind, TokenKind::BraceOpen);
/// let name = lexer.advance().unwrap();
/// assert_eq!(name.value, "hero");
/// assert_eq!(lexer.last_token().kind, TokenKind::BraceOpen);
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Scanning options.
    pub(crate) config: LexerConfig,

    /// The most recently produced token.
    token: Token,

    /// The token before `token`.
    last_token: Token,

    /// Set once a lexical error occurs; every later call returns it.
    halted: Option<LexError>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Whether the iterator has handed out `<SOF>` yet.
    yielded_start: bool,

    /// Whether the iterator has handed out `<EOF>` or an error.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default configuration.
    ///
    /// Accepts anything that views as bytes: `&str`, `&[u8]`, `&String`,
    /// `&Vec<u8>`.
    pub fn new<S>(source: &'a S) -> Self
    where
        S: AsRef<[u8]> + ?Sized,
    {
        Self::with_config(source, LexerConfig::default())
    }

    /// Creates a lexer with the given configuration.
    pub fn with_config<S>(source: &'a S, config: LexerConfig) -> Self
    where
        S: AsRef<[u8]> + ?Sized,
    {
        let start = Token::start_of_file();
        Self {
            cursor: Cursor::new(source.as_ref()),
            config,
            token: start.clone(),
            last_token: start,
            halted: None,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            yielded_start: false,
            finished: false,
        }
    }

    /// The source buffer being lexed.
    pub fn source(&self) -> &'a [u8] {
        self.cursor.source()
    }

    /// The configuration this lexer was built with.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// The current token: `<SOF>` before the first advance, then whatever
    /// [`advance`](Lexer::advance) last returned.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The token before the current one.
    ///
    /// Equal to the current token while still on `<SOF>`.
    pub fn last_token(&self) -> &Token {
        &self.last_token
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Byte offset where the current line starts.
    pub fn line_start(&self) -> usize {
        self.cursor.line_start()
    }

    /// Current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// The error that halted this lexer, if any.
    pub fn error(&self) -> Option<&LexError> {
        self.halted.as_ref()
    }

    /// Returns true once `<EOF>` has been produced.
    pub fn is_at_end(&self) -> bool {
        self.token.kind == TokenKind::EndOfFile
    }

    /// Moves to the next token and returns it.
    ///
    /// Once `<EOF>` is reached every further call returns the same `<EOF>`
    /// token. After an error the lexer is halted: the cursor stays where the
    /// error was found and every further call returns the same error.
    pub fn advance(&mut self) -> Result<Token> {
        if let Some(err) = &self.halted {
            return Err(err.clone());
        }
        if self.is_at_end() {
            return Ok(self.token.clone());
        }

        match self.read_token() {
            Ok(token) => {
                trace!(
                    kind = %token.kind,
                    start = token.span.start,
                    end = token.span.end,
                    line = token.span.line,
                    column = token.span.column,
                    "token"
                );
                self.last_token = std::mem::replace(&mut self.token, token.clone());
                Ok(token)
            },
            Err(err) => {
                debug!(
                    kind = ?err.kind,
                    offset = err.offset(),
                    line = err.line(),
                    column = err.column(),
                    "lexing halted: {}",
                    err.message
                );
                self.halted = Some(err.clone());
                Err(err)
            },
        }
    }

    /// Returns the token after the current one without consuming it.
    ///
    /// ```
    /// use gqlex_lex::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::new("a b");
    /// assert_eq!(lexer.lookahead().unwrap().value, "a");
    /// assert_eq!(lexer.token().kind, TokenKind::StartOfFile);
    /// assert_eq!(lexer.advance().unwrap().value, "a");
    /// ```
    pub fn lookahead(&self) -> Result<Token> {
        let mut probe = self.clone();
        probe.advance()
    }

    /// Skips ignored content and scans one token.
    fn read_token(&mut self) -> Result<Token> {
        self.skip_ignored();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let token = match self.cursor.current() {
            Codepoint::Eof => return Ok(self.make_token(TokenKind::EndOfFile, String::new())),
            Codepoint::Invalid(_) => return Err(self.invalid_character()),
            Codepoint::Char(c, _) => match c {
                '.' => self.lex_spread()?,
                '"' if self.cursor.starts_with(b"\"\"\"") => self.lex_block_string()?,
                '"' => self.lex_string()?,
                '#' => self.lex_comment(),
                c if is_name_start(c) => self.lex_name(),
                c if c.is_ascii_digit() || c == '-' => self.lex_number()?,
                c => match u8::try_from(c).ok().and_then(TokenKind::from_punctuator_byte) {
                    Some(kind) => {
                        self.cursor.advance_bytes(1);
                        self.make_token(kind, String::new())
                    },
                    None => return Err(self.invalid_character()),
                },
            },
        };

        self.check_length(token)
    }

    /// Lexes `...`.
    fn lex_spread(&mut self) -> Result<Token> {
        if self.cursor.starts_with(b"...") {
            self.cursor.advance_bytes(3);
            return Ok(self.make_token(TokenKind::Spread, String::new()));
        }
        Err(LexError::new(
            LexErrorKind::InvalidSpread,
            "invalid character '.', expected '...'",
            Span::new(
                self.token_start,
                self.token_start + 1,
                self.token_start_line,
                self.token_start_column,
            ),
        ))
    }

    /// Enforces [`LexerConfig::max_token_length`].
    fn check_length(&self, token: Token) -> Result<Token> {
        match self.config.max_token_length {
            Some(max) if token.span.len() > max.get() => Err(LexError::new(
                LexErrorKind::TokenTooLong,
                format!(
                    "{} token of {} bytes exceeds the limit of {} bytes",
                    token.kind,
                    token.span.len(),
                    max
                ),
                token.span,
            )),
            _ => Ok(token),
        }
    }

    /// Builds a token from the recorded start to the current position.
    pub(crate) fn make_token(&self, kind: TokenKind, value: String) -> Token {
        Token::new(
            kind,
            Span::new(
                self.token_start,
                self.cursor.position(),
                self.token_start_line,
                self.token_start_column,
            ),
            value,
        )
    }

    /// Builds an error covering `start..end`, both on the current line.
    pub(crate) fn error_at(
        &self,
        kind: LexErrorKind,
        start: usize,
        end: usize,
        message: impl Into<String>,
    ) -> LexError {
        LexError::new(
            kind,
            message,
            Span::new(start, end, self.cursor.line(), self.cursor.column_at(start)),
        )
    }

    /// Builds an `InvalidCharacter` error for the codepoint under the cursor.
    pub(crate) fn invalid_character(&self) -> LexError {
        let start = self.cursor.position();
        let (end, message) = match self.cursor.current() {
            Codepoint::Char(c, width) => {
                (start + width, format!("invalid character {}", describe_char(c)))
            },
            other => (start + 1, format!("invalid character: {}", describe_codepoint(other))),
        };
        self.error_at(LexErrorKind::InvalidCharacter, start, end, message)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    /// Yields `<SOF>`, every token, then `<EOF>`, and stops. An error is
    /// yielded once and ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if !self.yielded_start {
            self.yielded_start = true;
            if self.token.kind == TokenKind::StartOfFile && self.halted.is_none() {
                return Some(Ok(self.token.clone()));
            }
        }

        let item = self.advance();
        match &item {
            Ok(token) if token.kind == TokenKind::EndOfFile => self.finished = true,
            Err(_) => self.finished = true,
            Ok(_) => {},
        }
        Some(item)
    }
}
