//! gqlex-lex - Lexical Analyzer for GraphQL-style query documents
//!
//! This crate turns the bytes of a query or schema document into a stream of
//! positioned tokens for a parser to consume. It decodes UTF-8 itself,
//! resolves string escapes, strips block-string indentation, validates
//! numeric literals, and tracks line and column for every token and error.
//!
//! # Example Usage
//!
//! ```
//! use gqlex_lex::{Lexer, TokenKind};
//!
//! let source = "query Hero($episode: Episode = JEDI) { hero(episode: $episode) { name } }";
//! let mut lexer = Lexer::new(source);
//!
//! // Step through tokens one at a time
//! assert_eq!(lexer.advance().unwrap().value, "query");
//! assert_eq!(lexer.advance().unwrap().value, "Hero");
//! assert_eq!(lexer.advance().unwrap().kind, TokenKind::ParenOpen);
//!
//! // Or collect a whole document
//! let tokens = gqlex_lex::tokenize(source).unwrap();
//! assert_eq!(tokens.first().unwrap().kind, TokenKind::StartOfFile);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfFile);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Byte cursor and line tracking
//! - [`unicode`] - UTF-8 decoding and character classes
//! - [`error`] - Lexical and configuration errors
//! - [`config`] - Lexer options and their TOML form
//!
//! # Token Categories
//!
//! ## Punctuators
//!
//! `!` `$` `(` `)` `...` `:` `=` `@` `[` `]` `{` `|` `}`
//!
//! ## Names
//!
//! `[_A-Za-z][_0-9A-Za-z]*`. Keywords such as `query` or `true` are plain
//! names; the parser gives them meaning.
//!
//! ## Literals
//!
//! - **Int**: `0`, `-12`
//! - **Float**: `1.5`, `-0.25e3`, `6E-2`
//! - **String**: `"hello\n\u263A"`
//! - **BlockString**: `"""` multi-line text `"""`
//!
//! ## Ignored
//!
//! Spaces, tabs, line terminators, commas, the byte-order mark and `#`
//! comments. Comments can be kept as tokens with
//! [`LexerConfig::preserve_comments`].
//!
//! ## Special
//!
//! - **`<SOF>`**: the token a lexer starts on
//! - **`<EOF>`**: end of input, returned again on every later advance

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{ConfigError, LexError, LexErrorKind, Result};
pub use lexer::{dedent_block_string, Lexer};
pub use token::{Token, TokenKind};

/// Lexes a whole document with the default configuration.
///
/// The result starts with `<SOF>` and ends with `<EOF>`, or is the first
/// lexical error.
pub fn tokenize<S>(source: &S) -> Result<Vec<Token>>
where
    S: AsRef<[u8]> + ?Sized,
{
    Lexer::new(source).collect()
}

/// Lexes a whole document with the given configuration.
///
/// ```
/// use gqlex_lex::{tokenize_with, LexerConfig, TokenKind};
///
/// let config = LexerConfig::preserving_comments();
/// let tokens = tokenize_with("# hi\n{ a }", &config).unwrap();
/// assert_eq!(tokens[1].kind, TokenKind::Comment);
/// assert_eq!(tokens[1].value, "hi");
/// ```
pub fn tokenize_with<S>(source: &S, config: &LexerConfig) -> Result<Vec<Token>>
where
    S: AsRef<[u8]> + ?Sized,
{
    Lexer::with_config(source, config.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to describe every token of a document.
    fn lex_all(source: &str) -> Vec<String> {
        tokenize(source)
            .unwrap()
            .iter()
            .map(|t| t.describe())
            .collect()
    }

    #[test]
    fn test_query_document() {
        let source = r#"
            query HeroNameAndFriends($episode: Episode = JEDI, $withFriends: Boolean!) {
              hero(episode: $episode) {
                name
                friends @include(if: $withFriends) { name }
              }
            }
        "#;
        let tokens = lex_all(source);

        assert_eq!(tokens[0], "<SOF>");
        assert_eq!(tokens[1], "Name \"query\"");
        assert_eq!(tokens[2], "Name \"HeroNameAndFriends\"");
        assert!(tokens.contains(&"$".to_string()));
        assert!(tokens.contains(&"!".to_string()));
        assert!(tokens.contains(&"@".to_string()));
        assert!(tokens.contains(&"Name \"withFriends\"".to_string()));
        assert_eq!(tokens.last().unwrap(), "<EOF>");
    }

    #[test]
    fn test_fragment_spread_and_inline_fragment() {
        let tokens = lex_all("{ ...HeroFields ... on Droid { primaryFunction } }");
        assert_eq!(
            tokens,
            vec![
                "<SOF>",
                "{",
                "...",
                "Name \"HeroFields\"",
                "...",
                "Name \"on\"",
                "Name \"Droid\"",
                "{",
                "Name \"primaryFunction\"",
                "}",
                "}",
                "<EOF>",
            ]
        );
    }

    #[test]
    fn test_schema_document() {
        let source = r#"
            """
            A character in the saga.
            """
            union SearchResult = Human | Droid | Starship

            type Query {
              search(text: String = "r2", first: Int = 10, ratio: Float = 0.5): [SearchResult!]!
            }
        "#;
        let tokens = tokenize(source).unwrap();

        assert_eq!(tokens[1].kind, TokenKind::BlockString);
        assert_eq!(tokens[1].value, "A character in the saga.");
        assert_eq!(tokens[1].span.line, 2);
        assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Pipe).count(),
            2
        );
        let literals: Vec<_> = tokens
            .iter()
            .filter(|t| {
                matches!(
                    t.kind,
                    TokenKind::String | TokenKind::Int | TokenKind::Float
                )
            })
            .map(|t| (t.kind, t.value.as_str()))
            .collect();
        assert_eq!(
            literals,
            vec![
                (TokenKind::String, "r2"),
                (TokenKind::Int, "10"),
                (TokenKind::Float, "0.5"),
            ]
        );
    }

    #[test]
    fn test_offsets_are_monotonic() {
        let tokens = tokenize("{ a(b: [1, 2.5, \"s\"]) @d ...F }").unwrap();
        for pair in tokens.windows(2) {
            assert!(pair[0].span.end <= pair[1].span.start, "{pair:?}");
        }
    }

    #[test]
    fn test_tokenize_stops_at_error() {
        let err = tokenize("{ a } ~").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidCharacter);
        assert_eq!(err.offset(), 6);
    }

    #[test]
    fn test_tokenize_with_limit() {
        let config = LexerConfig::default().with_max_token_length(3).unwrap();
        assert!(tokenize_with("abc", &config).is_ok());
        assert_eq!(
            tokenize_with("\"abc\"", &config).unwrap_err().kind,
            LexErrorKind::TokenTooLong
        );
    }

    #[test]
    fn test_empty_document() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::StartOfFile);
        assert_eq!(tokens[1].kind, TokenKind::EndOfFile);
        assert_eq!(tokens[1].span, gqlex_util::Span::new(0, 0, 1, 1));
    }
}
