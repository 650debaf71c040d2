//! Block string lexing.
//!
//! Block strings are delimited by `"""`, may span lines, and recognise a
//! single escape, `\"""`. Their value has the common indentation removed
//! (see [`dedent_block_string`]).

use crate::error::{LexErrorKind, Result};
use crate::token::{Token, TokenKind};
use crate::unicode::{describe_char, is_forbidden_control, Codepoint};
use crate::Lexer;

const DELIMITER: &[u8] = b"\"\"\"";
const ESCAPED_DELIMITER: &[u8] = b"\\\"\"\"";

impl<'a> Lexer<'a> {
    /// Lexes a block string starting at the opening `"""`.
    ///
    /// Line terminators inside the string move the line tracker, so tokens
    /// after it carry correct positions.
    pub(crate) fn lex_block_string(&mut self) -> Result<Token> {
        self.cursor.advance_bytes(DELIMITER.len());

        let mut raw = String::new();

        loop {
            if self.cursor.starts_with(DELIMITER) {
                self.cursor.advance_bytes(DELIMITER.len());
                return Ok(self.make_token(TokenKind::BlockString, dedent_block_string(&raw)));
            }
            if self.cursor.starts_with(ESCAPED_DELIMITER) {
                raw.push_str("\"\"\"");
                self.cursor.advance_bytes(ESCAPED_DELIMITER.len());
                continue;
            }

            match self.cursor.current() {
                Codepoint::Char('\n', _) => {
                    raw.push('\n');
                    self.cursor.consume_line_terminator();
                },
                Codepoint::Char('\r', _) => {
                    let start = self.cursor.position();
                    self.cursor.consume_line_terminator();
                    raw.push_str(if self.cursor.position() - start == 2 { "\r\n" } else { "\r" });
                },
                Codepoint::Char(c, width) if is_forbidden_control(c) => {
                    let start = self.cursor.position();
                    return Err(self.error_at(
                        LexErrorKind::InvalidCharacter,
                        start,
                        start + width,
                        format!("invalid character within block string {}", describe_char(c)),
                    ));
                },
                Codepoint::Char(c, width) => {
                    raw.push(c);
                    self.cursor.advance_bytes(width);
                },
                Codepoint::Invalid(_) => return Err(self.invalid_character()),
                Codepoint::Eof => {
                    let offset = self.cursor.position();
                    return Err(self.error_at(
                        LexErrorKind::UnterminatedBlockString,
                        offset,
                        offset,
                        "unterminated block string",
                    ));
                },
            }
        }
    }
}

/// Produces the value of a block string from its raw contents.
///
/// 1. Split into lines on `\r\n`, `\n` and `\r`.
/// 2. Find the smallest run of leading spaces/tabs among the lines after the
///    first that contain anything else.
/// 3. Remove that many leading characters from every line but the first.
/// 4. Drop leading and trailing lines that are blank.
/// 5. Join with `\n`.
///
/// # Example
///
/// ```
/// use gqlex_lex::dedent_block_string;
///
/// let raw = "\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  ";
/// assert_eq!(dedent_block_string(raw), "Hello,\n  World!\n\nYours,\n  GraphQL.");
/// ```
pub fn dedent_block_string(raw: &str) -> String {
    let lines = split_lines(raw);

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace(line))
        .min();

    let dedented: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, &line)| match common_indent {
            // Indentation is ASCII, so any cut within it is a char boundary.
            Some(indent) if i > 0 => &line[indent.min(leading_whitespace(line))..],
            _ => line,
        })
        .collect();

    let first = dedented.iter().position(|line| !is_blank(line));
    let last = dedented.iter().rposition(|line| !is_blank(line));
    match (first, last) {
        (Some(first), Some(last)) => dedented[first..=last].join("\n"),
        _ => String::new(),
    }
}

/// Splits on `\r\n`, `\n` and a lone `\r`.
fn split_lines(raw: &str) -> Vec<&str> {
    let bytes = raw.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&raw[start..i]);
                start = i + 1;
            },
            b'\r' => {
                lines.push(&raw[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            },
            _ => {},
        }
        i += 1;
    }
    lines.push(&raw[start..]);
    lines
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ' || b == b'\t').count()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace(line) == line.len()
}
