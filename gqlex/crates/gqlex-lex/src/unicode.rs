//! Unicode utilities for the gqlex lexer.
//!
//! This module decodes codepoints straight from the raw source bytes and
//! classifies them for the scanners. Decoding never panics: a malformed
//! sequence is reported as [`Codepoint::Invalid`] so the scanner can turn it
//! into an "invalid character" error instead of treating it as end of input.

/// Byte-order mark, ignored anywhere between tokens.
pub const BOM: char = '\u{FEFF}';

/// The result of decoding the source at a byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Codepoint {
    /// A decoded character and its width in bytes.
    Char(char, usize),
    /// The offset is at or past the end of the buffer.
    Eof,
    /// The bytes at the offset are not valid UTF-8. Carries the first byte.
    Invalid(u8),
}

/// Decodes the codepoint starting at `offset`.
///
/// # Example
///
/// ```
/// use gqlex_lex::unicode::{decode_at, Codepoint};
///
/// let source = "aé".as_bytes();
/// assert_eq!(decode_at(source, 0), Codepoint::Char('a', 1));
/// assert_eq!(decode_at(source, 1), Codepoint::Char('é', 2));
/// assert_eq!(decode_at(source, 3), Codepoint::Eof);
/// assert_eq!(decode_at(b"\xff", 0), Codepoint::Invalid(0xFF));
/// ```
pub fn decode_at(source: &[u8], offset: usize) -> Codepoint {
    let Some(&lead) = source.get(offset) else {
        return Codepoint::Eof;
    };

    // Fast path for ASCII (most common case)
    if lead < 0x80 {
        return Codepoint::Char(lead as char, 1);
    }

    let width = utf8_width(lead);
    if width == 0 || offset + width > source.len() {
        return Codepoint::Invalid(lead);
    }

    // from_utf8 rejects overlong forms, surrogates and bad continuation bytes.
    match std::str::from_utf8(&source[offset..offset + width]) {
        Ok(s) => s
            .chars()
            .next()
            .map_or(Codepoint::Invalid(lead), |c| Codepoint::Char(c, width)),
        Err(_) => Codepoint::Invalid(lead),
    }
}

/// Width of a UTF-8 sequence from its lead byte, or 0 if the byte can't lead.
#[inline]
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Checks if a character can start a name: `[A-Za-z_]`.
///
/// ```
/// use gqlex_lex::unicode::is_name_start;
///
/// assert!(is_name_start('_'));
/// assert!(is_name_start('Q'));
/// assert!(!is_name_start('1'));
/// assert!(!is_name_start('é'));
/// ```
#[inline]
pub fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue a name: `[A-Za-z0-9_]`.
#[inline]
pub fn is_name_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Byte version of [`is_name_continue`].
#[inline]
pub fn is_name_continue_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Control characters that may not appear raw in a document.
///
/// Tab, line feed and carriage return are the only permitted controls below
/// U+0020.
#[inline]
pub fn is_forbidden_control(c: char) -> bool {
    c < ' ' && c != '\t' && c != '\n' && c != '\r'
}

/// Converts a hex digit byte to its value.
///
/// ```
/// use gqlex_lex::unicode::hex_digit_to_value;
///
/// assert_eq!(hex_digit_to_value(b'7'), Some(7));
/// assert_eq!(hex_digit_to_value(b'b'), Some(11));
/// assert_eq!(hex_digit_to_value(b'F'), Some(15));
/// assert_eq!(hex_digit_to_value(b'g'), None);
/// ```
#[inline]
pub fn hex_digit_to_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'a'..=b'f' => Some(u32::from(b - b'a' + 10)),
        b'A'..=b'F' => Some(u32::from(b - b'A' + 10)),
        _ => None,
    }
}

/// Parses exactly four hex digits at the start of `bytes`.
///
/// ```
/// use gqlex_lex::unicode::parse_hex4;
///
/// assert_eq!(parse_hex4(b"00e9"), Some(0xE9));
/// assert_eq!(parse_hex4(b"D83D\\u"), Some(0xD83D));
/// assert_eq!(parse_hex4(b"12"), None);
/// assert_eq!(parse_hex4(b"12x4"), None);
/// ```
pub fn parse_hex4(bytes: &[u8]) -> Option<u32> {
    let digits = bytes.get(..4)?;
    digits
        .iter()
        .try_fold(0u32, |acc, &b| Some(acc << 4 | hex_digit_to_value(b)?))
}

/// Returns true for a UTF-16 leading (high) surrogate.
#[inline]
pub fn is_leading_surrogate(value: u32) -> bool {
    (0xD800..=0xDBFF).contains(&value)
}

/// Returns true for a UTF-16 trailing (low) surrogate.
#[inline]
pub fn is_trailing_surrogate(value: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&value)
}

/// Combines a surrogate pair into a supplementary-plane character.
///
/// ```
/// use gqlex_lex::unicode::combine_surrogates;
///
/// assert_eq!(combine_surrogates(0xD83D, 0xDE00), Some('😀'));
/// assert_eq!(combine_surrogates(0x0041, 0xDE00), None);
/// ```
pub fn combine_surrogates(lead: u32, trail: u32) -> Option<char> {
    if !is_leading_surrogate(lead) || !is_trailing_surrogate(trail) {
        return None;
    }
    char::from_u32(0x10000 + ((lead - 0xD800) << 10) + (trail - 0xDC00))
}

/// Describes a codepoint for error messages.
///
/// Printable characters are quoted and followed by their code, everything
/// else is shown as the bare `U+XXXX` code.
///
/// ```
/// use gqlex_lex::unicode::describe_char;
///
/// assert_eq!(describe_char('?'), "'?' (U+003F)");
/// assert_eq!(describe_char('\u{0}'), "U+0000");
/// ```
pub fn describe_char(c: char) -> String {
    if c.is_control() || (c.is_whitespace() && c != ' ') || c == BOM {
        format!("U+{:04X}", c as u32)
    } else {
        format!("'{}' (U+{:04X})", c, c as u32)
    }
}

/// Describes a decoded codepoint, including end of input and bad encodings.
pub fn describe_codepoint(codepoint: Codepoint) -> String {
    match codepoint {
        Codepoint::Char(c, _) => describe_char(c),
        Codepoint::Eof => "<EOF>".to_string(),
        Codepoint::Invalid(byte) => format!("malformed UTF-8 byte 0x{:02X}", byte),
    }
}
