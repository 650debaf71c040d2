//! Diagnostic codes for categorizing front-end errors.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so a report can be looked up in documentation.
//!
//! # Examples
//!
//! ```
//! use gqlex_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_INVALID_CHARACTER;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is typically "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Lexer - Invalid or unexpected character
    pub const E_LEXER_INVALID_CHARACTER: Self = Self::new("E", 1001);
    /// E1002: Lexer - `.` not followed by `..`
    pub const E_LEXER_INVALID_SPREAD: Self = Self::new("E", 1002);
    /// E1003: Lexer - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1003);
    /// E1004: Lexer - Invalid numeric literal
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1004);
    /// E1005: Lexer - Invalid escape sequence
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 1005);
    /// E1006: Lexer - Invalid `\u` escape sequence
    pub const E_LEXER_INVALID_UNICODE_ESCAPE: Self = Self::new("E", 1006);
    /// E1007: Lexer - Unterminated block string
    pub const E_LEXER_UNTERMINATED_BLOCK_STRING: Self = Self::new("E", 1007);
    /// E1008: Lexer - Token longer than the configured limit
    pub const E_LEXER_TOKEN_TOO_LONG: Self = Self::new("E", 1008);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_pads() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("W", 12).as_str(), "W0012");
        assert_eq!(DiagnosticCode::new("E", 1001).as_str(), "E1001");
    }

    #[test]
    fn test_display_and_debug() {
        let code = DiagnosticCode::E_LEXER_INVALID_SPREAD;
        assert_eq!(format!("{}", code), "E1002");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E1002)");
    }

    #[test]
    fn test_lexer_codes_are_distinct() {
        let codes = [
            DiagnosticCode::E_LEXER_INVALID_CHARACTER,
            DiagnosticCode::E_LEXER_INVALID_SPREAD,
            DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            DiagnosticCode::E_LEXER_INVALID_NUMBER,
            DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            DiagnosticCode::E_LEXER_INVALID_UNICODE_ESCAPE,
            DiagnosticCode::E_LEXER_UNTERMINATED_BLOCK_STRING,
            DiagnosticCode::E_LEXER_TOKEN_TOO_LONG,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
