//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating and formatting front-end
//! diagnostics: errors with a source snippet and help messages.
//!
//! # Examples
//!
//! ```
//! use gqlex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
//! use gqlex_util::Span;
//!
//! let diag = DiagnosticBuilder::error("unterminated string")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .help("close the string with '\"'")
//!     .build();
//!
//! assert!(diag.render().starts_with("error[E1003]: unterminated string"));
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use gqlex_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Help), "help");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops processing
    Error,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Render the diagnostic as multi-line text.
    ///
    /// The layout is:
    ///
    /// ```text
    /// error[E1001]: invalid character '?' (U+003F)
    ///  --> 1:8
    ///   1 | { hero ? }
    ///     |        ^ here
    ///  = help: ...
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self.code {
            Some(code) => out.push_str(&format!("{}[{}]: {}\n", self.level, code, self.message)),
            None => out.push_str(&format!("{}: {}\n", self.level, self.message)),
        }
        out.push_str(&format!(" --> {}\n", self.span));

        for snippet in &self.snippets {
            out.push_str(&snippet.format());
            out.push('\n');
        }
        for help in &self.helps {
            out.push_str(&format!(" = {}: {}\n", Level::Help, help));
        }

        out.truncate(out.trim_end().len());
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(Level::Help.to_string(), "help");
    }

    #[test]
    fn test_render_header_without_code() {
        let diag = DiagnosticBuilder::error("odd spacing")
            .span(Span::new(0, 1, 3, 7))
            .build();
        assert_eq!(diag.render(), "error: odd spacing\n --> 3:7");
    }

    #[test]
    fn test_render_full() {
        let diag = DiagnosticBuilder::error("invalid number")
            .span(Span::new(2, 4, 1, 3))
            .code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
            .snippet(SourceSnippet::new("{ 01 }", 1, 3, 5, Some("here")))
            .help("write `1`")
            .build();

        let rendered = diag.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "error[E1004]: invalid number");
        assert_eq!(lines[1], " --> 1:3");
        assert_eq!(lines[2], "  1 | { 01 }");
        assert_eq!(lines[3], "    |   ^^ here");
        assert_eq!(lines[4], " = help: write `1`");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_display_matches_render() {
        let diag = DiagnosticBuilder::error("boom")
            .span(Span::new(0, 0, 1, 1))
            .build();
        assert_eq!(diag.to_string(), diag.render());
    }
}
