//! gqlex-util - Foundation types for the gqlex front end
//!
//! This crate holds the pieces every front-end stage shares: source
//! locations ([`Span`]), line lookup over a raw source buffer
//! ([`SourceText`]), and the diagnostic types used to turn a positioned
//! error into a human-readable report.
//!
//! # Example
//!
//! ```
//! use gqlex_util::{DiagnosticBuilder, SourceSnippet, SourceText, Span};
//!
//! let source = SourceText::new(b"{ hero ? }");
//! let line = source.line_at(1).unwrap();
//!
//! let diag = DiagnosticBuilder::error("invalid character '?' (U+003F)")
//!     .span(Span::new(7, 8, 1, 8))
//!     .snippet(SourceSnippet::new(line, 1, 8, 9, Some("here")))
//!     .build();
//!
//! assert!(diag.render().contains("^ here"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Level, SourceSnippet};
pub use error::{SourceError, SourceResult};
pub use span::{SourceText, Span};
