//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, token dispatch and the public stepping API
//! - `ignored` - Whitespace, commas, BOM and comment handling
//! - `name` - Name lexing
//! - `number` - Int and Float literal lexing
//! - `string` - Quoted string lexing and escape decoding
//! - `block_string` - Block string lexing and indentation stripping

mod block_string;
mod core;
mod ignored;
mod name;
mod number;
mod string;

pub use block_string::dedent_block_string;
pub use core::Lexer;
