//! Edge case tests for gqlex-lex
