//! Lexical analysis for the templating language.
//!
//! Converts source text into a flat stream of tokens for a parser. It handles:
//!
//! - Single-character punctuation and operators
//! - Identifiers and reserved words
//! - `#`, `//` and `/* */` comments and whitespace elision
//! - Line/column tracking for diagnostics

pub mod lexer;
pub mod tokens;
