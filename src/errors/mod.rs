//! Error types for lexical analysis.
//!
//! - Error structures carrying the source position of the failure
//! - The `ErrorImpl` taxonomy of lexical errors
//! - Suggestions shown alongside rendered diagnostics

pub mod errors;
