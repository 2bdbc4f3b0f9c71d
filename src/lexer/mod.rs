//! Lexical analysis module.
//!
//! This module contains the scanner that splits source text into category
//! buckets. It handles:
//!
//! - A fixed, priority-ordered table of regex rules (first match wins)
//! - Keywords, identifiers, numbers, operators and delimiters
//! - Whitespace, which is consumed but never recorded
//! - Unknown characters, which are recorded and flagged but never fatal

pub mod lexer;
pub mod tokens;
