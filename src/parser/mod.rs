//! Parser module for building the syntax tree.
//!
//! This module turns a flattened sequence of token literals into a shallow
//! tree. It handles:
//!
//! - Structural validation (leading token, bracket balance)
//! - Declarations, `if` and `else` constructs
//! - Construction failures when a construct runs out of tokens

pub mod constructs;
pub mod lookups;
pub mod parser;
pub mod validate;
