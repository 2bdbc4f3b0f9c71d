//! Syntax tree built from the flattened token sequence.
//!
//! The tree is deliberately shallow: a `PROGRAM` root whose children are
//! declarations, `if` and `else` nodes, each with leaf children only.

pub mod ast;

#[cfg(test)]
mod tests;
