//! Error types for the tree builder.
//!
//! This module defines:
//!
//! - Error structures with a token position
//! - Validation issues found before construction starts
//! - Construction failures for constructs cut short by the end of input
//! - Error names and tips for display
//!
//! Unknown characters found while scanning are not errors; they are reported
//! through the scan result instead.

pub mod errors;

#[cfg(test)]
mod tests;
