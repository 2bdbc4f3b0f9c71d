//! Tree builder for the flattened token sequence.
//!
//! Building runs in two phases. Validation checks the leading token and the
//! bracket balance and reports every violation at once. Construction then
//! walks the tokens once with a cursor, dispatching on the literal through a
//! lookup table:
//!
//! - `int` / `float` produce a DECLARATION
//! - `if` produces an IF with a three-token CONDITION
//! - `else` produces an ELSE
//! - anything else is skipped
//!
//! After every step the cursor moves one extra position, so the token right
//! after a declaration is never looked at.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::{
    ast::ast::TreeNode,
    errors::errors::{Error, ErrorImpl, ValidationIssue},
    Position,
};

use super::{
    lookups::{create_construct_lookups, ConstructHandler, ConstructLookup},
    validate::check,
};

/// Cursor state for the construction pass.
pub struct TreeBuilder<'a> {
    /// The literals being walked
    tokens: &'a [&'a str],
    /// Current position in the token sequence
    pos: usize,
    /// Lookup table for construct handlers, keyed by literal
    construct_lookup: ConstructLookup,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(tokens: &'a [&'a str]) -> Self {
        TreeBuilder {
            tokens,
            pos: 0,
            construct_lookup: HashMap::new(),
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the token under the cursor.
    ///
    /// Only called while [`TreeBuilder::has_tokens`] holds.
    pub fn current_token(&self) -> &'a str {
        self.tokens[self.pos]
    }

    pub fn peek_at(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    /// Looks up a token a construct cannot do without.
    ///
    /// # Returns
    ///
    /// The token at `index`, or a `MalformedConstruct` error naming
    /// `construct` when the sequence ends first.
    pub fn expect_at(&self, index: usize, construct: &str) -> Result<&'a str, Error> {
        self.peek_at(index).ok_or_else(|| {
            Error::new(
                ErrorImpl::MalformedConstruct {
                    construct: String::from(construct),
                    index,
                },
                self.get_position(),
            )
        })
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    pub fn get_construct_lookup(&self) -> &ConstructLookup {
        &self.construct_lookup
    }

    /// Registers the handler run when the cursor sits on `literal`.
    pub fn construct(&mut self, literal: &'static str, construct_fn: ConstructHandler) {
        self.construct_lookup.insert(literal, construct_fn);
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32)
    }
}

/// Runs the structural checks on a token sequence.
pub fn validate<S: AsRef<str>>(tokens: &[S]) -> Vec<ValidationIssue> {
    let tokens = tokens.iter().map(AsRef::as_ref).collect::<Vec<&str>>();
    check(&tokens)
}

/// Builds the tree for a flattened token sequence.
///
/// # Returns
///
/// The `PROGRAM` root, a `ValidationFailed` error carrying every violated
/// check, or a `MalformedConstruct` error when a construct runs off the end
/// of the sequence.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn build<S: AsRef<str>>(tokens: &[S]) -> Result<TreeNode, Error> {
    let tokens = tokens.iter().map(AsRef::as_ref).collect::<Vec<&str>>();

    let issues = check(&tokens);
    if !issues.is_empty() {
        for issue in &issues {
            warn!(%issue, "validation failed");
        }

        return Err(Error::new(
            ErrorImpl::ValidationFailed { issues },
            Position::null(),
        ));
    }
    debug!("validation passed");

    let mut builder = TreeBuilder::new(&tokens);
    create_construct_lookups(&mut builder);

    let mut root = TreeNode::program();

    while builder.has_tokens() {
        let handler = builder
            .get_construct_lookup()
            .get(builder.current_token())
            .copied();

        if let Some(handler) = handler {
            trace!(pos = builder.pos(), token = builder.current_token(), "construct");
            root.push(handler(&mut builder)?);
        }

        builder.advance_n(1);
    }

    debug!(constructs = root.children.len(), "tree built");

    Ok(root)
}
