use std::collections::HashMap;

use crate::{ast::ast::TreeNode, errors::errors::Error};

use super::{constructs::*, parser::TreeBuilder};

pub type ConstructHandler = fn(&mut TreeBuilder<'_>) -> Result<TreeNode, Error>;

pub fn create_construct_lookups(builder: &mut TreeBuilder) {
    // Declarations
    builder.construct("int", parse_declaration);
    builder.construct("float", parse_declaration);

    // Control flow
    builder.construct("if", parse_if);
    builder.construct("else", parse_else);
}

// Lookup table inside builder struct, so it's easier
pub type ConstructLookup = HashMap<&'static str, ConstructHandler>;
