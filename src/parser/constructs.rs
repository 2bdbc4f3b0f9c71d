use crate::{
    ast::ast::{NodeKind, TreeNode},
    errors::errors::Error,
};

use super::parser::TreeBuilder;

/// `int x ;` / `float y = 2.5`
///
/// The token after the identifier must exist, since it is checked for `=`.
/// Leaves the cursor one past the last token it used.
pub fn parse_declaration(builder: &mut TreeBuilder) -> Result<TreeNode, Error> {
    let keyword = builder.current_token();
    let mut declaration = TreeNode::new(NodeKind::Declaration, None);
    declaration.push(TreeNode::leaf(NodeKind::Type, keyword));

    builder.advance_n(1);
    let identifier = builder.expect_at(builder.pos(), keyword)?;
    declaration.push(TreeNode::leaf(NodeKind::Identifier, identifier));

    if builder.expect_at(builder.pos() + 1, keyword)? == "=" {
        builder.advance_n(2);
        let value = builder.expect_at(builder.pos(), keyword)?;
        declaration.push(TreeNode::leaf(NodeKind::Value, value));
    }

    builder.advance_n(1);

    Ok(declaration)
}

/// `if ( a op b ...`
///
/// The token after `if` is assumed to be the opening parenthesis and is never
/// inspected. The condition is the next three tokens joined by spaces and the
/// body is a placeholder. Leaves the cursor on the last condition token.
pub fn parse_if(builder: &mut TreeBuilder) -> Result<TreeNode, Error> {
    let start = builder.pos();
    let keyword = builder.current_token();

    let condition = (start + 2..=start + 4)
        .map(|index| builder.expect_at(index, keyword))
        .collect::<Result<Vec<_>, _>>()?
        .join(" ");

    let mut node = TreeNode::new(NodeKind::If, None);
    node.push(TreeNode::leaf(NodeKind::Condition, condition));
    node.push(TreeNode::body());

    builder.advance_n(4);

    Ok(node)
}

pub fn parse_else(_builder: &mut TreeBuilder) -> Result<TreeNode, Error> {
    let mut node = TreeNode::new(NodeKind::Else, None);
    node.push(TreeNode::body());

    Ok(node)
}
