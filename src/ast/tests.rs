//! Unit tests for tree nodes and the outline printer.

use super::ast::{NodeKind, TreeNode, BODY_PLACEHOLDER};

#[test]
fn test_render_root_only() {
    let root = TreeNode::program();

    assert_eq!(root.render(), "ROOT -> PROGRAM: \n");
}

#[test]
fn test_render_nested() {
    let mut declaration = TreeNode::new(NodeKind::Declaration, None);
    declaration.push(TreeNode::leaf(NodeKind::Type, "int"));
    declaration.push(TreeNode::leaf(NodeKind::Identifier, "x"));

    let mut root = TreeNode::program();
    root.push(declaration);
    root.push(TreeNode::new(NodeKind::Else, None));

    assert_eq!(
        root.render(),
        "ROOT -> PROGRAM: \n  CHILD -> DECLARATION: \n    CHILD -> TYPE: int\n    CHILD -> IDENTIFIER: x\n  CHILD -> ELSE: \n"
    );
    assert_eq!(root.to_string(), root.render());
}

#[test]
fn test_body_placeholder() {
    let body = TreeNode::body();

    assert_eq!(body.kind, NodeKind::Body);
    assert_eq!(body.value.as_deref(), Some(BODY_PLACEHOLDER));
    assert!(body.children.is_empty());
}

#[test]
fn test_child_lookup() {
    let mut node = TreeNode::new(NodeKind::If, None);
    node.push(TreeNode::leaf(NodeKind::Condition, "x > 0"));
    node.push(TreeNode::body());

    assert_eq!(
        node.child(NodeKind::Condition).and_then(|c| c.value.as_deref()),
        Some("x > 0")
    );
    assert!(node.child(NodeKind::Value).is_none());
}

#[test]
fn test_tags() {
    assert_eq!(NodeKind::Program.tag(), "PROGRAM");
    assert_eq!(NodeKind::Declaration.to_string(), "DECLARATION");
    assert_eq!(NodeKind::Condition.to_string(), "CONDITION");
}
