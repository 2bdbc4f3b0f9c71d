use std::fmt::Display;

/// Node kinds
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NodeKind {
    Program,
    Declaration,
    If,
    Else,
    Type,
    Identifier,
    Value,
    Condition,
    Body,
}

impl NodeKind {
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Program => "PROGRAM",
            NodeKind::Declaration => "DECLARATION",
            NodeKind::If => "IF",
            NodeKind::Else => "ELSE",
            NodeKind::Type => "TYPE",
            NodeKind::Identifier => "IDENTIFIER",
            NodeKind::Value => "VALUE",
            NodeKind::Condition => "CONDITION",
            NodeKind::Body => "BODY",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Value given to every placeholder BODY node.
pub const BODY_PLACEHOLDER: &str = "{ ... }";

/// Tree Node
///
/// A tagged node with an optional literal and its children in append order.
/// `PROGRAM` is always the root and every construct hangs directly off it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub kind: NodeKind,
    pub value: Option<String>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(kind: NodeKind, value: Option<String>) -> Self {
        TreeNode {
            kind,
            value,
            children: vec![],
        }
    }

    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        TreeNode::new(kind, Some(value.into()))
    }

    pub fn program() -> Self {
        TreeNode::new(NodeKind::Program, None)
    }

    pub fn body() -> Self {
        TreeNode::leaf(NodeKind::Body, BODY_PLACEHOLDER)
    }

    pub fn push(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// First direct child of the given kind.
    pub fn child(&self, kind: NodeKind) -> Option<&TreeNode> {
        self.children.iter().find(|child| child.kind == kind)
    }

    /// Renders the tree as an indented outline, one line per node.
    ///
    /// Lines look like `<indent><side> -> <TAG>: <value>` where the indent is
    /// two spaces per level and `side` is `ROOT` for this node and `CHILD` for
    /// everything below it. Nodes are visited in pre-order.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn fmt_outline(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        let side = if depth == 0 { "ROOT" } else { "CHILD" };

        writeln!(
            f,
            "{}{} -> {}: {}",
            "  ".repeat(depth),
            side,
            self.kind,
            self.value.as_deref().unwrap_or("")
        )?;

        for child in &self.children {
            child.fmt_outline(f, depth + 1)?;
        }

        Ok(())
    }
}

impl Display for TreeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_outline(f, 0)
    }
}
