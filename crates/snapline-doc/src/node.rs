//! Document tree nodes.
//!
//! A document is a tree of block nodes with text runs at the leaves. The set
//! of kinds mirrors a small rich-text schema: paragraphs, headings, block
//! quotes, bullet lists, and horizontal rules. Formatting marks are out of
//! scope; only content presence is modeled.

use serde::{Deserialize, Serialize};

/// The kind of a block node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Paragraph,
    Heading { level: u8 },
    Blockquote,
    BulletList,
    ListItem,
    HorizontalRule,
}

impl NodeKind {
    /// Returns `true` for atom nodes, which carry no children.
    pub fn is_atom(&self) -> bool {
        matches!(self, NodeKind::HorizontalRule)
    }

    /// Returns `true` if this kind accepts inline (text) children.
    pub fn accepts_inline(&self) -> bool {
        matches!(
            self,
            NodeKind::Paragraph | NodeKind::Heading { .. } | NodeKind::ListItem
        )
    }

    /// Stable byte encoding used for hashing. Kinds are distinguished by a
    /// tag byte; headings append their level.
    pub(crate) fn encode(&self, out: &mut Vec<u8>) {
        match self {
            NodeKind::Paragraph => out.push(0),
            NodeKind::Heading { level } => {
                out.push(1);
                out.push(*level);
            }
            NodeKind::Blockquote => out.push(2),
            NodeKind::BulletList => out.push(3),
            NodeKind::ListItem => out.push(4),
            NodeKind::HorizontalRule => out.push(5),
        }
    }
}

/// One node in a document tree: a text run leaf or a block with children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Text(String),
    Block { kind: NodeKind, children: Vec<Node> },
}

impl Node {
    /// A text run leaf.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// A paragraph block.
    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Block {
            kind: NodeKind::Paragraph,
            children,
        }
    }

    /// A heading block. Levels outside `1..=6` are rejected at document
    /// construction, not here.
    pub fn heading(level: u8, children: Vec<Node>) -> Self {
        Node::Block {
            kind: NodeKind::Heading { level },
            children,
        }
    }

    /// A block quote.
    pub fn blockquote(children: Vec<Node>) -> Self {
        Node::Block {
            kind: NodeKind::Blockquote,
            children,
        }
    }

    /// A bullet list containing list items.
    pub fn bullet_list(children: Vec<Node>) -> Self {
        Node::Block {
            kind: NodeKind::BulletList,
            children,
        }
    }

    /// A list item.
    pub fn list_item(children: Vec<Node>) -> Self {
        Node::Block {
            kind: NodeKind::ListItem,
            children,
        }
    }

    /// A horizontal rule atom.
    pub fn horizontal_rule() -> Self {
        Node::Block {
            kind: NodeKind::HorizontalRule,
            children: Vec::new(),
        }
    }

    /// The kind of this node, or `None` for text runs.
    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            Node::Text(_) => None,
            Node::Block { kind, .. } => Some(*kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_rule_is_atom() {
        assert!(NodeKind::HorizontalRule.is_atom());
        assert!(!NodeKind::Paragraph.is_atom());
    }

    #[test]
    fn inline_acceptance() {
        assert!(NodeKind::Paragraph.accepts_inline());
        assert!(NodeKind::Heading { level: 2 }.accepts_inline());
        assert!(NodeKind::ListItem.accepts_inline());
        assert!(!NodeKind::Blockquote.accepts_inline());
        assert!(!NodeKind::BulletList.accepts_inline());
    }

    #[test]
    fn heading_levels_encode_differently() {
        let mut h1 = Vec::new();
        let mut h2 = Vec::new();
        NodeKind::Heading { level: 1 }.encode(&mut h1);
        NodeKind::Heading { level: 2 }.encode(&mut h2);
        assert_ne!(h1, h2);
    }

    #[test]
    fn constructors_report_kind() {
        assert_eq!(
            Node::paragraph(vec![]).kind(),
            Some(NodeKind::Paragraph)
        );
        assert_eq!(Node::text("x").kind(), None);
    }

    #[test]
    fn node_serde_roundtrip() {
        let node = Node::paragraph(vec![Node::text("hello")]);
        let json = serde_json::to_string(&node).unwrap();
        let parsed: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(node, parsed);
    }
}
