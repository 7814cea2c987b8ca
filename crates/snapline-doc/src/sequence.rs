//! Content sequencing.
//!
//! The sequencer flattens a document tree into an ordered run of
//! [`ContentUnit`]s: one unit per text character and one boundary unit per
//! block node, emitted before the node's content in document order. Units
//! exactly tile the document — the sum of unit widths is the document length,
//! with no gaps or overlaps. Two identical trees always sequence to unit-wise
//! equal runs, so any difference between two documents localizes to the
//! smallest possible run of units.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hash::{hash_token, UnitHash};
use crate::node::{Node, NodeKind};

/// The comparable value of a single content unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// One character of a text run.
    Char(char),
    /// The opening boundary of a block node. Atoms consist of just their
    /// boundary token.
    Open(NodeKind),
}

/// Path of child indices from the document root to a node.
///
/// A non-owning provenance reference: it identifies where a unit came from
/// without keeping the node alive or allowing mutation through it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// The child indices, root first.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(root)");
        }
        let mut first = true;
        for index in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{index}")?;
            first = false;
        }
        Ok(())
    }
}

/// A leaf-level chunk of document content: one token, its hash, its width in
/// the position-counting unit, and the path of the node it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentUnit {
    pub token: Token,
    pub hash: UnitHash,
    pub len: u64,
    pub origin: NodePath,
}

impl ContentUnit {
    fn new(token: Token, origin: NodePath) -> Self {
        Self {
            token,
            hash: hash_token(&token),
            len: 1,
            origin,
        }
    }

    /// Content equality as the diff engine sees it: hash equality as the
    /// O(1) fast path, backed by an exact token compare so a hash collision
    /// can never make two distinct units compare equal.
    pub fn same_content(&self, other: &ContentUnit) -> bool {
        self.hash == other.hash && self.token == other.token
    }
}

/// Flatten a tree into its unit sequence. Assumes the nodes have already
/// passed validation.
pub(crate) fn sequence_nodes(nodes: &[Node]) -> Vec<ContentUnit> {
    let mut units = Vec::new();
    let mut path = Vec::new();
    walk(nodes, &mut path, &mut units);
    units
}

fn walk(nodes: &[Node], path: &mut Vec<usize>, out: &mut Vec<ContentUnit>) {
    for (index, node) in nodes.iter().enumerate() {
        path.push(index);
        match node {
            Node::Text(text) => {
                for ch in text.chars() {
                    out.push(ContentUnit::new(Token::Char(ch), NodePath(path.clone())));
                }
            }
            Node::Block { kind, children } => {
                out.push(ContentUnit::new(Token::Open(*kind), NodePath(path.clone())));
                walk(children, path, out);
            }
        }
        path.pop();
    }
}
