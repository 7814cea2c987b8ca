//! The validated, immutable document.
//!
//! A [`Document`] owns a well-formed tree plus the derived unit sequence and
//! its prefix positions. It is frozen on construction: comparisons only ever
//! observe an immutable snapshot, so a live editor can keep mutating its own
//! copy of the tree while a diff is in flight.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{DocResult, DocumentError};
use crate::node::{Node, NodeKind};
use crate::sequence::{sequence_nodes, ContentUnit, NodePath, Token};

/// An immutable document snapshot.
///
/// Positions are counted in units: one per text character, one per block
/// boundary. `len()` is the total width and every unit's position is the
/// prefix sum of the widths before it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Node>", into = "Vec<Node>")]
pub struct Document {
    nodes: Vec<Node>,
    units: Vec<ContentUnit>,
    /// Prefix positions; `starts[i]` is where unit `i` begins, `starts[n]`
    /// is the document length.
    starts: Vec<u64>,
}

impl Document {
    /// Validate and freeze a tree. Fails with [`DocumentError`] if the tree
    /// is not well-formed.
    pub fn new(nodes: Vec<Node>) -> DocResult<Self> {
        let mut path = Vec::new();
        validate(&nodes, None, &mut path)?;

        let units = sequence_nodes(&nodes);
        let mut starts = Vec::with_capacity(units.len() + 1);
        let mut position = 0u64;
        for unit in &units {
            starts.push(position);
            position += unit.len;
        }
        starts.push(position);

        Ok(Self {
            nodes,
            units,
            starts,
        })
    }

    /// The empty document.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            units: Vec::new(),
            starts: vec![0],
        }
    }

    /// Total length in the position-counting unit.
    pub fn len(&self) -> u64 {
        *self.starts.last().unwrap_or(&0)
    }

    /// Returns `true` if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The tree this document was built from.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The flattened unit sequence, in document order.
    pub fn units(&self) -> &[ContentUnit] {
        &self.units
    }

    /// Indices of the units lying entirely inside `[from, to)`.
    pub fn unit_range(&self, from: u64, to: u64) -> Range<usize> {
        let n = self.units.len();
        let start = self.starts[..n].partition_point(|&s| s < from);
        let end = self.starts[1..].partition_point(|&e| e <= to);
        start..end.max(start)
    }

    /// The tokens of the units lying entirely inside `[from, to)`.
    pub fn slice(&self, from: u64, to: u64) -> Vec<Token> {
        self.units[self.unit_range(from, to)]
            .iter()
            .map(|unit| unit.token)
            .collect()
    }

    /// Resolve a provenance path back to its node, if it still names one.
    pub fn node_at(&self, path: &NodePath) -> Option<&Node> {
        let mut indices = path.indices().iter();
        let first = *indices.next()?;
        let mut node = self.nodes.get(first)?;
        for &index in indices {
            match node {
                Node::Block { children, .. } => node = children.get(index)?,
                Node::Text(_) => return None,
            }
        }
        Some(node)
    }
}

impl TryFrom<Vec<Node>> for Document {
    type Error = DocumentError;

    fn try_from(nodes: Vec<Node>) -> DocResult<Self> {
        Document::new(nodes)
    }
}

impl From<Document> for Vec<Node> {
    fn from(document: Document) -> Self {
        document.nodes
    }
}

fn validate(nodes: &[Node], parent: Option<NodeKind>, path: &mut Vec<usize>) -> DocResult<()> {
    for (index, node) in nodes.iter().enumerate() {
        path.push(index);
        match node {
            Node::Text(text) => {
                if text.is_empty() {
                    return Err(DocumentError::EmptyText {
                        path: NodePath::from(path.clone()),
                    });
                }
                // The root accepts inline content directly.
                if let Some(parent_kind) = parent {
                    if !parent_kind.accepts_inline() {
                        return Err(DocumentError::MisplacedText {
                            parent: parent_kind,
                            path: NodePath::from(path.clone()),
                        });
                    }
                }
            }
            Node::Block { kind, children } => {
                validate_block(*kind, children, parent, path)?;
                validate(children, Some(*kind), path)?;
            }
        }
        path.pop();
    }
    Ok(())
}

fn validate_block(
    kind: NodeKind,
    children: &[Node],
    parent: Option<NodeKind>,
    path: &[usize],
) -> DocResult<()> {
    let here = || NodePath::from(path.to_vec());

    if let NodeKind::Heading { level } = kind {
        if !(1..=6).contains(&level) {
            return Err(DocumentError::InvalidHeadingLevel { level, path: here() });
        }
    }
    if kind.is_atom() && !children.is_empty() {
        return Err(DocumentError::AtomWithChildren { kind, path: here() });
    }

    let allowed = match parent {
        // Inline-only parents take no blocks at all.
        Some(p) if p.accepts_inline() && !matches!(p, NodeKind::ListItem) => false,
        Some(NodeKind::BulletList) => matches!(kind, NodeKind::ListItem),
        Some(_) | None => !matches!(kind, NodeKind::ListItem),
    };
    if !allowed {
        return Err(DocumentError::MisplacedBlock {
            kind,
            parent,
            path: here(),
        });
    }
    Ok(())
}
