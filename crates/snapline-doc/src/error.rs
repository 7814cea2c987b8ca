//! Error types for document construction.

use crate::node::NodeKind;
use crate::sequence::NodePath;

/// Errors raised when a document tree is not well-formed.
///
/// These are surfaced once, at [`Document::new`](crate::Document::new); a
/// constructed `Document` is always well-formed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DocumentError {
    /// A text node with no characters. Empty runs carry no content and would
    /// break the unit tiling invariant.
    #[error("empty text node at {path}")]
    EmptyText { path: NodePath },

    /// A heading with a level outside `1..=6`.
    #[error("heading level {level} out of range 1..=6 at {path}")]
    InvalidHeadingLevel { level: u8, path: NodePath },

    /// An atom node (horizontal rule) that was given children.
    #[error("atom node {kind:?} cannot have children at {path}")]
    AtomWithChildren { kind: NodeKind, path: NodePath },

    /// A text node inside a parent that only accepts block content.
    #[error("text is not allowed inside {parent:?} at {path}")]
    MisplacedText { parent: NodeKind, path: NodePath },

    /// A block node inside a parent that does not accept it.
    #[error("{:?} is not allowed inside {} at {}", .kind, parent_name(.parent), .path)]
    MisplacedBlock {
        kind: NodeKind,
        parent: Option<NodeKind>,
        path: NodePath,
    },
}

fn parent_name(parent: &Option<NodeKind>) -> String {
    match parent {
        Some(kind) => format!("{kind:?}"),
        None => "the document root".to_string(),
    }
}

/// Convenience alias for document results.
pub type DocResult<T> = Result<T, DocumentError>;
