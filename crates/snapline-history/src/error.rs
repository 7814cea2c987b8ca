//! Error types for snapshot history operations.

use snapline_changeset::ChangesetError;

use crate::history::SnapshotId;

/// Errors that can occur during history operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HistoryError {
    /// A comparison named a snapshot that was never saved.
    #[error("unknown snapshot id: {0}")]
    UnknownSnapshot(SnapshotId),

    /// The changeset engine reported a defect.
    #[error(transparent)]
    Changeset(#[from] ChangesetError),
}

/// Convenience alias for history results.
pub type HistoryResult<T> = Result<T, HistoryError>;
