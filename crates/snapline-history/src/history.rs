//! The snapshot list and navigation cursor.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snapline_changeset::{diff, ChangeSet, DiffConfig};
use snapline_doc::Document;
use tracing::debug;

use crate::error::{HistoryError, HistoryResult};

/// Identifier of a saved snapshot, assigned in save order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SnapshotId(usize);

impl SnapshotId {
    /// Position of this snapshot in the save order.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One immutable capture of a document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    id: SnapshotId,
    captured_at: DateTime<Utc>,
    document: Document,
}

impl Snapshot {
    /// The snapshot's id.
    pub fn id(&self) -> SnapshotId {
        self.id
    }

    /// When the snapshot was captured.
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// The frozen document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// An ordered list of saved snapshots with a navigation cursor.
///
/// Mirrors a snapshotting editor's "save state" history: saving appends a
/// capture and makes it current; previous/next move the cursor, clamped at
/// the ends. Snapshots are never mutated after capture, so comparisons
/// always run over frozen inputs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
    current: Option<usize>,
}

impl History {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a document. The snapshot becomes the current one.
    pub fn save(&mut self, document: Document) -> SnapshotId {
        let id = SnapshotId(self.snapshots.len());
        self.snapshots.push(Snapshot {
            id,
            captured_at: Utc::now(),
            document,
        });
        self.current = Some(id.0);
        debug!(id = id.0, total = self.snapshots.len(), "saved snapshot");
        id
    }

    /// Move the cursor to the preceding snapshot, if there is one.
    pub fn previous(&mut self) -> Option<&Snapshot> {
        let current = self.current?;
        if current == 0 {
            return None;
        }
        self.current = Some(current - 1);
        debug!(id = current - 1, "moved to previous snapshot");
        self.snapshots.get(current - 1)
    }

    /// Move the cursor to the following snapshot, if there is one.
    pub fn next(&mut self) -> Option<&Snapshot> {
        let current = self.current?;
        if current + 1 >= self.snapshots.len() {
            return None;
        }
        self.current = Some(current + 1);
        debug!(id = current + 1, "moved to next snapshot");
        self.snapshots.get(current + 1)
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.current?)
    }

    /// Look up a snapshot by id.
    pub fn get(&self, id: SnapshotId) -> Option<&Snapshot> {
        self.snapshots.get(id.0)
    }

    /// Number of saved snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if nothing has been saved yet.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots in save order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Compare two saved snapshots, oldest-role first.
    pub fn compare(
        &self,
        old: SnapshotId,
        new: SnapshotId,
        config: &DiffConfig,
    ) -> HistoryResult<ChangeSet> {
        let old_snapshot = self.get(old).ok_or(HistoryError::UnknownSnapshot(old))?;
        let new_snapshot = self.get(new).ok_or(HistoryError::UnknownSnapshot(new))?;
        let changeset = diff(old_snapshot.document(), new_snapshot.document(), config)?;
        debug!(
            old = old.0,
            new = new.0,
            modified = changeset.modified().count(),
            "compared snapshots"
        );
        Ok(changeset)
    }
}
