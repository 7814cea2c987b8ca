//! The top-level comparison entry point.

use serde::{Deserialize, Serialize};
use snapline_doc::Document;
use tracing::debug;

use crate::changeset::ChangeSet;
use crate::error::ChangesetResult;
use crate::myers;

/// Configuration for changeset construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Maximum width of an unchanged run absorbed when merging neighboring
    /// modified regions. The default of 0 merges only directly adjacent
    /// regions.
    pub merge_threshold: u64,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self { merge_threshold: 0 }
    }
}

/// Compare two frozen document snapshots.
///
/// Pure and synchronous: sequences both documents, aligns the hashed unit
/// runs, materializes the alignment as position-space changes, and
/// simplifies them into stable regions. Total over validated documents,
/// empty and identical ones included; the only error class is an internal
/// invariant breach, which indicates a defect in the engine itself.
pub fn diff(old: &Document, new: &Document, config: &DiffConfig) -> ChangesetResult<ChangeSet> {
    let segments = myers::shortest_edit_script(old.units(), new.units())?;
    let raw = ChangeSet::from_segments(&segments, old, new);
    let changeset = raw.simplify(old, new, config);
    changeset.validate(old.len(), new.len())?;
    debug!(
        len_a = old.len(),
        len_b = new.len(),
        changes = changeset.len(),
        modified = changeset.modified().count(),
        "computed changeset"
    );
    Ok(changeset)
}
