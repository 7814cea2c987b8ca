//! The [`ChangeSet`]: an ordered list of changes partitioning both
//! coordinate spaces, plus validation and simplification.

use serde::{Deserialize, Serialize};
use snapline_doc::Document;

use crate::change::Change;
use crate::diff::DiffConfig;
use crate::error::{ChangesetError, ChangesetResult};
use crate::myers::Segment;
use crate::span::UnitRange;

/// The result of comparing two document snapshots.
///
/// Changes are ordered and tile both documents completely: each change ends
/// where the next begins, on both sides, from position 0 to each document's
/// total length. Unchanged regions are materialized alongside insertions,
/// deletions, and replacements; [`ChangeSet::modified`] filters them out for
/// consumers that only highlight differences.
///
/// A changeset is derived data. It is recomputed fresh from two frozen
/// snapshots on every comparison and never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    changes: Vec<Change>,
    len_a: u64,
    len_b: u64,
}

impl ChangeSet {
    /// Materialize the aligner's unit-index segments as position-space
    /// changes, prefix-summing unit widths on each side.
    pub(crate) fn from_segments(
        segments: &[Segment],
        old: &Document,
        new: &Document,
    ) -> ChangeSet {
        let pos_a = prefix_positions(old);
        let pos_b = prefix_positions(new);

        let changes = segments
            .iter()
            .map(|segment| {
                let from_a = pos_a[segment.a.start];
                let to_a = pos_a[segment.a.end];
                let from_b = pos_b[segment.b.start];
                let to_b = pos_b[segment.b.end];
                if segment.matched {
                    Change::matched(
                        from_a,
                        to_a,
                        from_b,
                        to_b,
                        UnitRange::from(segment.a.clone()),
                        UnitRange::from(segment.b.clone()),
                    )
                } else {
                    Change::edited(from_a, to_a, from_b, to_b)
                }
            })
            .collect();

        ChangeSet {
            changes,
            len_a: old.len(),
            len_b: new.len(),
        }
    }

    /// All changes, in order. The iterator is lazy, finite, and restartable
    /// by calling this again.
    pub fn changes(&self) -> std::slice::Iter<'_, Change> {
        self.changes.iter()
    }

    /// Only the changes where the documents actually differ.
    pub fn modified(&self) -> impl Iterator<Item = &Change> {
        self.changes.iter().filter(|c| !c.is_unchanged())
    }

    /// Number of changes, unchanged regions included.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns `true` if the changeset has no changes at all (both
    /// documents empty).
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Old document's total length.
    pub fn len_a(&self) -> u64 {
        self.len_a
    }

    /// New document's total length.
    pub fn len_b(&self) -> u64 {
        self.len_b
    }

    /// Consolidate the change list into the minimal stable set of regions.
    ///
    /// Two policies: replacements whose content is actually identical on
    /// both sides are folded back into unchanged runs, and modified regions
    /// separated by an unchanged run shorter than
    /// [`DiffConfig::merge_threshold`] are merged into one region spanning
    /// both (directly adjacent modified regions always merge). Consecutive
    /// unchanged runs coalesce. The partition invariant is preserved.
    pub fn simplify(&self, old: &Document, new: &Document, config: &DiffConfig) -> ChangeSet {
        let mut out: Vec<Change> = Vec::new();
        for change in &self.changes {
            let mut change = change.clone();
            if !change.is_unchanged()
                && change.len_a() == change.len_b()
                && old.slice(change.from_a, change.to_a) == new.slice(change.from_b, change.to_b)
            {
                change = Change::matched(
                    change.from_a,
                    change.to_a,
                    change.from_b,
                    change.to_b,
                    UnitRange::from(old.unit_range(change.from_a, change.to_a)),
                    UnitRange::from(new.unit_range(change.from_b, change.to_b)),
                );
            }
            push_merged(&mut out, change, config.merge_threshold);
        }
        ChangeSet {
            changes: out,
            len_a: self.len_a,
            len_b: self.len_b,
        }
    }

    /// Check the coverage and partition invariants against the two
    /// documents' lengths. A violation is a defect in the engine, reported
    /// as [`ChangesetError::Logic`].
    pub fn validate(&self, len_a: u64, len_b: u64) -> ChangesetResult<()> {
        if self.changes.is_empty() {
            if len_a != 0 || len_b != 0 {
                return Err(ChangesetError::Logic(format!(
                    "empty changeset for documents of length {len_a}/{len_b}"
                )));
            }
            return Ok(());
        }

        let mut expect_a = 0;
        let mut expect_b = 0;
        for (index, change) in self.changes.iter().enumerate() {
            if change.from_a != expect_a || change.from_b != expect_b {
                return Err(ChangesetError::Logic(format!(
                    "change {index} starts at {}/{}, expected {expect_a}/{expect_b}",
                    change.from_a, change.from_b
                )));
            }
            if change.to_a < change.from_a || change.to_b < change.from_b {
                return Err(ChangesetError::Logic(format!(
                    "change {index} has a negative extent"
                )));
            }
            if change.len_a() == 0 && change.len_b() == 0 {
                return Err(ChangesetError::Logic(format!("change {index} is empty")));
            }
            let span_a: u64 = change.spans_a.iter().map(|s| s.len).sum();
            let span_b: u64 = change.spans_b.iter().map(|s| s.len).sum();
            if span_a != change.len_a() || span_b != change.len_b() {
                return Err(ChangesetError::Logic(format!(
                    "change {index} spans cover {span_a}/{span_b} of {}/{}",
                    change.len_a(),
                    change.len_b()
                )));
            }
            expect_a = change.to_a;
            expect_b = change.to_b;
        }

        if expect_a != len_a || expect_b != len_b {
            return Err(ChangesetError::Logic(format!(
                "changes end at {expect_a}/{expect_b}, documents end at {len_a}/{len_b}"
            )));
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes()
    }
}

fn prefix_positions(document: &Document) -> Vec<u64> {
    let mut positions = Vec::with_capacity(document.units().len() + 1);
    let mut at = 0;
    for unit in document.units() {
        positions.push(at);
        at += unit.len;
    }
    positions.push(at);
    positions
}

/// Append `change` to `out`, applying the merge policies as we go.
fn push_merged(out: &mut Vec<Change>, change: Change, threshold: u64) {
    if change.is_unchanged() {
        if let Some(last) = out.last_mut() {
            if last.is_unchanged() {
                last.absorb(change);
                return;
            }
        }
        out.push(change);
        return;
    }

    // A short unchanged gap flanked by modified regions gets absorbed.
    let gap_absorbable = out.len() >= 2
        && out[out.len() - 1].is_unchanged()
        && out[out.len() - 1].len_a() < threshold
        && !out[out.len() - 2].is_unchanged();
    if gap_absorbable {
        if let Some(gap) = out.pop() {
            if let Some(previous) = out.last_mut() {
                previous.absorb(gap);
                previous.absorb(change);
            }
        }
        return;
    }

    // Directly adjacent modified regions always merge.
    if let Some(last) = out.last_mut() {
        if !last.is_unchanged() {
            last.absorb(change);
            return;
        }
    }
    out.push(change);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    fn unchanged(from_a: u64, to_a: u64, from_b: u64, to_b: u64) -> Change {
        Change::matched(
            from_a,
            to_a,
            from_b,
            to_b,
            UnitRange::from(from_a as usize..to_a as usize),
            UnitRange::from(from_b as usize..to_b as usize),
        )
    }

    fn set(changes: Vec<Change>, len_a: u64, len_b: u64) -> ChangeSet {
        ChangeSet {
            changes,
            len_a,
            len_b,
        }
    }

    #[test]
    fn validate_accepts_a_proper_partition() {
        let cs = set(
            vec![
                unchanged(0, 3, 0, 3),
                Change::edited(3, 5, 3, 4),
                unchanged(5, 8, 4, 7),
            ],
            8,
            7,
        );
        assert!(cs.validate(8, 7).is_ok());
    }

    #[test]
    fn validate_rejects_a_gap() {
        let cs = set(vec![unchanged(0, 3, 0, 3), unchanged(4, 8, 4, 8)], 8, 8);
        assert!(matches!(cs.validate(8, 8), Err(ChangesetError::Logic(_))));
    }

    #[test]
    fn validate_rejects_short_coverage() {
        let cs = set(vec![unchanged(0, 3, 0, 3)], 8, 8);
        assert!(cs.validate(8, 8).is_err());
    }

    #[test]
    fn validate_rejects_bad_span_accounting() {
        let mut change = Change::edited(0, 4, 0, 2);
        change.spans_a = vec![Span::edited(3)];
        let cs = set(vec![change], 4, 2);
        assert!(cs.validate(4, 2).is_err());
    }

    #[test]
    fn validate_rejects_nonempty_documents_with_no_changes() {
        let cs = set(vec![], 1, 0);
        assert!(cs.validate(1, 0).is_err());
        assert!(set(vec![], 0, 0).validate(0, 0).is_ok());
    }

    #[test]
    fn adjacent_modified_regions_merge() {
        let mut out = Vec::new();
        push_merged(&mut out, Change::edited(0, 2, 0, 0), 0);
        push_merged(&mut out, Change::edited(2, 2, 0, 3), 0);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].to_a, 2);
        assert_eq!(out[0].to_b, 3);
    }

    #[test]
    fn unchanged_runs_coalesce() {
        let mut out = Vec::new();
        push_merged(&mut out, unchanged(0, 2, 0, 2), 0);
        push_merged(&mut out, unchanged(2, 5, 2, 5), 0);
        assert_eq!(out.len(), 1);
        assert!(out[0].is_unchanged());
        assert_eq!(out[0].to_a, 5);
    }

    #[test]
    fn short_gap_is_absorbed_when_threshold_allows() {
        let mut out = Vec::new();
        push_merged(&mut out, Change::edited(0, 2, 0, 1), 2);
        push_merged(&mut out, unchanged(2, 3, 1, 2), 2);
        push_merged(&mut out, Change::edited(3, 5, 2, 6), 2);
        assert_eq!(out.len(), 1);
        let merged = &out[0];
        assert_eq!((merged.from_a, merged.to_a), (0, 5));
        assert_eq!((merged.from_b, merged.to_b), (0, 6));
        assert!(!merged.is_unchanged());
        // The absorbed gap keeps its provenance spans on both sides.
        assert!(merged.spans_a.iter().any(|s| s.origin.is_some()));
        assert!(merged.spans_b.iter().any(|s| s.origin.is_some()));
    }

    #[test]
    fn gap_at_threshold_is_kept() {
        let mut out = Vec::new();
        push_merged(&mut out, Change::edited(0, 2, 0, 1), 1);
        push_merged(&mut out, unchanged(2, 3, 1, 2), 1);
        push_merged(&mut out, Change::edited(3, 5, 2, 6), 1);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn leading_unchanged_run_is_never_absorbed() {
        let mut out = Vec::new();
        push_merged(&mut out, unchanged(0, 1, 0, 1), 10);
        push_merged(&mut out, Change::edited(1, 3, 1, 2), 10);
        assert_eq!(out.len(), 2);
        assert!(out[0].is_unchanged());
    }

    #[test]
    fn changeset_serde_roundtrip() {
        let cs = set(
            vec![unchanged(0, 3, 0, 3), Change::edited(3, 5, 3, 4)],
            5,
            4,
        );
        let json = serde_json::to_string(&cs).unwrap();
        let parsed: ChangeSet = serde_json::from_str(&json).unwrap();
        assert_eq!(cs, parsed);
    }

    #[test]
    fn changes_iterator_is_restartable() {
        let cs = set(vec![unchanged(0, 3, 0, 3)], 3, 3);
        assert_eq!(cs.changes().count(), 1);
        assert_eq!(cs.changes().count(), 1);
        assert_eq!((&cs).into_iter().count(), 1);
    }
}
