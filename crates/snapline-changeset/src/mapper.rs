//! Position mapping between the two documents' coordinate spaces.
//!
//! The changeset doubles as a piecewise mapping function: binary-search the
//! change containing a position, then map by constant offset inside an
//! unchanged region. Inside a modified region the mapping is ambiguous by
//! nature of the edit, so the query clamps to the nearest boundary of the
//! counterpart range (ties go to the start). These queries are read-only;
//! the changeset is never mutated by them.

use serde::{Deserialize, Serialize};

use crate::change::Change;
use crate::changeset::ChangeSet;

/// Selects one of the two compared documents' coordinate spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The old document.
    A,
    /// The new document.
    B,
}

impl Side {
    /// The opposite side.
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl ChangeSet {
    /// Map a position in `side`'s coordinate space to the corresponding
    /// position on the other side.
    ///
    /// Positions at or past the end of `side`'s document map to the other
    /// document's end.
    pub fn map_position(&self, side: Side, position: u64) -> u64 {
        let other = side.other();
        let own_len = self.side_len(side);
        if position >= own_len {
            return self.side_len(other);
        }
        // position < own_len, so a containing change exists.
        let Some(change) = self.containing(side, position) else {
            return self.side_len(other);
        };
        let from = change.start(side);
        let to = change.end(side);
        if change.is_unchanged() {
            change.start(other) + (position - from)
        } else if position - from <= to - position {
            change.start(other)
        } else {
            change.end(other)
        }
    }

    /// The change whose range on `side` contains `position`, if any.
    ///
    /// Changes with no extent on `side` (e.g. insertions queried from the
    /// old side) never contain a position; the query lands on the region
    /// that follows them.
    pub fn change_at(&self, side: Side, position: u64) -> Option<&Change> {
        if position >= self.side_len(side) {
            return None;
        }
        self.containing(side, position)
    }

    fn containing(&self, side: Side, position: u64) -> Option<&Change> {
        let changes = self.changes().as_slice();
        let index = changes.partition_point(|c| c.end(side) <= position);
        changes.get(index)
    }

    fn side_len(&self, side: Side) -> u64 {
        match side {
            Side::A => self.len_a(),
            Side::B => self.len_b(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{diff, DiffConfig};
    use snapline_doc::{Document, Node};

    fn doc(text: &str) -> Document {
        let nodes = if text.is_empty() {
            vec![]
        } else {
            vec![Node::text(text)]
        };
        Document::new(nodes).unwrap()
    }

    fn compare(a: &str, b: &str) -> ChangeSet {
        diff(&doc(a), &doc(b), &DiffConfig::default()).unwrap()
    }

    #[test]
    fn other_side_flips() {
        assert_eq!(Side::A.other(), Side::B);
        assert_eq!(Side::B.other(), Side::A);
    }

    #[test]
    fn unchanged_positions_map_by_offset() {
        let cs = compare("Hello World", "Hello Brave World");
        assert_eq!(cs.map_position(Side::A, 0), 0);
        assert_eq!(cs.map_position(Side::A, 3), 3);
        // "World" shifted right by the insertion.
        assert_eq!(cs.map_position(Side::A, 7), 13);
        assert_eq!(cs.map_position(Side::B, 13), 7);
    }

    #[test]
    fn positions_inside_an_insertion_clamp_to_edges() {
        let cs = compare("Hello World", "Hello Brave World");
        // B positions 6..12 lie inside the inserted "Brave ".
        assert_eq!(cs.map_position(Side::B, 6), 6);
        assert_eq!(cs.map_position(Side::B, 8), 6);
        assert_eq!(cs.map_position(Side::B, 11), 6);
    }

    #[test]
    fn positions_inside_a_deletion_clamp_to_nearest_edge() {
        let cs = compare("abXYZcd", "abcd");
        // A positions 2..5 lie inside the deleted "XYZ"; both counterpart
        // edges of a pure deletion coincide.
        assert_eq!(cs.map_position(Side::A, 2), 2);
        assert_eq!(cs.map_position(Side::A, 3), 2);
        assert_eq!(cs.map_position(Side::A, 4), 2);
        // The unchanged tail "cd" maps by offset again.
        assert_eq!(cs.map_position(Side::A, 5), 2);
        assert_eq!(cs.map_position(Side::A, 6), 3);
    }

    #[test]
    fn end_positions_map_to_the_other_end() {
        let cs = compare("Hello World", "Hello Brave World");
        assert_eq!(cs.map_position(Side::A, 11), 17);
        assert_eq!(cs.map_position(Side::B, 17), 11);
        assert_eq!(cs.map_position(Side::A, 99), 17);
    }

    #[test]
    fn empty_changeset_maps_everything_to_zero() {
        let cs = compare("", "");
        assert_eq!(cs.map_position(Side::A, 0), 0);
        assert_eq!(cs.map_position(Side::B, 5), 0);
    }

    #[test]
    fn change_at_finds_the_containing_region() {
        let cs = compare("Hello World", "Hello Brave World");
        let inside_insert = cs.change_at(Side::B, 8).unwrap();
        assert!(inside_insert.is_insertion());
        let unchanged = cs.change_at(Side::A, 2).unwrap();
        assert!(unchanged.is_unchanged());
        assert!(cs.change_at(Side::A, 11).is_none());
    }

    #[test]
    fn change_at_skips_zero_extent_regions() {
        let cs = compare("Hello World", "Hello Brave World");
        // On side A the insertion has no extent; position 6 lands in the
        // trailing unchanged region.
        let at_six = cs.change_at(Side::A, 6).unwrap();
        assert!(at_six.is_unchanged());
        assert_eq!(at_six.from_b, 12);
    }
}
