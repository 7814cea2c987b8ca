//! The [`Change`] record: one aligned region of the edit script.

use serde::{Deserialize, Serialize};

use crate::mapper::Side;
use crate::span::{Span, UnitRange};

/// One aligned region of a comparison.
///
/// `[from_a, to_a)` is the region's range in the old document's coordinate
/// space, `[from_b, to_b)` in the new document's. `spans_a` reconstructs the
/// old-side content of the range, `spans_b` the new-side content: the span
/// widths on each side always sum to that side's range length.
///
/// A change with `len_a == 0` is a pure insertion, `len_b == 0` a pure
/// deletion, both nonzero a replacement. Unchanged regions are materialized
/// too, with provenance-carrying spans on both sides; they complete the
/// partition of both coordinate spaces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub from_a: u64,
    pub to_a: u64,
    pub from_b: u64,
    pub to_b: u64,
    pub spans_a: Vec<Span>,
    pub spans_b: Vec<Span>,
}

impl Change {
    /// An unchanged region shared by both documents.
    pub(crate) fn matched(
        from_a: u64,
        to_a: u64,
        from_b: u64,
        to_b: u64,
        units_a: UnitRange,
        units_b: UnitRange,
    ) -> Self {
        Self {
            from_a,
            to_a,
            from_b,
            to_b,
            spans_a: vec![Span::unchanged(to_a - from_a, units_a)],
            spans_b: vec![Span::unchanged(to_b - from_b, units_b)],
        }
    }

    /// A region where the two documents differ. Either side may be empty.
    pub(crate) fn edited(from_a: u64, to_a: u64, from_b: u64, to_b: u64) -> Self {
        let spans_a = if to_a > from_a {
            vec![Span::edited(to_a - from_a)]
        } else {
            Vec::new()
        };
        let spans_b = if to_b > from_b {
            vec![Span::edited(to_b - from_b)]
        } else {
            Vec::new()
        };
        Self {
            from_a,
            to_a,
            from_b,
            to_b,
            spans_a,
            spans_b,
        }
    }

    /// Length of the region in the old document.
    pub fn len_a(&self) -> u64 {
        self.to_a - self.from_a
    }

    /// Length of the region in the new document.
    pub fn len_b(&self) -> u64 {
        self.to_b - self.from_b
    }

    /// Pure insertion: no old-side extent.
    pub fn is_insertion(&self) -> bool {
        self.len_a() == 0 && self.len_b() > 0
    }

    /// Pure deletion: no new-side extent.
    pub fn is_deletion(&self) -> bool {
        self.len_b() == 0 && self.len_a() > 0
    }

    /// Unchanged region: equal extent and provenance on both sides.
    pub fn is_unchanged(&self) -> bool {
        self.len_a() == self.len_b()
            && self.spans_a.iter().all(|s| s.origin.is_some())
            && self.spans_b.iter().all(|s| s.origin.is_some())
            && !self.spans_a.is_empty()
    }

    /// Start of the region on the given side.
    pub fn start(&self, side: Side) -> u64 {
        match side {
            Side::A => self.from_a,
            Side::B => self.from_b,
        }
    }

    /// End of the region on the given side.
    pub fn end(&self, side: Side) -> u64 {
        match side {
            Side::A => self.to_a,
            Side::B => self.to_b,
        }
    }

    /// Extend this change to also cover `next`, which must start where this
    /// change ends on both sides.
    pub(crate) fn absorb(&mut self, next: Change) {
        debug_assert_eq!(self.to_a, next.from_a);
        debug_assert_eq!(self.to_b, next.from_b);
        self.to_a = next.to_a;
        self.to_b = next.to_b;
        self.spans_a.extend(next.spans_a);
        self.spans_b.extend(next.spans_b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_and_deletion_predicates() {
        let insert = Change::edited(5, 5, 5, 9);
        assert!(insert.is_insertion());
        assert!(!insert.is_deletion());
        assert_eq!(insert.len_a(), 0);
        assert_eq!(insert.len_b(), 4);

        let delete = Change::edited(2, 6, 2, 2);
        assert!(delete.is_deletion());
        assert!(!delete.is_insertion());
    }

    #[test]
    fn replacement_is_neither_pure_kind() {
        let replace = Change::edited(0, 3, 0, 5);
        assert!(!replace.is_insertion());
        assert!(!replace.is_deletion());
        assert!(!replace.is_unchanged());
    }

    #[test]
    fn matched_change_is_unchanged() {
        let change = Change::matched(0, 4, 0, 4, UnitRange::from(0..4), UnitRange::from(0..4));
        assert!(change.is_unchanged());
        assert_eq!(change.spans_a.len(), 1);
        assert_eq!(change.spans_a[0].len, 4);
    }

    #[test]
    fn edited_spans_skip_empty_sides() {
        let insert = Change::edited(5, 5, 5, 9);
        assert!(insert.spans_a.is_empty());
        assert_eq!(insert.spans_b.len(), 1);
    }

    #[test]
    fn absorb_concatenates_spans_and_extends_ranges() {
        let mut change = Change::edited(0, 2, 0, 0);
        change.absorb(Change::matched(
            2,
            5,
            0,
            3,
            UnitRange::from(2..5),
            UnitRange::from(0..3),
        ));
        assert_eq!(change.to_a, 5);
        assert_eq!(change.to_b, 3);
        assert_eq!(change.spans_a.len(), 2);
        assert_eq!(change.spans_b.len(), 1);
        assert!(!change.is_unchanged());
    }

    #[test]
    fn side_accessors() {
        let change = Change::edited(1, 2, 3, 4);
        assert_eq!(change.start(Side::A), 1);
        assert_eq!(change.end(Side::A), 2);
        assert_eq!(change.start(Side::B), 3);
        assert_eq!(change.end(Side::B), 4);
    }
}
