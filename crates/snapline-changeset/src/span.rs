//! Spans: contiguous runs of content on one side of a change region.

use serde::{Deserialize, Serialize};

/// Half-open range of unit indices into one side's content sequence.
///
/// A non-owning provenance reference: it identifies the originating units in
/// the frozen snapshot without keeping them alive or allowing mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRange {
    pub start: usize,
    pub end: usize,
}

impl UnitRange {
    /// Number of units covered.
    pub fn count(&self) -> usize {
        self.end - self.start
    }
}

impl From<std::ops::Range<usize>> for UnitRange {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// A contiguous run of length `len` within a change region.
///
/// Spans of unchanged regions carry `origin`, the range of units shared by
/// both documents, so provenance survives across repeated recomputations.
/// Spans of inserted or deleted content belong to one side only and carry no
/// origin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Width in the document's position-counting unit.
    pub len: u64,
    /// Originating units, present exactly for unchanged content.
    pub origin: Option<UnitRange>,
}

impl Span {
    /// A span of content shared by both sides.
    pub fn unchanged(len: u64, origin: UnitRange) -> Self {
        Self {
            len,
            origin: Some(origin),
        }
    }

    /// A span of content present on one side only.
    pub fn edited(len: u64) -> Self {
        Self { len, origin: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_spans_carry_origin() {
        let span = Span::unchanged(4, UnitRange { start: 2, end: 6 });
        assert_eq!(span.len, 4);
        assert_eq!(span.origin.unwrap().count(), 4);
    }

    #[test]
    fn edited_spans_have_no_origin() {
        let span = Span::edited(3);
        assert_eq!(span.len, 3);
        assert!(span.origin.is_none());
    }

    #[test]
    fn unit_range_from_std_range() {
        let range = UnitRange::from(1..5);
        assert_eq!(range.start, 1);
        assert_eq!(range.count(), 4);
    }
}
