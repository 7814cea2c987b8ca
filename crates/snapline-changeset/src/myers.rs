//! Myers shortest-edit-script search over hashed unit sequences.
//!
//! Classic greedy edit-graph traversal: for increasing edit distance `d`,
//! track the furthest-reaching x on each diagonal `k` in an offset array and
//! follow match "snakes" as far as they go. Runs in `O((N + M) * D)` time,
//! which stays cheap for the expected case of localized edits. The search is
//! fully iterative — an explicit offset array plus a per-depth trace for the
//! backtrack — so large documents never grow the call stack.
//!
//! Greedy snake-following keeps matched runs maximal and contiguous, which
//! is what makes a one-word edit come out as one small change rather than a
//! rewrite. When the inputs share nothing, the result degenerates to a
//! single region deleting all of A and inserting all of B.

use std::ops::Range;

use snapline_doc::ContentUnit;

use crate::error::{ChangesetError, ChangesetResult};

/// One aligned run of the edit script, in unit indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Segment {
    pub a: Range<usize>,
    pub b: Range<usize>,
    pub matched: bool,
}

/// Align two unit sequences. Returns ordered segments that cover both index
/// spaces completely; matched and mismatched segments alternate.
pub(crate) fn shortest_edit_script(
    a: &[ContentUnit],
    b: &[ContentUnit],
) -> ChangesetResult<Vec<Segment>> {
    let pairs = matched_pairs(a, b)?;
    Ok(segments_from_pairs(&pairs, a.len(), b.len()))
}

/// The greedy forward search plus backtrack. Returns the matched index
/// pairs `(x, y)` with `a[x]` equal to `b[y]`, in increasing order.
fn matched_pairs(a: &[ContentUnit], b: &[ContentUnit]) -> ChangesetResult<Vec<(usize, usize)>> {
    let n = a.len();
    let m = b.len();
    if n == 0 || m == 0 {
        return Ok(Vec::new());
    }

    let max = n + m;
    let offset = max as isize;
    // v[k + offset] holds the furthest x reached on diagonal k.
    let mut v = vec![0usize; 2 * max + 1];
    // Snapshot of v before each depth, for the backtrack.
    let mut trace: Vec<Vec<usize>> = Vec::new();
    let mut reached = None;

    'search: for d in 0..=(max as isize) {
        trace.push(v.clone());
        let mut k = -d;
        while k <= d {
            let ki = (k + offset) as usize;
            // Extend from whichever neighbor diagonal got further; moving
            // down (an insertion) wins ties, so deletions come first in the
            // resulting script.
            let mut x = if k == -d || (k != d && v[ki - 1] < v[ki + 1]) {
                v[ki + 1]
            } else {
                v[ki - 1] + 1
            };
            let mut y = (x as isize - k) as usize;
            while x < n && y < m && a[x].same_content(&b[y]) {
                x += 1;
                y += 1;
            }
            v[ki] = x;
            if x >= n && y >= m {
                reached = Some(d);
                break 'search;
            }
            k += 2;
        }
    }

    // d = n + m always suffices, so this is unreachable for any input.
    let d_final = reached
        .ok_or_else(|| ChangesetError::Logic("edit-graph search did not reach the sink".into()))?;

    // Backtrack from (n, m), collecting snake matches in reverse.
    let mut pairs = Vec::new();
    let mut x = n;
    let mut y = m;
    for d in (1..=d_final).rev() {
        let vd = &trace[d as usize];
        let k = x as isize - y as isize;
        let ki = (k + offset) as usize;
        let down = k == -d || (k != d && vd[ki - 1] < vd[ki + 1]);
        let prev_k = if down { k + 1 } else { k - 1 };
        let prev_x = vd[(prev_k + offset) as usize];
        let prev_y = (prev_x as isize - prev_k) as usize;
        // The point just after the edit step; everything between it and
        // (x, y) is the snake.
        let (step_x, step_y) = if down {
            (prev_x, prev_y + 1)
        } else {
            (prev_x + 1, prev_y)
        };
        while x > step_x && y > step_y {
            pairs.push((x - 1, y - 1));
            x -= 1;
            y -= 1;
        }
        x = prev_x;
        y = prev_y;
    }
    // Initial snake along diagonal 0.
    while x > 0 && y > 0 {
        pairs.push((x - 1, y - 1));
        x -= 1;
        y -= 1;
    }
    pairs.reverse();
    Ok(pairs)
}

/// Convert matched index pairs into alternating segments covering both
/// sequences.
fn segments_from_pairs(pairs: &[(usize, usize)], n: usize, m: usize) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut ai = 0;
    let mut bi = 0;
    let mut i = 0;
    while i < pairs.len() {
        let (mx, my) = pairs[i];
        if mx > ai || my > bi {
            segments.push(Segment {
                a: ai..mx,
                b: bi..my,
                matched: false,
            });
        }
        // Extend the matched run as far as the pairs stay consecutive.
        let mut j = i + 1;
        while j < pairs.len() && pairs[j] == (pairs[j - 1].0 + 1, pairs[j - 1].1 + 1) {
            j += 1;
        }
        let run = j - i;
        segments.push(Segment {
            a: mx..mx + run,
            b: my..my + run,
            matched: true,
        });
        ai = mx + run;
        bi = my + run;
        i = j;
    }
    if ai < n || bi < m {
        segments.push(Segment {
            a: ai..n,
            b: bi..m,
            matched: false,
        });
    }
    segments
}
