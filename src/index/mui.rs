//! Minimal unique interval detection

use crate::index::types::{Interval, TextPos};

/// Length of the shortest unique substring starting at the suffix ranked `x`.
///
/// One more than the longest prefix shared with either sorted neighbour. May
/// exceed the remaining suffix length when that suffix is a proper prefix of
/// another one, in which case nothing starting there is unique.
#[inline]
fn shortest_unique_len(x: usize, lcp: &[TextPos]) -> usize {
    let right = lcp.get(x + 1).copied().unwrap_or(0);
    lcp[x].max(right) as usize + 1
}

/// Length of the MUI starting at `p`, or `None` if no MUI starts there.
///
/// A unique substring starting at `p` is dropped when the one starting at
/// `p + 1` is strictly shorter, since it then ends no later and the
/// interval at `p` is not minimal.
pub fn mui_len(p: usize, rank: &[TextPos], lcp: &[TextPos]) -> Option<usize> {
    let n = rank.len();
    let len = shortest_unique_len(rank[p] as usize, lcp);
    if p + len > n {
        return None;
    }

    if p + 1 < n {
        let right = shortest_unique_len(rank[p + 1] as usize, lcp);
        if right < len {
            return None;
        }
    }

    Some(len)
}

/// The MUI starting at `p`, if any
#[inline]
pub fn mui_at(p: usize, rank: &[TextPos], lcp: &[TextPos]) -> Option<Interval> {
    mui_len(p, rank, lcp).map(|len| Interval::new(p, p + len - 1))
}
