//! Rank and LCP arrays
//!
//! Derived from the text and its suffix array with Kasai's scan: positions
//! are visited in text order, and the common prefix length carried from
//! one position to the next drops by at most one, so the total number of
//! byte comparisons is O(n).

use crate::index::types::TextPos;

/// Inverse suffix array and adjacent longest-common-prefix lengths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankLcp {
    /// `rank[i]` is the position of suffix `i` in sorted order
    pub rank: Vec<TextPos>,
    /// `lcp[x]` is the common prefix length of the suffixes ranked `x - 1`
    /// and `x`; `lcp[0] = 0`
    pub lcp: Vec<TextPos>,
}

impl RankLcp {
    /// Build rank and LCP arrays. `sa` must be the suffix array of `text`.
    pub fn build(text: &[u8], sa: &[TextPos]) -> Self {
        let n = text.len();
        debug_assert_eq!(sa.len(), n);

        if n == 0 {
            return Self {
                rank: Vec::new(),
                lcp: Vec::new(),
            };
        }

        let mut rank = vec![0 as TextPos; n];
        for (x, &i) in sa.iter().enumerate() {
            rank[i as usize] = x as TextPos;
        }

        let mut lcp = vec![0 as TextPos; n];
        let mut h = 0usize;
        for i in 0..n {
            let x = rank[i] as usize;
            if x == 0 {
                h = 0;
                continue;
            }

            let j = sa[x - 1] as usize;
            while i + h < n && j + h < n && text[i + h] == text[j + h] {
                h += 1;
            }
            lcp[x] = h as TextPos;
            h = h.saturating_sub(1);
        }

        Self { rank, lcp }
    }

    pub fn len(&self) -> usize {
        self.rank.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rank.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::suffix_array::builder::{PrefixDoublingSorter, SuffixSorter};

    fn build(text: &[u8]) -> RankLcp {
        let sa = PrefixDoublingSorter::default().sort_suffixes(text);
        RankLcp::build(text, &sa)
    }

    #[test]
    fn test_banana() {
        let arrays = build(b"banana");
        assert_eq!(arrays.rank, vec![3, 2, 5, 1, 4, 0]);
        assert_eq!(arrays.lcp, vec![0, 1, 3, 0, 0, 2]);
    }

    #[test]
    fn test_empty() {
        let arrays = RankLcp::build(b"", &[]);
        assert!(arrays.is_empty());
        assert!(arrays.lcp.is_empty());
    }

    #[test]
    fn test_single() {
        let arrays = build(b"q");
        assert_eq!(arrays.rank, vec![0]);
        assert_eq!(arrays.lcp, vec![0]);
    }

    #[test]
    fn test_matches_direct_comparison() {
        let text = b"mississippi$mississippi";
        let sa = PrefixDoublingSorter::default().sort_suffixes(text);
        let arrays = RankLcp::build(text, &sa);

        for x in 1..text.len() {
            let a = &text[sa[x - 1] as usize..];
            let b = &text[sa[x] as usize..];
            let common = a.iter().zip(b).take_while(|(l, r)| l == r).count();
            assert_eq!(arrays.lcp[x] as usize, common, "rank {}", x);
        }
        for (i, &x) in arrays.rank.iter().enumerate() {
            assert_eq!(sa[x as usize] as usize, i);
        }
    }
}
