//! Suffix sorting
//!
//! Three interchangeable sorters implement [`SuffixSorter`]:
//! 1. [`SaisSorter`] induced sorting in linear time (the default)
//! 2. [`PrefixDoublingSorter`] ranks suffixes by their first 2^k bytes,
//!    doubling k each round, so repetitive text cannot blow up the cost
//! 3. [`ComparisonSorter`] sorts positions by comparing whole suffixes
//!
//! The last two use rayon's parallel sort once the text exceeds a threshold.

use crate::index::suffix_array::sais::SaisSorter;
use crate::index::types::{IndexConfig, SorterKind, TextPos};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Produces the suffix array of a byte string.
///
/// The result is a permutation of `0..text.len()` ordered by the
/// lexicographic order of the suffixes starting at each position, where a
/// proper prefix sorts before the longer suffix.
pub trait SuffixSorter {
    fn sort_suffixes(&self, text: &[u8]) -> Vec<TextPos>;
}

/// Build the sorter selected by `config`
pub fn sorter_for(config: &IndexConfig) -> Box<dyn SuffixSorter + Send + Sync> {
    match config.sorter {
        SorterKind::Sais => Box::new(SaisSorter),
        SorterKind::Doubling => Box::new(PrefixDoublingSorter::new(config.parallel_threshold)),
        SorterKind::Comparison => Box::new(ComparisonSorter::new(config.parallel_threshold)),
    }
}

/// Manber-Myers style prefix doubling.
///
/// Time: O(log n) sorting rounds, O(n log^2 n) worst case
/// Space: O(n) for the rank and scratch arrays
#[derive(Debug, Clone, Copy)]
pub struct PrefixDoublingSorter {
    parallel_threshold: usize,
}

impl PrefixDoublingSorter {
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }
}

impl Default for PrefixDoublingSorter {
    fn default() -> Self {
        Self::new(IndexConfig::default().parallel_threshold)
    }
}

impl SuffixSorter for PrefixDoublingSorter {
    fn sort_suffixes(&self, text: &[u8]) -> Vec<TextPos> {
        let n = text.len();
        if n == 0 {
            return Vec::new();
        }

        let mut sa: Vec<TextPos> = (0..n as TextPos).collect();
        // 0 is reserved for "past the end", so real ranks start at 1
        let mut rank: Vec<TextPos> = text.iter().map(|&b| b as TextPos + 1).collect();
        let mut next = vec![0 as TextPos; n];
        let parallel = n > self.parallel_threshold;

        let mut k = 1usize;
        loop {
            let key = |i: TextPos| -> (TextPos, TextPos) {
                let i = i as usize;
                let second = if i + k < n { rank[i + k] } else { 0 };
                (rank[i], second)
            };

            if parallel {
                sa.par_sort_unstable_by_key(|&i| key(i));
            } else {
                sa.sort_unstable_by_key(|&i| key(i));
            }

            next[sa[0] as usize] = 1;
            for t in 1..n {
                let bump = (key(sa[t - 1]) < key(sa[t])) as TextPos;
                next[sa[t] as usize] = next[sa[t - 1] as usize] + bump;
            }
            std::mem::swap(&mut rank, &mut next);

            // All ranks distinct: order is final
            if rank[sa[n - 1] as usize] as usize == n || k >= n {
                break;
            }
            k *= 2;
        }

        sa
    }
}

/// Sorts positions by comparing the suffixes they point to.
///
/// Time: O(n log n) comparisons, each up to O(n) on repetitive text
#[derive(Debug, Clone, Copy)]
pub struct ComparisonSorter {
    parallel_threshold: usize,
}

impl ComparisonSorter {
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }
}

impl Default for ComparisonSorter {
    fn default() -> Self {
        Self::new(IndexConfig::default().parallel_threshold)
    }
}

impl SuffixSorter for ComparisonSorter {
    fn sort_suffixes(&self, text: &[u8]) -> Vec<TextPos> {
        let n = text.len();
        let mut sa: Vec<TextPos> = (0..n as TextPos).collect();

        if n > self.parallel_threshold {
            sa.par_sort_unstable_by(|&a, &b| compare_suffixes(text, a as usize, b as usize));
        } else {
            sa.sort_unstable_by(|&a, &b| compare_suffixes(text, a as usize, b as usize));
        }

        sa
    }
}

/// Compare two suffixes lexicographically
#[inline]
fn compare_suffixes(text: &[u8], a: usize, b: usize) -> Ordering {
    text[a..].cmp(&text[b..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_sa(text: &[u8]) -> Vec<TextPos> {
        let mut sa: Vec<TextPos> = (0..text.len() as TextPos).collect();
        sa.sort_by(|&a, &b| text[a as usize..].cmp(&text[b as usize..]));
        sa
    }

    #[test]
    fn test_banana() {
        // 5: a
        // 3: ana
        // 1: anana
        // 0: banana
        // 4: na
        // 2: nana
        let expected = vec![5, 3, 1, 0, 4, 2];
        assert_eq!(PrefixDoublingSorter::default().sort_suffixes(b"banana"), expected);
        assert_eq!(ComparisonSorter::default().sort_suffixes(b"banana"), expected);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(PrefixDoublingSorter::default().sort_suffixes(b"").is_empty());
        assert!(ComparisonSorter::default().sort_suffixes(b"").is_empty());
        assert_eq!(PrefixDoublingSorter::default().sort_suffixes(b"x"), vec![0]);
    }

    #[test]
    fn test_repetitive() {
        let text = vec![b'a'; 257];
        let expected: Vec<TextPos> = (0..257).rev().collect();
        assert_eq!(PrefixDoublingSorter::default().sort_suffixes(&text), expected);
    }

    #[test]
    fn test_high_bytes() {
        let text = [0xffu8, 0x00, 0xff, 0x80, 0x00, 0xff];
        assert_eq!(
            PrefixDoublingSorter::default().sort_suffixes(&text),
            naive_sa(&text)
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text: Vec<u8> = (0..2000u32).map(|i| b"acgt"[(i * i % 7 % 4) as usize]).collect();
        let expected = naive_sa(&text);
        assert_eq!(PrefixDoublingSorter::new(0).sort_suffixes(&text), expected);
        assert_eq!(ComparisonSorter::new(0).sort_suffixes(&text), expected);
    }

    #[test]
    fn test_sorter_for_config() {
        let config = IndexConfig {
            sorter: SorterKind::Comparison,
            ..Default::default()
        };
        assert_eq!(sorter_for(&config).sort_suffixes(b"abab"), vec![2, 0, 3, 1]);

        let default = sorter_for(&IndexConfig::default());
        assert_eq!(default.sort_suffixes(b"abab"), vec![2, 0, 3, 1]);
    }
}
