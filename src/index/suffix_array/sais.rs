//! Linear-time suffix sorting by induced sorting (SA-IS)
//!
//! Suffixes are classified as S-type (smaller than the next suffix) or
//! L-type. The leftmost S-type suffixes of each run (LMS) are sorted first,
//! recursively when their substrings collide, and the order of every other
//! suffix is induced from them in two bucket scans.
//!
//! Time: O(n)
//! Space: O(n) words, plus the recursion on at most n/2 LMS names

use crate::index::suffix_array::builder::SuffixSorter;
use crate::index::types::TextPos;

const EMPTY: u32 = u32::MAX;

/// Bytes map to 1..=256; 0 is the sentinel
const BYTE_ALPHABET: usize = 257;

/// SA-IS suffix sorter
#[derive(Debug, Clone, Copy, Default)]
pub struct SaisSorter;

impl SuffixSorter for SaisSorter {
    fn sort_suffixes(&self, text: &[u8]) -> Vec<TextPos> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut s: Vec<u32> = Vec::with_capacity(text.len() + 1);
        s.extend(text.iter().map(|&b| b as u32 + 1));
        s.push(0);

        let mut sa = sais(&s, BYTE_ALPHABET);
        // The sentinel suffix always sorts first
        sa.remove(0);
        sa
    }
}

/// Suffix array of `s`, whose last symbol is a unique minimum
fn sais(s: &[u32], alphabet: usize) -> Vec<u32> {
    let n = s.len();
    if n == 1 {
        return vec![0];
    }

    let stype = classify(s);
    let counts = bucket_sizes(s, alphabet);
    let lms_positions: Vec<usize> = (1..n).filter(|&i| is_lms(&stype, i)).collect();

    // Induce from LMS positions in text order to sort the LMS substrings
    let mut sa = vec![EMPTY; n];
    place_lms(s, &mut sa, &counts, lms_positions.iter().copied());
    induce(s, &mut sa, &stype, &counts);

    let mut names = vec![EMPTY; n];
    let mut name = 0u32;
    let mut prev: Option<usize> = None;
    for &p in &sa {
        let p = p as usize;
        if !is_lms(&stype, p) {
            continue;
        }
        if let Some(q) = prev {
            if !lms_substrings_equal(s, &stype, q, p) {
                name += 1;
            }
        }
        names[p] = name;
        prev = Some(p);
    }

    let reduced: Vec<u32> = lms_positions.iter().map(|&p| names[p]).collect();
    drop(names);

    let distinct = name as usize + 1;
    let reduced_sa = if distinct == reduced.len() {
        let mut order = vec![0u32; reduced.len()];
        for (i, &x) in reduced.iter().enumerate() {
            order[x as usize] = i as u32;
        }
        order
    } else {
        sais(&reduced, distinct)
    };

    // Induce again from the LMS suffixes in their final order
    sa.fill(EMPTY);
    let sorted_lms = reduced_sa.iter().map(|&r| lms_positions[r as usize]);
    place_lms(s, &mut sa, &counts, sorted_lms.rev());
    induce(s, &mut sa, &stype, &counts);

    sa
}

/// `true` for S-type suffixes
fn classify(s: &[u32]) -> Vec<bool> {
    let n = s.len();
    let mut stype = vec![false; n];
    stype[n - 1] = true;
    for i in (0..n - 1).rev() {
        stype[i] = s[i] < s[i + 1] || (s[i] == s[i + 1] && stype[i + 1]);
    }
    stype
}

#[inline]
fn is_lms(stype: &[bool], i: usize) -> bool {
    i > 0 && stype[i] && !stype[i - 1]
}

/// Compare the LMS substrings starting at `a` and `b`, up to and
/// including the next LMS position
fn lms_substrings_equal(s: &[u32], stype: &[bool], a: usize, b: usize) -> bool {
    let last = s.len() - 1;
    if a == last || b == last {
        return a == b;
    }

    let mut i = 0;
    loop {
        if s[a + i] != s[b + i] || stype[a + i] != stype[b + i] {
            return false;
        }
        if i > 0 {
            let (end_a, end_b) = (is_lms(stype, a + i), is_lms(stype, b + i));
            if end_a || end_b {
                return end_a && end_b;
            }
        }
        i += 1;
    }
}

fn bucket_sizes(s: &[u32], alphabet: usize) -> Vec<usize> {
    let mut counts = vec![0usize; alphabet];
    for &c in s {
        counts[c as usize] += 1;
    }
    counts
}

fn bucket_heads(counts: &[usize]) -> Vec<usize> {
    let mut sum = 0;
    counts
        .iter()
        .map(|&c| {
            let head = sum;
            sum += c;
            head
        })
        .collect()
}

fn bucket_tails(counts: &[usize]) -> Vec<usize> {
    let mut sum = 0;
    counts
        .iter()
        .map(|&c| {
            sum += c;
            sum
        })
        .collect()
}

/// Insert `positions` at their bucket tails, each in front of the previous
fn place_lms(s: &[u32], sa: &mut [u32], counts: &[usize], positions: impl Iterator<Item = usize>) {
    let mut tails = bucket_tails(counts);
    for p in positions {
        let c = s[p] as usize;
        tails[c] -= 1;
        sa[tails[c]] = p as u32;
    }
}

/// L-type suffixes left to right from bucket heads, then S-type right to
/// left from bucket tails
fn induce(s: &[u32], sa: &mut [u32], stype: &[bool], counts: &[usize]) {
    let mut heads = bucket_heads(counts);
    for i in 0..sa.len() {
        let j = sa[i];
        if j != EMPTY && j > 0 && !stype[j as usize - 1] {
            let c = s[j as usize - 1] as usize;
            sa[heads[c]] = j - 1;
            heads[c] += 1;
        }
    }

    let mut tails = bucket_tails(counts);
    for i in (0..sa.len()).rev() {
        let j = sa[i];
        if j != EMPTY && j > 0 && stype[j as usize - 1] {
            let c = s[j as usize - 1] as usize;
            tails[c] -= 1;
            sa[tails[c]] = j - 1;
        }
    }
}
