//! Incremental MUI stack construction
//!
//! Positions are processed left to right. Each step:
//! 1. looks up the MUI starting at the position (if any)
//! 2. moves the position's pointer at most one entry past its predecessor's
//! 3. pushes the new MUI, popping stack entries it makes useless and
//!    redirecting the trailing pointers it now serves better
//!
//! Every MUI is pushed once and popped at most once, and the backward scan
//! in step 3 only walks over positions whose pointers get rewritten, so the
//! whole pass is O(n) amortized.

use crate::index::mui::mui_at;
use crate::index::suffix_array::RankLcp;
use crate::index::sus::SusIndex;
use crate::index::types::{BuildStats, Interval, TextPos};

/// What a single [`IndexBuilder::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Position that was processed
    pub position: usize,
    /// MUI starting at `position`, if one was pushed
    pub pushed: Option<Interval>,
    /// Stack entries popped to make room for `pushed`
    pub evicted: usize,
    /// Earlier pointers redirected to `pushed`
    pub rewritten: usize,
}

/// Builds a [`SusIndex`] one position at a time
pub struct IndexBuilder {
    rank: Vec<TextPos>,
    lcp: Vec<TextPos>,
    /// MUIs in increasing start order; append and pop at the tail only
    muis: Vec<Interval>,
    /// `pointers[p]` indexes the leftmost MUI of minimum cover for `p`
    pointers: Vec<TextPos>,
    stats: BuildStats,
}

impl IndexBuilder {
    pub fn new(arrays: RankLcp) -> Self {
        let n = arrays.len();
        Self {
            rank: arrays.rank,
            lcp: arrays.lcp,
            muis: Vec::new(),
            pointers: Vec::with_capacity(n),
            stats: BuildStats {
                text_len: n,
                ..Default::default()
            },
        }
    }

    /// Number of positions processed so far
    pub fn processed(&self) -> usize {
        self.pointers.len()
    }

    /// Whether every position has been processed
    pub fn is_done(&self) -> bool {
        self.processed() == self.rank.len()
    }

    /// MUI stack as of the last processed position
    pub fn muis(&self) -> &[Interval] {
        &self.muis
    }

    /// Process the next position. Returns `None` once all are done.
    pub fn step(&mut self) -> Option<StepOutcome> {
        let i = self.processed();
        if i == self.rank.len() {
            return None;
        }

        let pointer = self.advance_pointer(i);
        self.pointers.push(pointer as TextPos);

        let mut outcome = StepOutcome {
            position: i,
            pushed: None,
            evicted: 0,
            rewritten: 0,
        };

        if let Some(new_mui) = mui_at(i, &self.rank, &self.lcp) {
            if !self.muis.is_empty() {
                // Rightmost j whose current best is no worse than the new MUI.
                // pointers[0] never changes, so the scan stops there.
                let mut j = i;
                while j > 0 && self.best_cover(j) > new_mui.cover(j) {
                    j -= 1;
                }

                if j == i {
                    outcome.evicted = self.pop_dominated(pointer, i, new_mui.cover(i));
                } else {
                    let anchor = self.pointers[j] as usize;
                    let bound = self.muis[anchor].cover(j);
                    outcome.evicted = self.pop_dominated(anchor, j, bound);

                    let target = self.muis.len() as TextPos;
                    for slot in &mut self.pointers[j + 1..=i] {
                        *slot = target;
                    }
                    outcome.rewritten = i - j;
                }
            }

            self.muis.push(new_mui);
            outcome.pushed = Some(new_mui);
            self.stats.pushes += 1;
        }

        self.stats.evictions += outcome.evicted;
        self.stats.pointer_rewrites += outcome.rewritten;
        Some(outcome)
    }

    /// Process all remaining positions and freeze the index
    pub fn finish(mut self) -> SusIndex {
        while self.step().is_some() {}

        self.stats.mui_count = self.muis.len();
        log::debug!(
            "built MUI stack: {} positions, {} MUIs, {} pushes, {} evictions, {} pointer rewrites",
            self.stats.text_len,
            self.stats.mui_count,
            self.stats.pushes,
            self.stats.evictions,
            self.stats.pointer_rewrites
        );

        SusIndex::from_parts(self.rank, self.lcp, self.muis, self.pointers, self.stats)
    }

    /// Pointer for position `i`: the predecessor's MUI or the one after it
    fn advance_pointer(&self, i: usize) -> usize {
        if i == 0 {
            return 0;
        }

        let prev = self.pointers[i - 1] as usize;
        if prev + 1 >= self.muis.len() || self.muis[prev].cover(i) <= self.muis[prev + 1].cover(i)
        {
            prev
        } else {
            prev + 1
        }
    }

    #[inline]
    fn best_cover(&self, j: usize) -> usize {
        self.muis[self.pointers[j] as usize].cover(j)
    }

    /// Pop tail entries above `anchor` whose cover at `at` exceeds `bound`
    fn pop_dominated(&mut self, anchor: usize, at: usize, bound: usize) -> usize {
        let mut evicted = 0;
        while let Some(tail) = self.muis.last() {
            if self.muis.len() - 1 == anchor || tail.cover(at) <= bound {
                break;
            }
            self.muis.pop();
            evicted += 1;
        }
        evicted
    }
}
