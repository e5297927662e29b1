//! The shortest unique substring index

use crate::error::{Result, SusError};
use crate::index::build::IndexBuilder;
use crate::index::suffix_array::{sorter_for, RankLcp, SuffixSorter};
use crate::index::types::{BuildStats, IndexConfig, Interval, TextPos, MAX_TEXT_LEN};
use crate::query::{NaiveVerifier, QueryExecutor};
use std::time::Instant;

/// Immutable index answering SUS queries over one text.
///
/// Holds the rank and LCP arrays, the stack of minimal unique intervals,
/// and one pointer per text position into that stack. The text itself is
/// not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SusIndex {
    rank: Vec<TextPos>,
    lcp: Vec<TextPos>,
    muis: Vec<Interval>,
    pointers: Vec<TextPos>,
    stats: BuildStats,
}

impl SusIndex {
    /// Build an index with the default configuration
    pub fn build(text: &[u8]) -> Result<Self> {
        Self::build_with(text, &IndexConfig::default())
    }

    /// Build an index with the given configuration
    pub fn build_with(text: &[u8], config: &IndexConfig) -> Result<Self> {
        let sorter = sorter_for(config);
        Self::build_with_sorter(text, sorter.as_ref())
    }

    /// Build an index using a caller-supplied suffix sorter
    pub fn build_with_sorter<S>(text: &[u8], sorter: &S) -> Result<Self>
    where
        S: SuffixSorter + ?Sized,
    {
        check_text_len(text.len())?;

        let start = Instant::now();
        let sa = sorter.sort_suffixes(text);
        log::info!("sorted {} suffixes in {:?}", sa.len(), start.elapsed());

        let arrays = RankLcp::build(text, &sa);
        drop(sa);

        let start = Instant::now();
        let index = IndexBuilder::new(arrays).finish();
        log::info!(
            "built SUS index ({} MUIs) in {:?}",
            index.muis.len(),
            start.elapsed()
        );

        Ok(index)
    }

    pub(crate) fn from_parts(
        rank: Vec<TextPos>,
        lcp: Vec<TextPos>,
        muis: Vec<Interval>,
        pointers: Vec<TextPos>,
        stats: BuildStats,
    ) -> Self {
        debug_assert_eq!(rank.len(), pointers.len());
        debug_assert!(rank.is_empty() || !muis.is_empty());
        Self {
            rank,
            lcp,
            muis,
            pointers,
            stats,
        }
    }

    /// Length of the indexed text
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    pub fn rank(&self) -> &[TextPos] {
        &self.rank
    }

    pub fn lcp(&self) -> &[TextPos] {
        &self.lcp
    }

    /// Minimal unique intervals kept on the stack, by increasing start
    pub fn muis(&self) -> &[Interval] {
        &self.muis
    }

    /// Per-position index into [`muis`](Self::muis)
    pub fn pointers(&self) -> &[TextPos] {
        &self.pointers
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Approximate heap size of the index
    pub fn memory_bytes(&self) -> usize {
        (self.rank.len() + self.lcp.len() + self.pointers.len()) * size_of::<TextPos>()
            + self.muis.len() * size_of::<Interval>()
    }

    /// Reject positions outside the text
    pub fn check_position(&self, p: usize) -> Result<()> {
        if p >= self.len() {
            return Err(SusError::PositionOutOfRange {
                position: p,
                len: self.len(),
            });
        }
        Ok(())
    }

    /// All shortest unique substrings containing `p`, by increasing start
    pub fn query(&self, p: usize) -> Result<Vec<Interval>> {
        QueryExecutor::new(self).all(p)
    }

    /// The leftmost shortest unique substring containing `p`
    pub fn lm_sus(&self, p: usize) -> Result<Interval> {
        QueryExecutor::new(self).leftmost(p)
    }

    /// The leftmost shortest unique substring for every position
    pub fn lm_sus_all(&self) -> Vec<Interval> {
        QueryExecutor::new(self).leftmost_all()
    }

    /// Same answer as [`query`](Self::query), computed without the MUI stack
    pub fn query_naive(&self, p: usize) -> Result<Vec<Interval>> {
        NaiveVerifier::new(self).query(p)
    }
}

/// Reject texts whose positions do not fit in [`TextPos`]
fn check_text_len(len: usize) -> Result<()> {
    if len > MAX_TEXT_LEN {
        return Err(SusError::InputTooLarge {
            len,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(())
}
