//! Whole-text consistency check between the index and the naive verifier

use crate::index::sus::SusIndex;
use crate::index::types::Interval;
use crate::query::{NaiveVerifier, QueryExecutor};
use rayon::prelude::*;
use serde::Serialize;

/// A position where the index and the naive verifier disagree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub position: usize,
    /// Answer from the MUI stack
    pub index: Vec<Interval>,
    /// Answer from the naive scan
    pub naive: Vec<Interval>,
}

/// Compare both query paths at every position.
///
/// Positions are checked in parallel; the lowest mismatching position is
/// reported. `None` means the two agree everywhere.
pub fn verify_all(index: &SusIndex) -> Option<Mismatch> {
    let executor = QueryExecutor::new(index);
    let naive = NaiveVerifier::new(index);

    (0..index.len()).into_par_iter().find_map_first(|p| {
        // p < len, so neither query can fail
        let fast = executor.all(p).ok()?;
        let slow = naive.query(p).ok()?;
        (fast != slow).then(|| Mismatch {
            position: p,
            index: fast,
            naive: slow,
        })
    })
}
