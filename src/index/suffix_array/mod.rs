//! Suffix array module
//!
//! Provides the two leaf stages of index construction:
//!
//! - `builder`: suffix sorting behind the [`SuffixSorter`] trait
//! - `sais`: the linear-time default sorter
//! - `lcp`: rank (inverse suffix array) and LCP arrays via Kasai's scan
//!
//! The suffix array itself is transient: it is consumed by [`RankLcp::build`]
//! and dropped before the MUI pass starts.

pub mod builder;
pub mod lcp;
pub mod sais;

// Re-exports for convenience
pub use builder::{sorter_for, ComparisonSorter, PrefixDoublingSorter, SuffixSorter};
pub use lcp::RankLcp;
pub use sais::SaisSorter;
