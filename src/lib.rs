//! # SUS - Shortest Unique Substring Queries
//!
//! For a fixed byte string, `sus` answers "which shortest substrings that
//! contain position `p` occur exactly once?" for any `p`, after a linear
//! pass over the suffix array.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Suffix sorting, rank/LCP arrays, the MUI stack, index files
//! - [`query`] - Query execution and the naive cross-check
//! - [`output`] - Result formatting (text and JSON)
//! - [`utils`] - Input mapping, encoding helpers, progress spinner
//!
//! ## Quick Start
//!
//! ```
//! use sus::index::{Interval, SusIndex};
//!
//! let index = SusIndex::build(b"banana").unwrap();
//!
//! // "b" alone is unique
//! assert_eq!(index.query(0).unwrap(), vec![Interval::new(0, 0)]);
//!
//! // Two shortest unique substrings contain position 2: "ban" and "nan"
//! assert_eq!(
//!     index.query(2).unwrap(),
//!     vec![Interval::new(0, 2), Interval::new(2, 4)]
//! );
//! assert_eq!(index.lm_sus(2).unwrap(), Interval::new(0, 2));
//! ```
//!
//! ## How it works
//!
//! 1. **Suffix sorting** - any [`SuffixSorter`](index::suffix_array::SuffixSorter)
//! 2. **Rank/LCP** - Kasai's linear scan
//! 3. **MUI stack** - one left-to-right pass keeps only the minimal unique
//!    intervals that can still answer a query, plus one pointer per position
//!    to the leftmost best one
//! 4. **Queries** - start at the pointer and walk forward while ties last,
//!    O(k) for k answers

pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use error::{Result, SusError};
pub use index::{Interval, SusIndex};
