use serde::{Deserialize, Serialize};
use std::fmt;

/// Position in the text as stored in the index arrays
pub type TextPos = u32;

/// Longest text the index can address. One position is reserved for the
/// sorting sentinel.
pub const MAX_TEXT_LEN: usize = TextPos::MAX as usize - 1;

/// Inclusive interval `[start, end]` of text positions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of positions covered
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    #[inline]
    pub fn contains(&self, p: usize) -> bool {
        self.start <= p && p <= self.end
    }

    /// Length of the smallest interval containing both `self` and `p`
    #[inline]
    pub fn cover(&self, p: usize) -> usize {
        self.end.max(p) - self.start.min(p) + 1
    }

    /// The smallest interval containing both `self` and `p`
    #[inline]
    pub fn extend_to(&self, p: usize) -> Interval {
        Interval {
            start: self.start.min(p),
            end: self.end.max(p),
        }
    }

    /// Slice of `text` this interval denotes
    pub fn slice<'t>(&self, text: &'t [u8]) -> &'t [u8] {
        &text[self.start..=self.end]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.start, self.end)
    }
}

/// Suffix sorting strategy
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SorterKind {
    /// Induced sorting (SA-IS), O(n)
    #[default]
    Sais,
    /// Rank doubling, O(n log^2 n) regardless of input
    Doubling,
    /// Direct suffix comparison, fast on ordinary text, slow on repetitive input
    Comparison,
}

/// Configuration for index construction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Suffix sorting strategy (default: sais)
    pub sorter: SorterKind,
    /// Texts longer than this are sorted with rayon (default: 100k)
    pub parallel_threshold: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            sorter: SorterKind::default(),
            parallel_threshold: 100_000,
        }
    }
}

/// Counters recorded while building the MUI stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildStats {
    /// Length of the indexed text
    pub text_len: usize,
    /// Minimal unique intervals left on the stack
    pub mui_count: usize,
    /// Total pushes onto the stack
    pub pushes: usize,
    /// Total pops from the stack
    pub evictions: usize,
    /// Pointer entries rewritten to a newer MUI
    pub pointer_rewrites: usize,
}

/// Magic number for index files
pub const INDEX_MAGIC: u32 = 0x5853_5553; // "SUSX" in little-endian

/// Current version of the index file format
pub const INDEX_VERSION: u32 = 1;

/// Header at the start of an index file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexHeader {
    /// Magic number (INDEX_MAGIC)
    pub magic: u32,
    /// Version number
    pub version: u32,
    /// Length of the indexed text
    pub text_len: u64,
    /// Number of (start, end) pairs after the per-position arrays
    pub mui_count: u64,
    pub pushes: u64,
    pub evictions: u64,
    pub pointer_rewrites: u64,
    /// Flags (reserved)
    pub flags: u32,
}

impl IndexHeader {
    /// Size of header in bytes
    pub const SIZE: usize = 4 + 4 + 8 * 5 + 4; // 52 bytes

    pub fn new(stats: &BuildStats) -> Self {
        Self {
            magic: INDEX_MAGIC,
            version: INDEX_VERSION,
            text_len: stats.text_len as u64,
            mui_count: stats.mui_count as u64,
            pushes: stats.pushes as u64,
            evictions: stats.evictions as u64,
            pointer_rewrites: stats.pointer_rewrites as u64,
            flags: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover() {
        let iv = Interval::new(3, 5);
        assert_eq!(iv.cover(4), 3);
        assert_eq!(iv.cover(3), 3);
        assert_eq!(iv.cover(0), 6);
        assert_eq!(iv.cover(9), 7);
    }

    #[test]
    fn test_extend_to() {
        let iv = Interval::new(3, 5);
        assert_eq!(iv.extend_to(4), iv);
        assert_eq!(iv.extend_to(1), Interval::new(1, 5));
        assert_eq!(iv.extend_to(8), Interval::new(3, 8));
        assert_eq!(iv.extend_to(8).len(), iv.cover(8));
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(2, 4).to_string(), "[2,4]");
    }

    #[test]
    fn test_config_json() {
        let config: IndexConfig =
            serde_json::from_str(r#"{"sorter":"comparison","parallel_threshold":10}"#).unwrap();
        assert_eq!(config.sorter, SorterKind::Comparison);
        assert_eq!(config.parallel_threshold, 10);

        let partial: IndexConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(partial.sorter, SorterKind::Sais);
        assert_eq!(partial.parallel_threshold, 100_000);
    }
}
