//! Index file reader
//!
//! Memory-maps an index file written by [`IndexWriter`](super::IndexWriter),
//! validates it, and rebuilds the in-memory [`SusIndex`].

use crate::error::{Result, SusError};
use crate::index::sus::SusIndex;
use crate::index::types::{
    BuildStats, IndexHeader, Interval, INDEX_MAGIC, INDEX_VERSION, MAX_TEXT_LEN,
};
use crate::utils::{u32_at, u32_slice_at, u64_at};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

pub struct IndexReader;

impl IndexReader {
    /// Load an index file from disk
    pub fn open(path: &Path) -> Result<SusIndex> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        let index = Self::parse(&mmap)?;
        log::debug!("loaded index for {} positions from {}", index.len(), path.display());
        Ok(index)
    }

    /// Decode an index from its serialized bytes
    pub fn parse(data: &[u8]) -> Result<SusIndex> {
        let header = Self::read_header(data)?;
        let n = header.text_len as usize;
        let m = header.mui_count as usize;

        let expected = n
            .checked_mul(3)
            .and_then(|c| c.checked_add(m.checked_mul(2)?))
            .and_then(|c| c.checked_mul(4))
            .and_then(|c| c.checked_add(IndexHeader::SIZE))
            .ok_or_else(|| format_err("size overflow"))?;
        if data.len() != expected {
            return Err(format_err(format!(
                "expected {} bytes, found {}",
                expected,
                data.len()
            )));
        }

        let mut offset = IndexHeader::SIZE;
        let mut next_array = |count: usize| {
            let values = u32_slice_at(data, offset, count);
            offset += count * 4;
            values.ok_or_else(|| format_err("truncated array"))
        };
        let rank = next_array(n)?;
        let lcp = next_array(n)?;
        let pointers = next_array(n)?;
        let pairs = next_array(2 * m)?;

        let muis: Vec<Interval> = pairs
            .chunks_exact(2)
            .map(|pair| Interval {
                start: pair[0] as usize,
                end: pair[1] as usize,
            })
            .collect();

        Self::validate(n, &rank, &lcp, &pointers, &muis)?;

        let stats = BuildStats {
            text_len: n,
            mui_count: m,
            pushes: header.pushes as usize,
            evictions: header.evictions as usize,
            pointer_rewrites: header.pointer_rewrites as usize,
        };
        Ok(SusIndex::from_parts(rank, lcp, muis, pointers, stats))
    }

    fn read_header(data: &[u8]) -> Result<IndexHeader> {
        if data.len() < IndexHeader::SIZE {
            return Err(format_err("file too small"));
        }

        let field32 = |at| u32_at(data, at).ok_or_else(|| format_err("truncated header"));
        let field64 = |at| u64_at(data, at).ok_or_else(|| format_err("truncated header"));

        let header = IndexHeader {
            magic: field32(0)?,
            version: field32(4)?,
            text_len: field64(8)?,
            mui_count: field64(16)?,
            pushes: field64(24)?,
            evictions: field64(32)?,
            pointer_rewrites: field64(40)?,
            flags: field32(48)?,
        };

        if header.magic != INDEX_MAGIC {
            return Err(format_err("bad magic number"));
        }
        if header.version != INDEX_VERSION {
            return Err(format_err(format!("unsupported version {}", header.version)));
        }
        if header.text_len > MAX_TEXT_LEN as u64 || header.mui_count > header.text_len {
            return Err(format_err("header counts out of range"));
        }

        Ok(header)
    }

    /// Reject arrays that would make queries index out of bounds
    fn validate(
        n: usize,
        rank: &[u32],
        lcp: &[u32],
        pointers: &[u32],
        muis: &[Interval],
    ) -> Result<()> {
        if n > 0 && muis.is_empty() {
            return Err(format_err("non-empty text without MUIs"));
        }
        if rank.iter().any(|&x| x as usize >= n) {
            return Err(format_err("rank out of range"));
        }
        if lcp.iter().any(|&h| h as usize >= n.max(1)) {
            return Err(format_err("lcp out of range"));
        }
        if pointers.iter().any(|&s| s as usize >= muis.len()) {
            return Err(format_err("pointer out of range"));
        }
        let ordered = muis.windows(2).all(|w| w[0].start < w[1].start);
        if !ordered || muis.iter().any(|mui| mui.start > mui.end || mui.end >= n) {
            return Err(format_err("malformed MUI"));
        }
        Ok(())
    }
}

fn format_err(msg: impl Into<String>) -> SusError {
    SusError::Format(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::writer::IndexWriter;
    use tempfile::tempdir;

    fn serialized(text: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        IndexWriter::write_to(&mut buf, &SusIndex::build(text).unwrap()).unwrap();
        buf
    }

    #[test]
    fn test_reopen_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("text.sus");
        let text = b"how much wood would a woodchuck chuck";

        let index = SusIndex::build(text).unwrap();
        IndexWriter::write(&path, &index).unwrap();
        let loaded = IndexReader::open(&path).unwrap();

        assert_eq!(loaded, index);
        for p in 0..text.len() {
            assert_eq!(loaded.query(p).unwrap(), index.query(p).unwrap());
        }
    }

    #[test]
    fn test_empty_index() {
        let loaded = IndexReader::parse(&serialized(b"")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_bad_magic() {
        let mut data = serialized(b"banana");
        data[0] ^= 0xff;
        let err = IndexReader::parse(&data).unwrap_err();
        assert!(matches!(err, SusError::Format(ref m) if m == "bad magic number"));
    }

    #[test]
    fn test_bad_version() {
        let mut data = serialized(b"banana");
        data[4] = 9;
        assert!(matches!(IndexReader::parse(&data), Err(SusError::Format(_))));
    }

    #[test]
    fn test_truncated() {
        let data = serialized(b"banana");
        assert!(IndexReader::parse(&data[..data.len() - 1]).is_err());
        assert!(IndexReader::parse(&data[..10]).is_err());
    }

    #[test]
    fn test_pointer_out_of_range() {
        let mut data = serialized(b"banana");
        // first pointer entry
        let at = IndexHeader::SIZE + 2 * 6 * 4;
        data[at..at + 4].copy_from_slice(&7u32.to_le_bytes());
        let err = IndexReader::parse(&data).unwrap_err();
        assert_eq!(err.to_string(), "invalid index file: pointer out of range");
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        let err = IndexReader::open(&temp_dir.path().join("nope.sus")).unwrap_err();
        assert!(matches!(err, SusError::Io(_)));
    }
}
