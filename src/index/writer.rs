//! Index file writer
//!
//! Layout (all little-endian):
//! - header ([`IndexHeader`], 52 bytes)
//! - `rank`, `lcp`, `pointers`: `text_len` u32s each
//! - MUIs: `mui_count` pairs of u32 `(start, end)`

use crate::error::Result;
use crate::index::sus::SusIndex;
use crate::index::types::{IndexHeader, TextPos};
use crate::utils::{write_u32_le, write_u32_slice_le, write_u64_le};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a built index to a single file
pub struct IndexWriter;

impl IndexWriter {
    /// Write `index` to `path`, replacing any existing file
    pub fn write(path: &Path, index: &SusIndex) -> Result<()> {
        let mut file = BufWriter::with_capacity(65536, File::create(path)?);
        Self::write_to(&mut file, index)?;
        file.flush()?;
        log::debug!("wrote index for {} positions to {}", index.len(), path.display());
        Ok(())
    }

    /// Serialize `index` into any writer
    pub fn write_to<W: Write>(writer: &mut W, index: &SusIndex) -> Result<()> {
        let header = IndexHeader::new(index.stats());
        write_u32_le(writer, header.magic)?;
        write_u32_le(writer, header.version)?;
        write_u64_le(writer, header.text_len)?;
        write_u64_le(writer, header.mui_count)?;
        write_u64_le(writer, header.pushes)?;
        write_u64_le(writer, header.evictions)?;
        write_u64_le(writer, header.pointer_rewrites)?;
        write_u32_le(writer, header.flags)?;

        write_u32_slice_le(writer, index.rank())?;
        write_u32_slice_le(writer, index.lcp())?;
        write_u32_slice_le(writer, index.pointers())?;

        let pairs: Vec<TextPos> = index
            .muis()
            .iter()
            .flat_map(|mui| [mui.start as TextPos, mui.end as TextPos])
            .collect();
        write_u32_slice_le(writer, &pairs)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::types::INDEX_MAGIC;
    use crate::utils::{u32_at, u64_at};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_index() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("banana.sus");

        let index = SusIndex::build(b"banana").unwrap();
        IndexWriter::write(&path, &index).unwrap();

        let data = fs::read(&path).unwrap();
        assert_eq!(u32_at(&data, 0), Some(INDEX_MAGIC));
        assert_eq!(u64_at(&data, 8), Some(6));
        assert_eq!(u64_at(&data, 16), Some(2));
        // header + 3 arrays of 6 + 2 pairs
        assert_eq!(data.len(), IndexHeader::SIZE + 3 * 6 * 4 + 2 * 8);
    }

    #[test]
    fn test_write_empty() {
        let mut buf = Vec::new();
        IndexWriter::write_to(&mut buf, &SusIndex::build(b"").unwrap()).unwrap();
        assert_eq!(buf.len(), IndexHeader::SIZE);
    }
}
