//! Input text loading

use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::Path;

/// Read-only view of an input file, optionally truncated.
///
/// Non-empty files are memory-mapped; empty files (which cannot be mapped
/// on every platform) are represented without a mapping.
#[derive(Debug)]
pub struct InputText {
    mmap: Option<Mmap>,
    len: usize,
}

impl InputText {
    /// Map `path`, keeping at most `limit` leading bytes (`None` keeps all)
    pub fn open(path: &Path, limit: Option<usize>) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        let file_len = file
            .metadata()
            .with_context(|| format!("Failed to stat input file {}", path.display()))?
            .len();
        let file_len = usize::try_from(file_len)
            .with_context(|| format!("Input file {} is too large", path.display()))?;

        let len = limit.map_or(file_len, |limit| limit.min(file_len));
        if len == 0 {
            return Ok(Self { mmap: None, len: 0 });
        }

        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to map input file {}", path.display()))?;

        Ok(Self {
            mmap: Some(mmap),
            len,
        })
    }
}

impl Deref for InputText {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match &self.mmap {
            Some(mmap) => &mmap[..self.len],
            None => &[],
        }
    }
}
