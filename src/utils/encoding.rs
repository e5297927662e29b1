use std::io::{self, Write};

/// Write a u32 in little-endian format
pub fn write_u32_le<W: Write>(writer: &mut W, value: u32) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

/// Write a u64 in little-endian format
pub fn write_u64_le<W: Write>(writer: &mut W, value: u64) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

/// Write a slice of u32s in little-endian format, batching small writes
pub fn write_u32_slice_le<W: Write>(writer: &mut W, values: &[u32]) -> io::Result<()> {
    let mut buffer = Vec::with_capacity(8 * 1024);
    for &value in values {
        buffer.extend_from_slice(&value.to_le_bytes());
        if buffer.len() >= 8 * 1024 {
            writer.write_all(&buffer)?;
            buffer.clear();
        }
    }
    if !buffer.is_empty() {
        writer.write_all(&buffer)?;
    }
    Ok(())
}

/// Read a little-endian u32 at `offset`, if in bounds
#[inline]
pub fn u32_at(buf: &[u8], offset: usize) -> Option<u32> {
    let bytes = buf.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_le_bytes(bytes.try_into().ok()?))
}

/// Read a little-endian u64 at `offset`, if in bounds
#[inline]
pub fn u64_at(buf: &[u8], offset: usize) -> Option<u64> {
    let bytes = buf.get(offset..offset.checked_add(8)?)?;
    Some(u64::from_le_bytes(bytes.try_into().ok()?))
}

/// Decode `count` consecutive little-endian u32s starting at `offset`
pub fn u32_slice_at(buf: &[u8], offset: usize, count: usize) -> Option<Vec<u32>> {
    let end = offset.checked_add(count.checked_mul(4)?)?;
    let bytes = buf.get(offset..end)?;
    Some(
        bytes
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect(),
    )
}
