//! Error types for index construction, queries, and index files.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SusError {
    /// Query position outside `[0, len)`
    #[error("position {position} out of range for text of length {len}")]
    PositionOutOfRange { position: usize, len: usize },

    /// Text longer than the index can address
    #[error("input of {len} bytes exceeds the maximum indexable length of {max}")]
    InputTooLarge { len: usize, max: usize },

    /// I/O error while reading or writing an index file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed index file
    #[error("invalid index file: {0}")]
    Format(String),
}

pub type Result<T> = std::result::Result<T, SusError>;
