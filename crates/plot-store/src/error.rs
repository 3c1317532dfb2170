// File: crates/plot-store/src/error.rs
// Summary: Record store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file does not exist yet.
    #[error("no saved graphs found")]
    NoRecords,

    #[error("invalid record number {index} (there are {len} saved graphs)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("record {index} is malformed: {reason}")]
    Malformed { index: usize, reason: String },

    #[error("record file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("record file is not valid CSV: {0}")]
    Csv(#[from] csv::Error),
}
