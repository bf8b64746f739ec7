//! Error types for cached reader operations

use std::io;
use thiserror::Error;

/// Result type for largebytes operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: u64, len: u64 },

    #[error("Range {first}..={last} out of bounds for length {len}")]
    RangeOutOfBounds { first: u64, last: u64, len: u64 },

    #[error("Invalid range: first {first} > last {last}")]
    InvalidRange { first: u64, last: u64 },

    #[error("Cache capacity must be non-zero")]
    InvalidCapacity,
}
