//! Cached random-access reads over file-backed byte sequences whose length
//! exceeds the host platform's native 32-bit indexing range.
//!
//! A [`LargeByteReader`] owns one open [`RandomAccessSource`] handle and a
//! single contiguous in-memory cache window. Single-byte and ranged reads
//! are answered from the window when it covers the request; a miss refills
//! the window (or, for ranged reads, reads the range directly and positions
//! the window just past it for the next sequential request). Failed reads
//! never panic or return errors through the primary surface: they record a
//! sticky error flag and yield a sentinel value instead.
//!
//! The reader is read-only by contract and single-threaded by design; wrap
//! it in external synchronization if it must be shared.

pub mod config;
pub mod error;
pub mod reader;
pub mod source;

mod window;

pub use config::{DEFAULT_CACHE_CAPACITY, ReaderConfig};
pub use error::{Error, Result};
pub use reader::LargeByteReader;
pub use source::RandomAccessSource;

/// Library version, taken from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
