//! Cached random-access reader

use std::fs::File;
use std::path::Path;

use tracing::{debug, trace};

use crate::config::ReaderConfig;
use crate::error::{Error, Result};
use crate::source::RandomAccessSource;
use crate::window::CacheWindow;

/// Read-only random access into a byte sequence whose length may exceed
/// the platform's native indexing range, backed by a single cached window.
///
/// Every read is a synchronous, blocking call against the owned source;
/// `&mut self` on the read methods keeps reads and refills from ever
/// interleaving. Share a reader across threads only behind external
/// synchronization.
///
/// The primary read surface never panics and never returns an error.
/// [`byte_at`](Self::byte_at) yields the sentinel `0` and
/// [`bytes_in_range`](Self::bytes_in_range) an empty vector when a request
/// is out of bounds or the source fails, and [`has_error`](Self::has_error)
/// turns `true` and stays `true` for the rest of the reader's life. Bytes
/// returned by a failed call are not meaningful; discard the instance and
/// construct a new one to recover. The `try_` variants set the same flag
/// but additionally report what went wrong.
pub struct LargeByteReader<S = File> {
    source: S,
    len: u64,
    window: CacheWindow,
    has_error: bool,
}

impl LargeByteReader<File> {
    /// Open `path` read-only with the default configuration.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, ReaderConfig::default())
    }

    /// Open `path` read-only with an explicit configuration.
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: ReaderConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(?path, "opened source read-only");
        Self::from_source(file, config)
    }
}

impl<S: RandomAccessSource> LargeByteReader<S> {
    /// Build a reader over an already-open source.
    ///
    /// Queries the source length and performs the initial window fill of
    /// `min(length, capacity)` bytes at offset 0 (skipped for an empty
    /// source). Any failure here yields an error and no reader; a
    /// partially initialized instance never exists.
    pub fn from_source(mut source: S, config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        let len = source.size()?;
        let mut window = CacheWindow::new(config.cache_capacity);
        if len > 0 {
            window.refill(&mut source, len, 0)?;
        }
        debug!(
            len,
            capacity = config.cache_capacity,
            "reader initialized"
        );
        Ok(Self {
            source,
            len,
            window,
            has_error: false,
        })
    }

    /// Total byte count of the source, fixed at construction.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// True if the source holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Always true; the reader never mutates the underlying content.
    pub fn read_only(&self) -> bool {
        true
    }

    /// Sticky error flag. Once an out-of-bounds request or a source
    /// failure sets it, it is never cleared by the reader.
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Byte at `index`, or the sentinel `0` after any failure.
    ///
    /// A window hit costs no I/O; a miss inside the valid range refills
    /// the window starting at `index`.
    pub fn byte_at(&mut self, index: u64) -> u8 {
        self.try_byte_at(index).unwrap_or(0)
    }

    /// Fallible variant of [`byte_at`](Self::byte_at). Sets the sticky
    /// error flag exactly like the sentinel variant.
    pub fn try_byte_at(&mut self, index: u64) -> Result<u8> {
        self.lookup_byte(index).map_err(|err| self.record_error(err))
    }

    /// Copy of the inclusive range `first..=last`, or an empty vector
    /// after any failure.
    ///
    /// A request fully inside the window is served from memory without
    /// touching the window. A miss inside the valid range reads exactly
    /// the requested bytes from the source and then refills the window
    /// with the region immediately following the range, so a subsequent
    /// sequential request starts on a hit. A range that crosses the end
    /// of the source is rejected whole; no partial read is attempted.
    pub fn bytes_in_range(&mut self, first: u64, last: u64) -> Vec<u8> {
        self.try_bytes_in_range(first, last).unwrap_or_default()
    }

    /// Fallible variant of [`bytes_in_range`](Self::bytes_in_range). Sets
    /// the sticky error flag exactly like the sentinel variant.
    pub fn try_bytes_in_range(&mut self, first: u64, last: u64) -> Result<Vec<u8>> {
        self.lookup_range(first, last)
            .map_err(|err| self.record_error(err))
    }

    /// Consume the reader and release the underlying source.
    ///
    /// Ownership makes double-close and access after close compile
    /// errors rather than runtime states.
    pub fn close(self) {
        drop(self);
    }

    /// Consume the reader and hand back the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }

    fn record_error(&mut self, err: Error) -> Error {
        debug!(%err, "read failed, error flag set");
        self.has_error = true;
        err
    }

    fn lookup_byte(&mut self, index: u64) -> Result<u8> {
        if self.window.contains_index(index) {
            return Ok(self.window.byte_at(index));
        }
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        trace!(index, "window miss, refilling at index");
        self.window.refill(&mut self.source, self.len, index)?;
        Ok(self.window.byte_at(index))
    }

    fn lookup_range(&mut self, first: u64, last: u64) -> Result<Vec<u8>> {
        if first > last {
            return Err(Error::InvalidRange { first, last });
        }
        if self.window.contains_range(first, last) {
            return Ok(self.window.copy_range(first, last));
        }
        if last >= self.len {
            return Err(Error::RangeOutOfBounds {
                first,
                last,
                len: self.len,
            });
        }

        trace!(first, last, "window miss, direct read with read-ahead");
        let width = last - first + 1;
        let mut bytes = vec![0u8; width as usize];
        self.source.read_exact_at(first, &mut bytes)?;

        // Read-ahead: sequential scans wider than the window tend to ask
        // for the region right after this one next.
        let next = last + 1;
        if next < self.len {
            self.window.refill(&mut self.source, self.len, next)?;
        }
        Ok(bytes)
    }
}
