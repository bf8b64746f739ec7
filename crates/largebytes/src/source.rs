//! Random-access source abstraction

use std::io::{Read, Seek, SeekFrom};

use crate::error::Result;

/// A fixed-length, byte-addressable resource supporting length queries and
/// exact-length reads at arbitrary offsets.
///
/// Blanket-implemented for any `Read + Seek` handle, so `File`,
/// `BufReader<File>` and in-memory `Cursor`s all qualify. A seek and the
/// read that follows it form one unit; the reader never interleaves two
/// in-flight reads against the same source.
pub trait RandomAccessSource {
    /// Total length of the source in bytes.
    fn size(&mut self) -> Result<u64>;

    /// Fill `buf` with exactly `buf.len()` bytes starting at `offset`.
    ///
    /// A short source is an error, never a partial success.
    fn read_exact_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<()>;
}

impl<T: Read + Seek> RandomAccessSource for T {
    fn size(&mut self) -> Result<u64> {
        Ok(self.seek(SeekFrom::End(0))?)
    }

    fn read_exact_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<()> {
        self.seek(SeekFrom::Start(offset))?;
        self.read_exact(buf)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn cursor_reports_size_and_reads_at_offset() {
        let mut cursor = Cursor::new(vec![10u8, 20, 30, 40, 50]);
        assert_eq!(cursor.size().unwrap(), 5);

        let mut buf = [0u8; 2];
        cursor.read_exact_at(2, &mut buf).unwrap();
        assert_eq!(buf, [30, 40]);

        // size query must not disturb subsequent positioned reads
        assert_eq!(cursor.size().unwrap(), 5);
        cursor.read_exact_at(0, &mut buf).unwrap();
        assert_eq!(buf, [10, 20]);
    }

    #[test]
    fn short_read_is_an_error() {
        let mut cursor = Cursor::new(vec![1u8, 2]);
        let mut buf = [0u8; 4];
        assert!(cursor.read_exact_at(0, &mut buf).is_err());
    }
}
