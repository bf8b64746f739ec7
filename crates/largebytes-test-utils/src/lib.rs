//! Test fixtures for largebytes
//!
//! Fixture files are built by repeating a content block, so inputs much
//! larger than any sensible cache never require one giant in-memory
//! buffer. The checksum helpers mirror that shape.

use std::io::{Result, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

/// Write `content` repeated `repeat` times into a fresh temporary file.
///
/// The file is deleted when the returned handle drops.
pub fn repeated_content_file(content: &[u8], repeat: usize) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    for _ in 0..repeat {
        file.write_all(content)?;
    }
    file.flush()?;
    Ok(file)
}

/// Deterministic pseudo-random content block.
pub fn seeded_content(seed: u64, size: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut content = vec![0u8; size];
    rng.fill_bytes(&mut content);
    content
}

/// CRC32 of `content` repeated `repeat` times.
pub fn repeated_crc32(content: &[u8], repeat: usize) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    for _ in 0..repeat {
        hasher.update(content);
    }
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn fixture_file_repeats_the_content() {
        let file = repeated_content_file(&[1, 2, 3], 3).unwrap();
        let written = fs::read(file.path()).unwrap();
        assert_eq!(written, vec![1, 2, 3, 1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn seeded_content_is_deterministic() {
        let a = seeded_content(7, 64);
        let b = seeded_content(7, 64);
        assert_eq!(a, b);
        assert_ne!(a, seeded_content(8, 64));
    }

    #[test]
    fn repeated_crc_matches_a_flat_buffer() {
        let content = seeded_content(0, 128);
        let flat: Vec<u8> = content.repeat(4);

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&flat);
        assert_eq!(repeated_crc32(&content, 4), hasher.finalize());
    }
}
