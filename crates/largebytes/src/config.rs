//! Reader configuration

use crate::error::{Error, Result};

/// Default cache window capacity (1 MiB)
pub const DEFAULT_CACHE_CAPACITY: u64 = 1024 * 1024;

/// User-configurable parameters for a [`LargeByteReader`](crate::LargeByteReader)
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Maximum byte size of the cache window, fixed at construction
    pub cache_capacity: u64,
}

impl ReaderConfig {
    /// Configuration with an explicit cache capacity in bytes
    pub fn with_capacity(cache_capacity: u64) -> Self {
        Self { cache_capacity }
    }

    /// A zero-sized window could never serve a hit, so the factory rejects
    /// it up front instead of failing on the first miss.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(())
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}
