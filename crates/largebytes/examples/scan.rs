//! Scan a file through the cached reader and print its length and CRC32.
//!
//! Usage: scan <file> [cache-capacity-bytes]
//!
//! Set `RUST_LOG=largebytes=trace` to watch the hit/miss pattern.

use std::process::ExitCode;

use largebytes::{DEFAULT_CACHE_CAPACITY, LargeByteReader, ReaderConfig};

const CHUNK_SIZE: u64 = 64 * 1024;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: scan <file> [cache-capacity-bytes]");
        return ExitCode::FAILURE;
    };
    let capacity = match args.next() {
        Some(raw) => match raw.parse::<u64>() {
            Ok(capacity) => capacity,
            Err(err) => {
                eprintln!("invalid capacity {raw:?}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_CACHE_CAPACITY,
    };

    let mut reader =
        match LargeByteReader::open_with_config(&path, ReaderConfig::with_capacity(capacity)) {
            Ok(reader) => reader,
            Err(err) => {
                eprintln!("failed to open {path}: {err}");
                return ExitCode::FAILURE;
            }
        };

    let len = reader.len();
    let mut hasher = crc32fast::Hasher::new();
    let mut first = 0u64;
    while first < len {
        let last = (first + CHUNK_SIZE - 1).min(len - 1);
        let chunk = reader.bytes_in_range(first, last);
        if reader.has_error() {
            eprintln!("read failed at {first}..={last}");
            return ExitCode::FAILURE;
        }
        hasher.update(&chunk);
        first = last + 1;
    }

    println!("{path}: {len} bytes, crc32 {:08x}", hasher.finalize());
    ExitCode::SUCCESS
}
