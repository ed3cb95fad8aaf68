//! # rlec
//!
//! Run-length encoding for whole files, applied to many files at once.
//!
//! ## Format
//!
//! A compressed file is a raw sequence of `(count, value)` byte pairs with no
//! header. Runs longer than 255 bytes are split into several pairs.
//!
//! ## Quick Start
//!
//! ### In memory
//!
//! ```rust
//! use rlec::{compress_data, decompress_data};
//!
//! let compressed = compress_data(b"AAABBC").unwrap();
//! assert_eq!(compressed, vec![3, b'A', 2, b'B', 1, b'C']);
//! assert_eq!(decompress_data(&compressed).unwrap(), b"AAABBC");
//! ```
//!
//! ### A batch of files
//!
//! ```rust,no_run
//! use rlec::{CodecRegistry, DispatchConfig, Dispatcher, Job, Mode};
//!
//! # fn example() -> rlec::Result<()> {
//! let registry = CodecRegistry::builtin();
//! let dispatcher = Dispatcher::for_algorithm(&registry, "rle", DispatchConfig::default())?;
//! let jobs = Job::pairs_from(&["a.txt", "a.rle", "b.txt", "b.rle"])?;
//!
//! let report = dispatcher.run(jobs, Mode::Compress)?;
//! for outcome in report.failed() {
//!     eprintln!("{}: {:?}", outcome.job, outcome.result);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod job;
pub mod registry;

// Re-export commonly used types for convenience
pub use codec::{Codec, RleCodec};
pub use config::{DispatchConfig, Mode, Verbosity};
pub use dispatch::{BatchReport, Dispatcher};
pub use error::{Result, RlecError};
pub use job::{Job, JobOutcome, JobStats};
pub use registry::{CodecRegistry, DEFAULT_ALGORITHM};

/// Compress data in memory with the default algorithm
pub fn compress_data(data: &[u8]) -> Result<Vec<u8>> {
    codec::rle::encode(data)
}

/// Decompress data produced by [`compress_data`]
pub fn decompress_data(compressed_data: &[u8]) -> Result<Vec<u8>> {
    codec::rle::decode(compressed_data)
}
