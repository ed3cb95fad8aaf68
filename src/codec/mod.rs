//! Codec implementations
//!
//! A codec is a pure byte-to-byte transform pair. It holds no mutable state,
//! so one shared instance can be driven from every worker thread at once.

pub mod rle;

use crate::error::Result;

pub use rle::RleCodec;

/// Trait for all compression algorithms
pub trait Codec: Send + Sync {
    /// Identifier used to select the codec on the command line
    fn name(&self) -> &'static str;

    /// Compress `data`
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Reverse [`Codec::encode`]
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}
