//! Run-Length Encoding (RLE) codec
//!
//! The compressed stream is a flat sequence of `(count, value)` byte pairs
//! with no header. A run longer than [`MAX_RUN`] is split into several pairs,
//! so `300 x b'A'` encodes as `[255, b'A', 45, b'A']`.

use super::Codec;
use crate::error::{Result, RlecError};

/// Largest count a single pair can carry
pub const MAX_RUN: usize = u8::MAX as usize;

/// One run of identical bytes, already clamped to [`MAX_RUN`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub count: u8,
    pub value: u8,
}

/// Iterator over the clamped runs of a buffer, in order
pub struct Runs<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Runs<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let value = *self.data.get(self.pos)?;
        let rest = &self.data[self.pos..];
        let count = rest
            .iter()
            .take(MAX_RUN)
            .take_while(|&&b| b == value)
            .count();
        self.pos += count;
        Some(Run { count: count as u8, value })
    }
}

pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let pairs = Runs::new(data).count();
    let mut encoded = Vec::new();
    encoded.try_reserve_exact(pairs * 2).map_err(|e| {
        RlecError::Io(std::io::Error::new(std::io::ErrorKind::OutOfMemory, e))
    })?;

    for run in Runs::new(data) {
        encoded.push(run.count);
        encoded.push(run.value);
    }

    log::trace!("rle: encoded {} bytes into {} pairs", data.len(), pairs);
    Ok(encoded)
}

/// Expands `(count, value)` pairs. A count of zero is legal and yields nothing.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    if data.len() % 2 != 0 {
        return Err(RlecError::MalformedData { offset: data.len() - 1 });
    }

    let pairs = data.chunks_exact(2);
    let total: usize = pairs.clone().map(|pair| pair[0] as usize).sum();
    let mut decoded = Vec::new();
    decoded.try_reserve_exact(total).map_err(|e| {
        RlecError::Io(std::io::Error::new(std::io::ErrorKind::OutOfMemory, e))
    })?;

    for pair in pairs {
        let (count, value) = (pair[0] as usize, pair[1]);
        decoded.resize(decoded.len() + count, value);
    }

    log::trace!("rle: decoded {} pairs into {} bytes", data.len() / 2, total);
    Ok(decoded)
}

/// Stateless RLE codec
#[derive(Debug, Clone, Copy, Default)]
pub struct RleCodec;

impl RleCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for RleCodec {
    fn name(&self) -> &'static str {
        "rle"
    }

    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        encode(data)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        decode(data)
    }
}
