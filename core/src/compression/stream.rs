//! compression/stream.rs
//! Shared machinery for codecs whose engines only expose a stream interface.
//!
//! A [`StreamingCodec`] pairs one [`StreamEngine`] with one [`OutputBuffer`].
//! Each call acquires the buffer (allocated on first use, cleared after),
//! lets the engine drive the whole block through its stream wrapper into it,
//! and hands back a detached copy.
use std::fmt;
use std::io;

use bytes::Bytes;
use tracing::trace;

use crate::compression::types::{Codec, CodecError, Framing, Result};

/// Reusable output accumulator.
///
/// Starts unallocated; the first `acquire` sizes it from the caller's hint.
/// Later calls clear it and keep the capacity.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    inner: Option<Vec<u8>>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// Get the buffer, empty and ready for writing.
    pub fn acquire(&mut self, suggested_len: usize) -> &mut Vec<u8> {
        let buf = self.inner.get_or_insert_with(|| {
            trace!(capacity = suggested_len, "output buffer allocated");
            Vec::with_capacity(suggested_len)
        });
        buf.clear();
        buf
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.is_some()
    }

    pub fn capacity(&self) -> usize {
        self.inner.as_ref().map_or(0, Vec::capacity)
    }
}

/// One stream-style engine binding.
///
/// `encode`/`decode` consume the full input and append the whole result to
/// `out`. Implementations keep whatever engine state they can reuse and must
/// reset it at the start of each call.
pub trait StreamEngine: Send {
    fn name(&self) -> &'static str;

    fn framing(&self) -> Framing {
        Framing::Native
    }

    fn level(&self) -> i32;

    fn encode(&mut self, input: &[u8], out: &mut Vec<u8>) -> io::Result<()>;

    fn decode(&mut self, input: &[u8], out: &mut Vec<u8>) -> io::Result<()>;
}

/// [`Codec`] over a [`StreamEngine`].
///
/// Encode-side I/O errors surface as `CodecProcessFailed`; decode-side ones
/// as `CorruptPayload`, since the only input is the block itself.
pub struct StreamingCodec<E> {
    engine: E,
    buffer: OutputBuffer,
}

impl<E: StreamEngine> StreamingCodec<E> {
    pub fn new(engine: E) -> Self {
        Self { engine, buffer: OutputBuffer::new() }
    }

    pub fn buffer(&self) -> &OutputBuffer {
        &self.buffer
    }
}

impl<E: StreamEngine> Codec for StreamingCodec<E> {
    fn name(&self) -> &str {
        self.engine.name()
    }

    fn framing(&self) -> Framing {
        self.engine.framing()
    }

    fn level(&self) -> Option<i32> {
        Some(self.engine.level())
    }

    fn compress(&mut self, input: &[u8]) -> Result<Bytes> {
        let out = self.buffer.acquire(input.len());
        self.engine
            .encode(input, out)
            .map_err(|e| CodecError::process_failed(self.engine.name(), e))?;
        Ok(Bytes::copy_from_slice(out))
    }

    fn decompress(&mut self, input: &[u8]) -> Result<Bytes> {
        let out = self.buffer.acquire(input.len());
        self.engine
            .decode(input, out)
            .map_err(|e| CodecError::corrupt(self.engine.name(), e))?;
        Ok(Bytes::copy_from_slice(out))
    }
}

impl<E: StreamEngine> fmt::Display for StreamingCodec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.engine.name(), self.engine.level())
    }
}
