//! codecs/zstd.rs
//!
//! Zstandard over the engine's block API.
//!
//! Design notes:
//! - The requested level is clamped into `zstd::compression_level_range()`
//!   when the codec is built.
//! - One `bulk::Compressor` context is created on first compress and reused.
//! - Decompression streams the frame, so frames written without a recorded
//!   content size still decode.

use std::fmt;

use bytes::Bytes;
use tracing::trace;
use zstd::bulk::Compressor;
use zstd::zstd_safe::compress_bound;

use crate::compression::constants::codec_names;
use crate::compression::stream::OutputBuffer;
use crate::compression::types::{Codec, CodecError, Result};
use crate::utils::clamp_level;

pub struct ZstdCodec {
    level: i32,
    compressor: Option<Compressor<'static>>,
    buffer: OutputBuffer,
}

impl ZstdCodec {
    pub fn new(level: i32) -> Self {
        let range = zstd::compression_level_range();
        Self {
            level: clamp_level(codec_names::ZSTD, level, *range.start(), *range.end()),
            compressor: None,
            buffer: OutputBuffer::new(),
        }
    }
}

impl Codec for ZstdCodec {
    fn name(&self) -> &str {
        codec_names::ZSTD
    }

    fn level(&self) -> Option<i32> {
        Some(self.level)
    }

    fn compress(&mut self, input: &[u8]) -> Result<Bytes> {
        let compressor = match self.compressor.take() {
            Some(compressor) => compressor,
            None => {
                trace!(level = self.level, "zstd compressor initialized");
                Compressor::new(self.level)
                    .map_err(|e| CodecError::init_failed(codec_names::ZSTD, e))?
            }
        };
        let compressor = self.compressor.insert(compressor);

        let out = self.buffer.acquire(compress_bound(input.len()));
        out.reserve(compress_bound(input.len()));
        compressor
            .compress_to_buffer(input, out)
            .map_err(|e| CodecError::process_failed(codec_names::ZSTD, e))?;
        Ok(Bytes::copy_from_slice(out))
    }

    fn decompress(&mut self, input: &[u8]) -> Result<Bytes> {
        let out = self.buffer.acquire(input.len());
        zstd::stream::copy_decode(input, &mut *out)
            .map_err(|e| CodecError::corrupt(codec_names::ZSTD, e))?;
        Ok(Bytes::copy_from_slice(out))
    }
}

impl fmt::Display for ZstdCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", codec_names::ZSTD, self.level)
    }
}
