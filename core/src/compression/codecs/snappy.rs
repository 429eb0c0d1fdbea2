//! codecs/snappy.rs
//! Snappy raw block format with a CRC32 trailer.
//!
//! Block layout: `snappy(raw) || crc32(uncompressed) as u32 BE`.
//! The trailer is checked on decompress; a mismatch is a corrupt payload.

use std::fmt;

use bytes::Bytes;
use snap::raw::{decompress_len, max_compress_len, Decoder, Encoder};
use tracing::trace;

use crate::compression::constants::{codec_names, SNAPPY_CHECKSUM_LEN};
use crate::compression::stream::OutputBuffer;
use crate::compression::types::{Codec, CodecError, Result};
use crate::utils::compute_checksum;

// A 3-byte copy element emits at most 64 bytes, so no valid block expands
// past ~21x its encoded size.
const MAX_EXPANSION: usize = 32;

#[derive(Default)]
pub struct SnappyCodec {
    encoder: Option<Encoder>,
    decoder: Option<Decoder>,
    buffer: OutputBuffer,
}

impl SnappyCodec {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Codec for SnappyCodec {
    fn name(&self) -> &str {
        codec_names::SNAPPY
    }

    fn compress(&mut self, input: &[u8]) -> Result<Bytes> {
        let max = max_compress_len(input.len());
        if max == 0 {
            return Err(CodecError::process_failed(
                codec_names::SNAPPY,
                format!("block of {} bytes exceeds snappy's input limit", input.len()),
            ));
        }

        let encoder = self.encoder.get_or_insert_with(|| {
            trace!("snappy encoder initialized");
            Encoder::new()
        });
        let out = self.buffer.acquire(max + SNAPPY_CHECKSUM_LEN);
        out.resize(max, 0);
        let written = encoder
            .compress(input, out)
            .map_err(|e| CodecError::process_failed(codec_names::SNAPPY, e))?;
        out.truncate(written);

        out.extend_from_slice(&compute_checksum(input).to_be_bytes());
        Ok(Bytes::copy_from_slice(out))
    }

    fn decompress(&mut self, input: &[u8]) -> Result<Bytes> {
        if input.len() < SNAPPY_CHECKSUM_LEN {
            return Err(CodecError::corrupt(
                codec_names::SNAPPY,
                "block shorter than its checksum trailer",
            ));
        }
        let (body, trailer) = input.split_at(input.len() - SNAPPY_CHECKSUM_LEN);
        let expected = u32::from_be_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);

        let len = decompress_len(body).map_err(|e| CodecError::corrupt(codec_names::SNAPPY, e))?;
        if len > body.len().saturating_mul(MAX_EXPANSION) {
            return Err(CodecError::corrupt(
                codec_names::SNAPPY,
                format!("declared length {len} exceeds what a {}-byte block can hold", body.len()),
            ));
        }
        let decoder = self.decoder.get_or_insert_with(|| {
            trace!("snappy decoder initialized");
            Decoder::new()
        });
        let out = self.buffer.acquire(len);
        out.resize(len, 0);
        let written = decoder
            .decompress(body, out)
            .map_err(|e| CodecError::corrupt(codec_names::SNAPPY, e))?;
        out.truncate(written);

        let actual = compute_checksum(out);
        if actual != expected {
            return Err(CodecError::corrupt(
                codec_names::SNAPPY,
                format!("checksum mismatch: expected {expected:#010x}, got {actual:#010x}"),
            ));
        }
        Ok(Bytes::copy_from_slice(out))
    }
}

impl fmt::Display for SnappyCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(codec_names::SNAPPY)
    }
}
