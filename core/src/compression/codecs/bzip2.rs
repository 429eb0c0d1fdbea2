//! codecs/bzip2.rs
//! bzip2 through the engine's stream wrappers.
//!
//! The engine has no reset, so a fresh encoder/decoder wraps each block; only
//! the output buffer is reused. Bytes left over after the end-of-stream
//! marker make the payload corrupt.

use std::io::{self, Read, Write};

use bzip2::bufread::BzDecoder;
use bzip2::write::BzEncoder;
use bzip2::Compression;

use crate::compression::constants::{codec_names, BZIP2_LEVELS};
use crate::compression::stream::{StreamEngine, StreamingCodec};
use crate::utils::clamp_level;

pub type Bzip2Codec = StreamingCodec<Bzip2Engine>;

impl Bzip2Codec {
    pub fn with_level(level: i32) -> Self {
        StreamingCodec::new(Bzip2Engine::new(level))
    }
}

/// `level` is the block size in units of 100k.
pub struct Bzip2Engine {
    level: i32,
}

impl Bzip2Engine {
    pub fn new(level: i32) -> Self {
        let (min, max) = BZIP2_LEVELS;
        Self { level: clamp_level(codec_names::BZIP2, level, min, max) }
    }
}

impl StreamEngine for Bzip2Engine {
    fn name(&self) -> &'static str {
        codec_names::BZIP2
    }

    fn level(&self) -> i32 {
        self.level
    }

    fn encode(&mut self, input: &[u8], out: &mut Vec<u8>) -> io::Result<()> {
        let mut encoder = BzEncoder::new(out, Compression::new(self.level as u32));
        encoder.write_all(input)?;
        encoder.finish()?;
        Ok(())
    }

    fn decode(&mut self, input: &[u8], out: &mut Vec<u8>) -> io::Result<()> {
        let mut decoder = BzDecoder::new(input);
        decoder.read_to_end(out)?;
        let rest = decoder.into_inner();
        if !rest.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} trailing bytes after end of bzip2 stream", rest.len()),
            ));
        }
        Ok(())
    }
}
