//! codecs/xz.rs
//! XZ (LZMA2) via liblzma stream wrappers.

use std::io::{self, Read, Write};

use xz2::read::XzDecoder;
use xz2::write::XzEncoder;

use crate::compression::constants::{codec_names, XZ_LEVELS};
use crate::compression::stream::{StreamEngine, StreamingCodec};
use crate::utils::clamp_level;

pub type XzCodec = StreamingCodec<XzEngine>;

impl XzCodec {
    pub fn with_level(level: i32) -> Self {
        StreamingCodec::new(XzEngine::new(level))
    }
}

/// `level` is the liblzma preset.
pub struct XzEngine {
    level: i32,
}

impl XzEngine {
    pub fn new(level: i32) -> Self {
        let (min, max) = XZ_LEVELS;
        Self { level: clamp_level(codec_names::XZ, level, min, max) }
    }
}

impl StreamEngine for XzEngine {
    fn name(&self) -> &'static str {
        codec_names::XZ
    }

    fn level(&self) -> i32 {
        self.level
    }

    fn encode(&mut self, input: &[u8], out: &mut Vec<u8>) -> io::Result<()> {
        let mut encoder = XzEncoder::new(out, self.level as u32);
        encoder.write_all(input)?;
        encoder.finish()?;
        Ok(())
    }

    fn decode(&mut self, input: &[u8], out: &mut Vec<u8>) -> io::Result<()> {
        let mut decoder = XzDecoder::new(input);
        decoder.read_to_end(out)?;
        Ok(())
    }
}
