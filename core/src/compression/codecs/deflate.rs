//! Deflate (RFC1951) via flate2.
//!
//! Blocks are raw deflate streams: the zlib (RFC1950) two-byte header and
//! Adler-32 trailer are disabled on both sides. One `Compress` and one
//! `Decompress` handle are created on first use and reset before every call.
//! Bytes left over after the final block make the payload corrupt.
use std::io;

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};
use tracing::trace;

use crate::compression::constants::{
    codec_names, DEFAULT_DEFLATE_LEVEL, DEFLATE_DEFAULT_SENTINEL, DEFLATE_LEVELS,
};
use crate::compression::stream::{StreamEngine, StreamingCodec};
use crate::compression::types::Framing;
use crate::utils::clamp_level;

// zlib header off: RFC1951, not RFC1950.
const ZLIB_HEADER: bool = false;

/// Minimum spare capacity reserved before each engine call.
const OUT_CHUNK: usize = 32 * 1024;

pub type DeflateCodec = StreamingCodec<DeflateEngine>;

impl DeflateCodec {
    pub fn with_level(level: i32) -> Self {
        StreamingCodec::new(DeflateEngine::new(level))
    }
}

pub struct DeflateEngine {
    level: i32,
    deflater: Option<Compress>,
    inflater: Option<Decompress>,
}

impl DeflateEngine {
    /// `-1` selects the default level; anything else outside `0..=9` is
    /// clamped.
    pub fn new(level: i32) -> Self {
        let level = if level == DEFLATE_DEFAULT_SENTINEL { DEFAULT_DEFLATE_LEVEL } else { level };
        let (min, max) = DEFLATE_LEVELS;
        Self {
            level: clamp_level(codec_names::DEFLATE, level, min, max),
            deflater: None,
            inflater: None,
        }
    }

    // get and reset the deflater for use.
    fn deflater(&mut self) -> &mut Compress {
        let level = self.level;
        let deflater = self.deflater.get_or_insert_with(|| {
            trace!(level, "deflate compressor initialized");
            Compress::new(Compression::new(level as u32), ZLIB_HEADER)
        });
        deflater.reset();
        deflater
    }

    // get and reset the inflater for use.
    fn inflater(&mut self) -> &mut Decompress {
        let inflater = self.inflater.get_or_insert_with(|| {
            trace!("deflate decompressor initialized");
            Decompress::new(ZLIB_HEADER)
        });
        inflater.reset(ZLIB_HEADER);
        inflater
    }
}

impl StreamEngine for DeflateEngine {
    fn name(&self) -> &'static str {
        codec_names::DEFLATE
    }

    fn framing(&self) -> Framing {
        Framing::RawDeflate
    }

    fn level(&self) -> i32 {
        self.level
    }

    fn encode(&mut self, input: &[u8], out: &mut Vec<u8>) -> io::Result<()> {
        let deflater = self.deflater();
        let start_in = deflater.total_in();
        loop {
            let consumed = (deflater.total_in() - start_in) as usize;
            out.reserve(OUT_CHUNK);
            let status = deflater
                .compress_vec(&input[consumed..], out, FlushCompress::Finish)
                .map_err(io::Error::other)?;
            if status == Status::StreamEnd {
                return Ok(());
            }
        }
    }

    fn decode(&mut self, input: &[u8], out: &mut Vec<u8>) -> io::Result<()> {
        let inflater = self.inflater();
        let start_in = inflater.total_in();
        loop {
            let before_in = inflater.total_in();
            let before_out = inflater.total_out();
            let consumed = (before_in - start_in) as usize;
            out.reserve(OUT_CHUNK.max(input.len()));
            let status = inflater
                .decompress_vec(&input[consumed..], out, FlushDecompress::None)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            if status == Status::StreamEnd {
                let used = (inflater.total_in() - start_in) as usize;
                if used < input.len() {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("{} trailing bytes after end of deflate stream", input.len() - used),
                    ));
                }
                return Ok(());
            }
            // Output space was available, so a stall means the input ran out
            // before the final block.
            if inflater.total_in() == before_in && inflater.total_out() == before_out {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "deflate stream truncated before final block",
                ));
            }
        }
    }
}
