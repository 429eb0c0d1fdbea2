//! codecs/null.rs
//! Pass-through codec.

use std::fmt;

use bytes::Bytes;

use crate::compression::constants::codec_names;
use crate::compression::types::{Codec, Result};

#[derive(Debug, Default)]
pub struct NullCodec;

impl NullCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for NullCodec {
    fn name(&self) -> &str {
        codec_names::NULL
    }

    fn compress(&mut self, input: &[u8]) -> Result<Bytes> {
        Ok(Bytes::copy_from_slice(input))
    }

    fn decompress(&mut self, input: &[u8]) -> Result<Bytes> {
        Ok(Bytes::copy_from_slice(input))
    }
}

impl fmt::Display for NullCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(codec_names::NULL)
    }
}
