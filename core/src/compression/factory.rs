//! compression/factory.rs
//! Built-in codec configurations and the factory that instantiates them.
use std::sync::Arc;

use crate::compression::codecs::{Bzip2Codec, DeflateCodec, NullCodec, SnappyCodec, XzCodec, ZstdCodec};
use crate::compression::constants::*;
use crate::compression::types::{Codec, CodecFactory};

/// In-memory parameters of a built-in codec.
///
/// Never persisted: only the codec name reaches file metadata. Levels are
/// stored as requested and clamped when an instance is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CodecConfig {
    Null,
    Deflate { level: i32 },
    Snappy,
    Bzip2 { level: i32 },
    Xz { level: i32 },
    Zstd { level: i32 },
}

impl CodecConfig {
    pub fn name(&self) -> &'static str {
        match self {
            CodecConfig::Null => codec_names::NULL,
            CodecConfig::Deflate { .. } => codec_names::DEFLATE,
            CodecConfig::Snappy => codec_names::SNAPPY,
            CodecConfig::Bzip2 { .. } => codec_names::BZIP2,
            CodecConfig::Xz { .. } => codec_names::XZ,
            CodecConfig::Zstd { .. } => codec_names::ZSTD,
        }
    }

    /// Documented default configuration for a built-in name.
    pub fn default_for(name: &str) -> Option<Self> {
        match name {
            codec_names::NULL => Some(CodecConfig::Null),
            codec_names::DEFLATE => Some(CodecConfig::Deflate { level: DEFAULT_DEFLATE_LEVEL }),
            codec_names::SNAPPY => Some(CodecConfig::Snappy),
            codec_names::BZIP2 => Some(CodecConfig::Bzip2 { level: DEFAULT_BZIP2_LEVEL }),
            codec_names::XZ => Some(CodecConfig::Xz { level: DEFAULT_XZ_LEVEL }),
            codec_names::ZSTD => Some(CodecConfig::Zstd { level: DEFAULT_ZSTD_LEVEL }),
            _ => None,
        }
    }

    /// Defaults for every built-in, in registration order.
    pub fn defaults() -> impl Iterator<Item = CodecConfig> {
        codec_names::BUILTIN.into_iter().filter_map(CodecConfig::default_for)
    }
}

/// Factory for the built-in codecs; owns exactly one [`CodecConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltinFactory {
    config: CodecConfig,
}

impl BuiltinFactory {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }
}

impl CodecFactory for BuiltinFactory {
    fn name(&self) -> &str {
        self.config.name()
    }

    fn create_instance(&self) -> Box<dyn Codec> {
        match self.config {
            CodecConfig::Null => Box::new(NullCodec::new()),
            CodecConfig::Deflate { level } => Box::new(DeflateCodec::with_level(level)),
            CodecConfig::Snappy => Box::new(SnappyCodec::new()),
            CodecConfig::Bzip2 { level } => Box::new(Bzip2Codec::with_level(level)),
            CodecConfig::Xz { level } => Box::new(XzCodec::with_level(level)),
            CodecConfig::Zstd { level } => Box::new(ZstdCodec::new(level)),
        }
    }
}

fn builtin(config: CodecConfig) -> Arc<dyn CodecFactory> {
    Arc::new(BuiltinFactory::new(config))
}

/// No compression.
pub fn null_codec() -> Arc<dyn CodecFactory> {
    builtin(CodecConfig::Null)
}

/// Raw deflate; `-1` means the default level, anything else is clamped
/// into `0..=9`.
pub fn deflate_codec(level: i32) -> Arc<dyn CodecFactory> {
    builtin(CodecConfig::Deflate { level })
}

pub fn snappy_codec() -> Arc<dyn CodecFactory> {
    builtin(CodecConfig::Snappy)
}

/// bzip2 with the default 900k block size.
pub fn bzip2_codec() -> Arc<dyn CodecFactory> {
    builtin(CodecConfig::Bzip2 { level: DEFAULT_BZIP2_LEVEL })
}

/// bzip2; `level` (block size in 100k units) is clamped into `1..=9`.
pub fn bzip2_codec_with_level(level: i32) -> Arc<dyn CodecFactory> {
    builtin(CodecConfig::Bzip2 { level })
}

/// XZ; `level` is the liblzma preset, clamped into `0..=9`.
pub fn xz_codec(level: i32) -> Arc<dyn CodecFactory> {
    builtin(CodecConfig::Xz { level })
}

/// Zstandard; `level` is clamped into the linked library's supported range.
pub fn zstd_codec(level: i32) -> Arc<dyn CodecFactory> {
    builtin(CodecConfig::Zstd { level })
}
