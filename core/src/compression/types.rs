//! compression/types.rs
//! Codec contract, factory contract and the error taxonomy.
use std::fmt;
use std::hash::{Hash, Hasher};

use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// No factory is registered under the requested name.
    #[error("unrecognized codec: {name}")]
    UnknownCodec { name: String },

    /// Block payload is truncated, malformed or fails its checksum.
    #[error("corrupt {codec} payload: {msg}")]
    CorruptPayload { codec: String, msg: String },

    #[error("codec {codec} init failed: {msg}")]
    CodecInitFailed { codec: String, msg: String },

    /// Engine failure while compressing.
    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: String, msg: String },
}

impl CodecError {
    pub fn unknown(name: &str) -> Self {
        CodecError::UnknownCodec { name: name.into() }
    }

    pub fn corrupt(codec: &str, msg: impl fmt::Display) -> Self {
        CodecError::CorruptPayload { codec: codec.into(), msg: msg.to_string() }
    }

    pub fn init_failed(codec: &str, msg: impl fmt::Display) -> Self {
        CodecError::CodecInitFailed { codec: codec.into(), msg: msg.to_string() }
    }

    pub fn process_failed(codec: &str, msg: impl fmt::Display) -> Self {
        CodecError::CodecProcessFailed { codec: codec.into(), msg: msg.to_string() }
    }

    pub fn is_unknown_codec(&self) -> bool {
        matches!(self, CodecError::UnknownCodec { .. })
    }

    pub fn is_corrupt_payload(&self) -> bool {
        matches!(self, CodecError::CorruptPayload { .. })
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;

/// Structural framing of a codec's block payload.
///
/// Part of codec identity: two codecs with the same name but different
/// framing produce blocks that cannot be read by each other.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Framing {
    /// The engine's own block or stream format.
    Native,
    /// RFC1951 deflate with no zlib header, trailer or checksum.
    RawDeflate,
}

/// A paired compressor/decompressor for one algorithm.
///
/// Instances own lazily created engine handles and an output buffer that are
/// reset and reused on every call. Calls take `&mut self`, so an instance is
/// used from one thread at a time; take one instance per worker from
/// [`CodecFactory::create_instance`].
///
/// # Equality
/// `dyn Codec` compares and hashes by `(name(), framing())` only. The
/// compression level is never persisted, so a reader has to treat codecs of
/// the same algorithm at different levels as interchangeable. This holds for
/// caller-registered codecs as well: the impls live on `dyn Codec` and cannot
/// be overridden per adapter.
///
/// Compare the trait objects themselves, not the boxes:
///
/// ```
/// use codec_core::compression::{deflate_codec, zstd_codec, CodecFactory};
///
/// let fast = deflate_codec(1).create_instance();
/// let best = deflate_codec(9).create_instance();
/// assert_eq!(&*fast, &*best);
/// assert_ne!(&*fast, &*zstd_codec(1).create_instance());
/// ```
pub trait Codec: fmt::Display + Send {
    /// Identifier used for registry lookup and persisted in file metadata.
    fn name(&self) -> &str;

    fn framing(&self) -> Framing {
        Framing::Native
    }

    /// Effective compression level after clamping, if the algorithm has one.
    fn level(&self) -> Option<i32> {
        None
    }

    /// Compress one whole block. The returned bytes are detached from the
    /// internal buffer and stay valid across later calls.
    fn compress(&mut self, input: &[u8]) -> Result<Bytes>;

    /// Inverse of [`Codec::compress`]. Truncated or malformed input yields
    /// [`CodecError::CorruptPayload`].
    fn decompress(&mut self, input: &[u8]) -> Result<Bytes>;
}

impl PartialEq for dyn Codec {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.framing() == other.framing()
    }
}

impl Eq for dyn Codec {}

impl Hash for dyn Codec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
        self.framing().hash(state);
    }
}

impl fmt::Debug for dyn Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("name", &self.name())
            .field("framing", &self.framing())
            .field("level", &self.level())
            .finish()
    }
}

/// Configuration-holding builder for [`Codec`] instances.
///
/// `create_instance` must be cheap; engines are set up on first use.
pub trait CodecFactory: Send + Sync {
    fn name(&self) -> &str;

    fn create_instance(&self) -> Box<dyn Codec>;
}

/// Factories are the same codec when their names match, whatever their
/// configuration.
impl PartialEq for dyn CodecFactory {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for dyn CodecFactory {}

impl fmt::Display for dyn CodecFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.create_instance(), f)
    }
}

impl fmt::Debug for dyn CodecFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecFactory").field("name", &self.name()).finish()
    }
}
