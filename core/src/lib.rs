//! codec-core
//!
//! Block compression codecs for self-describing container files.
//! The writer picks a codec by name; the reader rebuilds it from the name
//! stored in file metadata. Compression itself is done by external engines
//! (flate2, snap, bzip2, xz2, zstd).

#![forbid(unsafe_code)]

pub mod utils;

pub mod compression;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::codec_names;
    pub use crate::compression::registry::{create_codec, register_codec, resolve_codec, CodecRegistry};
    pub use crate::compression::types::{Codec, CodecError, CodecFactory, Framing};
    pub use crate::compression::factory::{
        bzip2_codec, deflate_codec, null_codec, snappy_codec, xz_codec, zstd_codec, CodecConfig,
    };
}
