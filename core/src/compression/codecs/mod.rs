//! compression/codecs/mod.rs
//! Per-algorithm adapters.
//!
//! - Whole-buffer: `null`, `snappy`, `zstd` implement `Codec` directly.
//! - Streaming: `deflate`, `bzip2`, `xz` are `StreamEngine`s wrapped in
//!   `StreamingCodec`.

pub mod bzip2;
pub mod deflate;
pub mod null;
pub mod snappy;
pub mod xz;
pub mod zstd;

pub use self::bzip2::*;
pub use self::deflate::*;
pub use self::null::*;
pub use self::snappy::*;
pub use self::xz::*;
pub use self::zstd::*;
