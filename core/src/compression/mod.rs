//! compression/mod.rs
//! Pluggable block compression.
//!
//! Notes:
//! - Only the codec name is persisted; readers rebuild a codec from it via the registry.
//! - Codec equality ignores configuration (level), see `types::Codec`.
//! - One codec instance per thread; instances reuse their engine and output buffer.

pub mod codecs;
pub mod constants;
pub mod factory;
pub mod registry;
pub mod stream;
pub mod types;

pub use constants::*;
pub use factory::*;
pub use registry::*;
pub use stream::{OutputBuffer, StreamEngine, StreamingCodec};
pub use types::*;
