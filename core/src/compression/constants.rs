//! compression/constants.rs
//! Stable codec names and default levels.

/// Codec names as persisted in file metadata (case-sensitive).
pub mod codec_names {
    pub const NULL: &str    = "null";
    pub const DEFLATE: &str = "deflate";
    pub const SNAPPY: &str  = "snappy";
    pub const BZIP2: &str   = "bzip2";
    pub const XZ: &str      = "xz";
    pub const ZSTD: &str    = "zstd";

    /// Every name the registry is seeded with.
    pub const BUILTIN: [&str; 6] = [NULL, DEFLATE, SNAPPY, BZIP2, XZ, ZSTD];
}

/// Default compression levels, used when no explicit level is supplied.
pub const DEFAULT_DEFLATE_LEVEL: i32 = 6; // zlib default
pub const DEFAULT_BZIP2_LEVEL: i32   = 9; // 900k block size
pub const DEFAULT_XZ_LEVEL: i32      = 6; // liblzma PRESET_DEFAULT
pub const DEFAULT_ZSTD_LEVEL: i32    = 1;

/// zlib's "default compression" level. Deflate maps it to
/// `DEFAULT_DEFLATE_LEVEL` instead of clamping it to 0 (stored).
pub const DEFLATE_DEFAULT_SENTINEL: i32 = -1;

/// Inclusive level bounds for engines with a fixed range.
/// Zstd's range comes from the linked library at runtime.
pub const DEFLATE_LEVELS: (i32, i32) = (0, 9);
pub const BZIP2_LEVELS: (i32, i32)   = (1, 9);
pub const XZ_LEVELS: (i32, i32)      = (0, 9);

/// Length of the CRC32 trailer appended to snappy blocks.
pub const SNAPPY_CHECKSUM_LEN: usize = 4;
