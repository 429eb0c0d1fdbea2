use tracing::debug;

/// CRC32 (IEEE) of `data`.
pub fn compute_checksum(data: &[u8]) -> u32 {
    use crc32fast::Hasher;
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Saturate a requested level into the inclusive range `[min, max]`.
///
/// Out-of-range requests are not an error; the nearest bound is used and the
/// adjustment is only visible at debug level and through the codec's
/// reported level.
pub fn clamp_level(codec: &str, requested: i32, min: i32, max: i32) -> i32 {
    let effective = requested.clamp(min, max);
    if effective != requested {
        debug!(codec, requested, effective, min, max, "compression level clamped");
    }
    effective
}
