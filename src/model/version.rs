//! # Version Encoding
//!
//! Converts a dotted "X.Y.Z" version string into a single comparable
//! integer so version ranges reduce to integer comparisons.

/// Weight of the major component in the encoded key.
const MAJOR_WEIGHT: i64 = 1_000_000;

/// Weight of the minor component in the encoded key.
const MINOR_WEIGHT: i64 = 1_000;

/// Encodes a dotted version string as a comparable integer key.
///
/// The string is split on `.`; each of the first three segments is parsed
/// as a non-negative integer, with an unparsable or missing segment
/// degrading to `0`. Segments beyond the third are ignored. The key is
/// `major * 1_000_000 + minor * 1_000 + patch`.
///
/// This is a total function: any input produces a key, and an empty
/// string encodes to `0`. The key is a compact ordering key, not a
/// lossless encoding. Components of 1000 or more overflow into the next
/// weight and can collide with neighbouring versions, an accepted
/// limitation for app versions whose components stay well below 1000.
pub fn encode(version: &str) -> i64 {
    let mut segments = version
        .split('.')
        .map(|s| s.parse::<u32>().map(i64::from).unwrap_or(0));

    let major = segments.next().unwrap_or(0);
    let minor = segments.next().unwrap_or(0);
    let patch = segments.next().unwrap_or(0);

    major * MAJOR_WEIGHT + minor * MINOR_WEIGHT + patch
}
