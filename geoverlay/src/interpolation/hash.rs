//! Point sequence fingerprints and cache keys.

use crate::geo::GeoPoint;
use std::fmt;

/// 64-bit FNV-1a offset basis.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// 64-bit FNV-1a prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Coordinates are quantized to 1e-6 degrees (~11 cm) before hashing.
const QUANTIZATION: f64 = 1_000_000.0;

#[inline]
fn quantize(degrees: f64) -> u64 {
    // Two's-complement reinterpretation keeps negative coordinates distinct.
    ((degrees * QUANTIZATION).round() as i64) as u64
}

#[inline]
fn fold(hash: u64, value: u64) -> u64 {
    (hash ^ value).wrapping_mul(FNV_PRIME)
}

/// Order-sensitive FNV-1a hash of a point sequence.
///
/// Latitude then longitude of each point is folded in after quantization;
/// the point count is folded last so that a sequence and its prefixes hash
/// differently. This is a fast equality pre-filter, not a unique identity.
pub fn points_hash(points: &[GeoPoint]) -> u64 {
    let hash = points.iter().fold(FNV_OFFSET_BASIS, |hash, point| {
        let hash = fold(hash, quantize(point.latitude));
        fold(hash, quantize(point.longitude))
    });
    fold(hash, points.len() as u64)
}

/// Key of one resolved path in the interpolation cache.
///
/// The segment length is rounded to whole meters, so requests whose target
/// lengths differ by less than a meter share a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    /// Hash of the input points
    pub points_hash: u64,
    /// Target segment length, rounded to the nearest meter
    pub segment_meters: i64,
}

impl CacheKey {
    /// Build a key from a points hash and an unrounded segment length.
    #[inline]
    pub fn new(points_hash: u64, max_segment_length_meters: f64) -> Self {
        Self {
            points_hash,
            segment_meters: max_segment_length_meters.round() as i64,
        }
    }
}

/// Cache key for `points_hash` at `max_segment_length_meters`.
#[inline]
pub fn cache_key(points_hash: u64, max_segment_length_meters: f64) -> CacheKey {
    CacheKey::new(points_hash, max_segment_length_meters)
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.points_hash, self.segment_meters)
    }
}
