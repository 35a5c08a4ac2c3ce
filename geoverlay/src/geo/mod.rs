//! Spherical geometry helpers.
//!
//! Provides great-circle distance and interpolation between geographic
//! points on a spherical Earth model.

mod types;

pub use types::{CameraPosition, GeoPoint, TileCoord, EARTH_RADIUS_METERS};

/// Central angles below this are treated as zero-length.
const DEGENERATE_ANGLE: f64 = 1e-12;

#[inline]
fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

/// Central angle between two points, in radians.
///
/// Uses `atan2(|a×b|, a·b)`, which stays accurate for both very short and
/// near-antipodal arcs.
#[inline]
pub fn central_angle(a: GeoPoint, b: GeoPoint) -> f64 {
    let va = a.to_unit_vector();
    let vb = b.to_unit_vector();
    let s = norm(cross(va, vb));
    let c = dot(va, vb).clamp(-1.0, 1.0);
    s.atan2(c).abs()
}

/// Great-circle distance between two points, in meters.
#[inline]
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    central_angle(a, b) * EARTH_RADIUS_METERS
}

/// Returns `true` when the great circle through `a` and `b` is undefined:
/// the points coincide or are antipodal.
#[inline]
pub fn is_degenerate_arc(a: GeoPoint, b: GeoPoint) -> bool {
    let s = norm(cross(a.to_unit_vector(), b.to_unit_vector()));
    s < DEGENERATE_ANGLE
}

/// Point at fraction `t` (0..=1) along the great circle from `a` to `b`.
///
/// Callers must not pass a degenerate arc (see [`is_degenerate_arc`]).
pub fn interpolate(a: GeoPoint, b: GeoPoint, t: f64) -> GeoPoint {
    let va = a.to_unit_vector();
    let vb = b.to_unit_vector();
    let omega = norm(cross(va, vb)).atan2(dot(va, vb).clamp(-1.0, 1.0));
    let sin_omega = omega.sin();
    if sin_omega.abs() < DEGENERATE_ANGLE {
        return a;
    }

    let wa = ((1.0 - t) * omega).sin() / sin_omega;
    let wb = (t * omega).sin() / sin_omega;
    GeoPoint::from_vector([
        wa * va[0] + wb * vb[0],
        wa * va[1] + wb * vb[1],
        wa * va[2] + wb * vb[2],
    ])
}
