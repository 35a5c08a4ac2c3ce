//! Great-circle subdivision of point sequences.

use crate::geo::{self, GeoPoint};

/// Number of equal sub-segments needed so that none exceeds `max_segment_length`.
///
/// Degenerate arcs (coincident or antipodal endpoints) are never split.
fn subdivisions(a: GeoPoint, b: GeoPoint, max_segment_length: f64) -> usize {
    if geo::is_degenerate_arc(a, b) {
        return 1;
    }
    let distance = geo::distance_meters(a, b);
    if distance <= max_segment_length {
        return 1;
    }
    // Float-to-int casts saturate, so absurd ratios cannot wrap.
    ((distance / max_segment_length).ceil() as usize).max(1)
}

#[inline]
fn is_usable_length(max_segment_length: f64) -> bool {
    max_segment_length.is_finite() && max_segment_length > 0.0
}

/// Path used when geodesic rendering is off.
///
/// Points pass through untouched; the surface draws straight projected lines.
pub fn create_linear_interpolate_points(points: &[GeoPoint]) -> Vec<GeoPoint> {
    points.to_vec()
}

/// Number of points [`create_interpolate_points`] would return.
///
/// Lets callers enforce a point ceiling before allocating anything.
pub fn interpolated_point_count(points: &[GeoPoint], max_segment_length: f64) -> usize {
    if points.len() < 2 || !is_usable_length(max_segment_length) {
        return points.len();
    }
    points.windows(2).fold(1usize, |count, pair| {
        count.saturating_add(subdivisions(pair[0], pair[1], max_segment_length))
    })
}

/// Subdivide `points` along great circles so that no segment is longer than
/// `max_segment_length` meters.
///
/// Intermediate points are evenly spaced along each arc. Input points are
/// copied through exactly, in order. Sequences shorter than two points, and
/// non-positive or non-finite lengths, are returned unchanged.
///
/// Output size grows with `distance / max_segment_length`; callers should
/// check [`interpolated_point_count`] first when the inputs are untrusted.
pub fn create_interpolate_points(points: &[GeoPoint], max_segment_length: f64) -> Vec<GeoPoint> {
    if points.len() < 2 || !is_usable_length(max_segment_length) {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(points.len());
    out.push(points[0]);

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let n = subdivisions(a, b, max_segment_length);
        for i in 1..n {
            out.push(geo::interpolate(a, b, i as f64 / n as f64));
        }
        out.push(b);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-6;

    fn max_gap(points: &[GeoPoint]) -> f64 {
        points
            .windows(2)
            .map(|w| geo::distance_meters(w[0], w[1]))
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_linear_is_pass_through() {
        let points = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 90.0)];
        assert_eq!(create_linear_interpolate_points(&points), points);
    }

    #[test]
    fn test_fewer_than_two_points_unchanged() {
        let single = vec![GeoPoint::new(1.0, 2.0)];
        assert_eq!(create_interpolate_points(&single, 10.0), single);
        assert!(create_interpolate_points(&[], 10.0).is_empty());
        assert_eq!(interpolated_point_count(&single, 10.0), 1);
    }

    #[test]
    fn test_short_segment_not_subdivided() {
        let points = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.001)];
        assert_eq!(create_interpolate_points(&points, 1_000.0), points);
    }

    #[test]
    fn test_ten_degrees_at_100km() {
        let points = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 10.0)];
        let out = create_interpolate_points(&points, 100_000.0);

        // ~1113 km -> 12 segments -> 13 points
        assert_eq!(out.len(), 13);
        assert_eq!(out.len(), interpolated_point_count(&points, 100_000.0));
        assert_eq!(out[0], points[0]);
        assert_eq!(*out.last().unwrap(), points[1]);
        assert!(max_gap(&out) <= 100_000.0 * (1.0 + TOLERANCE));
    }

    #[test]
    fn test_zero_length_segment_passes_through() {
        let p = GeoPoint::new(5.0, 5.0);
        let out = create_interpolate_points(&[p, p], 1.0);
        assert_eq!(out, vec![p, p]);
    }

    #[test]
    fn test_antipodal_segment_passes_through() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let out = create_interpolate_points(&[a, b], 1_000.0);
        assert_eq!(out, vec![a, b]);
    }

    #[test]
    fn test_invalid_length_returns_input() {
        let points = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 10.0)];
        assert_eq!(create_interpolate_points(&points, 0.0), points);
        assert_eq!(create_interpolate_points(&points, f64::NAN), points);
        assert_eq!(interpolated_point_count(&points, -1.0), 2);
    }

    #[test]
    fn test_original_vertices_are_kept_in_order() {
        let points = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(10.0, 10.0),
            GeoPoint::new(0.0, 20.0),
        ];
        let out = create_interpolate_points(&points, 200_000.0);
        let positions: Vec<usize> = points
            .iter()
            .map(|p| out.iter().position(|q| q == p).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_count_saturates_for_pathological_input() {
        let points = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 179.0)];
        let count = interpolated_point_count(&points, f64::MIN_POSITIVE);
        assert!(count > 10_000);
    }

    proptest! {
        /// Property: no output segment exceeds the threshold, endpoints are exact.
        #[test]
        fn prop_segments_bounded_and_endpoints_exact(
            coords in prop::collection::vec((-80.0f64..80.0, -179.0f64..179.0), 2..6),
            max_len in 20_000.0f64..2_000_000.0,
        ) {
            let points: Vec<GeoPoint> = coords.into_iter().map(GeoPoint::from).collect();
            let out = create_interpolate_points(&points, max_len);

            prop_assert_eq!(out[0], points[0]);
            prop_assert_eq!(*out.last().unwrap(), *points.last().unwrap());
            prop_assert_eq!(out.len(), interpolated_point_count(&points, max_len));

            for w in out.windows(2) {
                if geo::is_degenerate_arc(w[0], w[1]) {
                    continue;
                }
                let d = geo::distance_meters(w[0], w[1]);
                prop_assert!(d <= max_len * (1.0 + TOLERANCE), "segment {} > {}", d, max_len);
            }
        }
    }
}
