//! Zoom-adaptive segment length policy.

use std::f64::consts::PI;

use crate::config::InterpolationConfig;
use crate::geo::EARTH_RADIUS_METERS;

/// Web Mercator tile edge in pixels.
const TILE_SIZE_PIXELS: f64 = 256.0;

/// Ground distance covered by one screen pixel, in meters.
///
/// Standard Web Mercator relation: the equatorial circumference spread over
/// `256 * 2^zoom` pixels, scaled by `cos(latitude)`.
#[inline]
pub fn meters_per_pixel(latitude: f64, zoom: f64) -> f64 {
    let circumference = 2.0 * PI * EARTH_RADIUS_METERS;
    latitude.to_radians().cos() * circumference / (TILE_SIZE_PIXELS * 2.0_f64.powf(zoom))
}

/// Chooses the longest acceptable geodesic segment for the current view.
///
/// Coarse zooms get a few long segments; fine zooms get segments short
/// enough that the great-circle curvature is invisible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveSegmentPolicy {
    target_segment_pixels: f64,
    min_segment_meters: f64,
    max_segment_meters: f64,
}

impl AdaptiveSegmentPolicy {
    /// Create a policy from the interpolation configuration.
    pub fn new(config: &InterpolationConfig) -> Self {
        Self {
            target_segment_pixels: config.target_segment_pixels(),
            min_segment_meters: config.min_segment_meters(),
            max_segment_meters: config.max_segment_meters(),
        }
    }

    /// Maximum segment length in meters for a camera at `zoom` over `latitude`.
    ///
    /// Always within `[min_segment_meters, max_segment_meters]`.
    pub fn max_segment_length_meters(&self, zoom: f64, latitude: f64) -> f64 {
        let candidate = meters_per_pixel(latitude, zoom) * self.target_segment_pixels;
        if candidate.is_nan() {
            return self.max_segment_meters;
        }
        candidate.clamp(self.min_segment_meters, self.max_segment_meters)
    }
}

impl Default for AdaptiveSegmentPolicy {
    fn default() -> Self {
        Self::new(&InterpolationConfig::default())
    }
}
