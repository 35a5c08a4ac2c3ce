//! Interpolation configuration.

use super::defaults::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_MAX_INTERPOLATED_POINTS, DEFAULT_MAX_SEGMENT_METERS,
    DEFAULT_MIN_SEGMENT_METERS, DEFAULT_TARGET_SEGMENT_PIXELS,
};

/// Configuration for adaptive geodesic interpolation.
///
/// Groups the segment-length policy bounds, the per-renderer path cache
/// capacity and the point ceiling that triggers the raw-path fallback.
///
/// # Example
///
/// ```
/// use geoverlay::config::InterpolationConfig;
///
/// let config = InterpolationConfig::default();
/// assert_eq!(config.target_segment_pixels(), 400.0);
/// assert_eq!(config.min_segment_meters(), 50.0);
/// assert_eq!(config.max_segment_meters(), 100_000.0);
/// assert_eq!(config.cache_capacity(), 64);
/// assert_eq!(config.max_points(), 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationConfig {
    /// On-screen length of one segment, in pixels
    target_segment_pixels: f64,
    /// Lower clamp for the segment length, in meters
    min_segment_meters: f64,
    /// Upper clamp for the segment length, in meters
    max_segment_meters: f64,
    /// Number of resolved paths cached per renderer
    cache_capacity: usize,
    /// Largest interpolated path accepted before falling back to raw points
    max_points: usize,
}

impl InterpolationConfig {
    /// Create a new interpolation configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target on-screen segment length in pixels.
    ///
    /// Non-finite or non-positive values are ignored.
    pub fn with_target_segment_pixels(mut self, pixels: f64) -> Self {
        if is_positive_finite(pixels) {
            self.target_segment_pixels = pixels;
        }
        self
    }

    /// Set the clamp range for segment lengths, in meters.
    ///
    /// The bounds are swapped if given in the wrong order. The call is
    /// ignored unless both bounds are finite and positive.
    pub fn with_segment_bounds(mut self, min_meters: f64, max_meters: f64) -> Self {
        if is_positive_finite(min_meters) && is_positive_finite(max_meters) {
            self.min_segment_meters = min_meters.min(max_meters);
            self.max_segment_meters = max_meters.max(min_meters);
        }
        self
    }

    /// Set the number of resolved paths cached per renderer (minimum 1).
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity.max(1);
        self
    }

    /// Set the point ceiling for interpolated paths.
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Get the target on-screen segment length in pixels.
    pub fn target_segment_pixels(&self) -> f64 {
        self.target_segment_pixels
    }

    /// Get the lower segment length clamp in meters.
    pub fn min_segment_meters(&self) -> f64 {
        self.min_segment_meters
    }

    /// Get the upper segment length clamp in meters.
    pub fn max_segment_meters(&self) -> f64 {
        self.max_segment_meters
    }

    /// Get the path cache capacity.
    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }

    /// Get the interpolated point ceiling.
    pub fn max_points(&self) -> usize {
        self.max_points
    }
}

#[inline]
fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            target_segment_pixels: DEFAULT_TARGET_SEGMENT_PIXELS,
            min_segment_meters: DEFAULT_MIN_SEGMENT_METERS,
            max_segment_meters: DEFAULT_MAX_SEGMENT_METERS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            max_points: DEFAULT_MAX_INTERPOLATED_POINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_equals_default() {
        assert_eq!(InterpolationConfig::new(), InterpolationConfig::default());
    }

    #[test]
    fn test_with_segment_bounds_orders_values() {
        let config = InterpolationConfig::new().with_segment_bounds(5000.0, 10.0);
        assert_eq!(config.min_segment_meters(), 10.0);
        assert_eq!(config.max_segment_meters(), 5000.0);
    }

    #[test]
    fn test_non_finite_segment_bounds_ignored() {
        let config = InterpolationConfig::new()
            .with_segment_bounds(f64::NAN, f64::NAN)
            .with_segment_bounds(10.0, f64::INFINITY)
            .with_segment_bounds(-5.0, 100.0);
        assert_eq!(config.min_segment_meters(), DEFAULT_MIN_SEGMENT_METERS);
        assert_eq!(config.max_segment_meters(), DEFAULT_MAX_SEGMENT_METERS);
    }

    #[test]
    fn test_non_finite_target_pixels_ignored() {
        let config = InterpolationConfig::new().with_target_segment_pixels(f64::NAN);
        assert_eq!(config.target_segment_pixels(), DEFAULT_TARGET_SEGMENT_PIXELS);
    }

    #[test]
    fn test_cache_capacity_has_floor_of_one() {
        let config = InterpolationConfig::new().with_cache_capacity(0);
        assert_eq!(config.cache_capacity(), 1);
    }

    #[test]
    fn test_builder_chain() {
        let config = InterpolationConfig::new()
            .with_target_segment_pixels(256.0)
            .with_cache_capacity(8)
            .with_max_points(500);

        assert_eq!(config.target_segment_pixels(), 256.0);
        assert_eq!(config.cache_capacity(), 8);
        assert_eq!(config.max_points(), 500);
        assert_eq!(config.min_segment_meters(), DEFAULT_MIN_SEGMENT_METERS); // Unchanged
    }

    #[test]
    fn test_copy_semantics() {
        let a = InterpolationConfig::new().with_max_points(42);
        let b = a;
        assert_eq!(a.max_points(), b.max_points());
    }
}
