//! Default values and constants for all configuration settings.

// =============================================================================
// Interpolation
// =============================================================================

/// Target on-screen length of one interpolated segment, in pixels.
///
/// At zoom 16 near the equator one pixel covers ~2.39 m, so 400 px is
/// roughly one segment per kilometer.
pub const DEFAULT_TARGET_SEGMENT_PIXELS: f64 = 400.0;

/// Shortest segment the adaptive policy will ask for, in meters.
pub const DEFAULT_MIN_SEGMENT_METERS: f64 = 50.0;

/// Longest segment the adaptive policy will ask for, in meters.
pub const DEFAULT_MAX_SEGMENT_METERS: f64 = 100_000.0;

/// Resolved paths kept per overlay-kind renderer.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Interpolated paths longer than this fall back to the raw points.
pub const DEFAULT_MAX_INTERPOLATED_POINTS: usize = 10_000;

// =============================================================================
// Raster layers
// =============================================================================

/// Tile layer z-index applied on creation.
pub const DEFAULT_TILE_LAYER_Z_INDEX: i32 = 0;

/// User agent sent with tile requests when the layer state has none.
pub fn default_user_agent() -> String {
    format!("geoverlay/{}", crate::VERSION)
}

// =============================================================================
// Logging
// =============================================================================

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "geoverlay.log";
