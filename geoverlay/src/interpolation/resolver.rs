//! Render path resolution for vector overlays.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::cache::InterpolationCache;
use super::geodesic::{
    create_interpolate_points, create_linear_interpolate_points, interpolated_point_count,
};
use super::hash::{cache_key, points_hash};
use super::policy::AdaptiveSegmentPolicy;
use super::ResolvedPath;
use crate::config::InterpolationConfig;
use crate::geo::{CameraPosition, GeoPoint};
use crate::log::Logger;
use crate::{log_debug, log_trace};

/// Counters describing how paths were resolved.
#[derive(Debug, Default)]
pub struct ResolverStats {
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    interpolations: AtomicU64,
    fallbacks: AtomicU64,
    linear: AtomicU64,
}

impl ResolverStats {
    /// Take a consistent-enough copy of the counters.
    pub fn snapshot(&self) -> ResolverStatsSnapshot {
        ResolverStatsSnapshot {
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            interpolations: self.interpolations.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
            linear: self.linear.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`ResolverStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolverStatsSnapshot {
    /// Geodesic requests served from the cache
    pub cache_hits: u64,
    /// Geodesic requests that missed the cache
    pub cache_misses: u64,
    /// Paths actually subdivided and cached
    pub interpolations: u64,
    /// Misses that exceeded the point ceiling and used the raw points
    pub fallbacks: u64,
    /// Non-geodesic paths resolved
    pub linear: u64,
}

impl ResolverStatsSnapshot {
    /// Total path resolutions of any kind.
    pub fn total(&self) -> u64 {
        self.cache_hits + self.cache_misses + self.linear
    }
}

/// Turns an overlay's points into the path handed to the rendering surface.
///
/// Geodesic paths go through the adaptive policy and the LRU cache;
/// everything else takes the linear pass-through. One resolver (and so one
/// cache) belongs to each overlay-kind renderer.
pub struct PathResolver {
    policy: AdaptiveSegmentPolicy,
    cache: InterpolationCache,
    max_points: usize,
    stats: ResolverStats,
    logger: Arc<dyn Logger>,
}

impl PathResolver {
    /// Create a resolver from the interpolation configuration.
    pub fn new(config: &InterpolationConfig, logger: Arc<dyn Logger>) -> Self {
        Self {
            policy: AdaptiveSegmentPolicy::new(config),
            cache: InterpolationCache::new(config.cache_capacity()),
            max_points: config.max_points(),
            stats: ResolverStats::default(),
            logger,
        }
    }

    /// Resolve the render path for `points` as seen from `camera`.
    ///
    /// Never fails: when subdivision would exceed the point ceiling the raw
    /// points are returned instead (and not cached).
    pub fn resolve(&self, points: &[GeoPoint], geodesic: bool, camera: &CameraPosition) -> ResolvedPath {
        if !geodesic {
            self.stats.linear.fetch_add(1, Ordering::Relaxed);
            return Arc::from(create_linear_interpolate_points(points));
        }

        let max_segment = self
            .policy
            .max_segment_length_meters(camera.zoom, camera.target.latitude);
        let key = cache_key(points_hash(points), max_segment);

        let mut missed = false;
        let resolved = self.cache.get_or_try_insert_with(key, || {
            missed = true;
            let count = interpolated_point_count(points, max_segment);
            if count > self.max_points {
                return Err(count);
            }
            Ok(ResolvedPath::from(create_interpolate_points(points, max_segment)))
        });

        match resolved {
            Ok(path) if missed => {
                self.stats.cache_misses.fetch_add(1, Ordering::Relaxed);
                self.stats.interpolations.fetch_add(1, Ordering::Relaxed);
                log_trace!(
                    self.logger,
                    "interpolated path {}: {} -> {} points",
                    key,
                    points.len(),
                    path.len()
                );
                path
            }
            Ok(path) => {
                self.stats.cache_hits.fetch_add(1, Ordering::Relaxed);
                path
            }
            Err(count) => {
                self.stats.cache_misses.fetch_add(1, Ordering::Relaxed);
                self.stats.fallbacks.fetch_add(1, Ordering::Relaxed);
                log_debug!(
                    self.logger,
                    "path {} would need {} points (limit {}), using raw points",
                    key,
                    count,
                    self.max_points
                );
                Arc::from(points)
            }
        }
    }

    /// Resolution counters.
    pub fn stats(&self) -> ResolverStatsSnapshot {
        self.stats.snapshot()
    }

    /// The segment length policy in use.
    pub fn policy(&self) -> &AdaptiveSegmentPolicy {
        &self.policy
    }

    /// The path cache in use.
    pub fn cache(&self) -> &InterpolationCache {
        &self.cache
    }
}
