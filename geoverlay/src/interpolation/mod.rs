//! Adaptive geodesic interpolation.
//!
//! - [`hash`]: point sequence fingerprints and cache keys
//! - [`policy`]: zoom/latitude to target segment length
//! - [`geodesic`]: great-circle subdivision
//! - [`cache`]: bounded LRU store of resolved paths
//! - [`resolver`]: ties the above together for one renderer

pub mod cache;
pub mod geodesic;
pub mod hash;
pub mod policy;
pub mod resolver;

use std::sync::Arc;

use crate::geo::GeoPoint;

/// A resolved render path; shared so cache hits hand out the same allocation.
pub type ResolvedPath = Arc<[GeoPoint]>;

pub use cache::{InterpolationCache, LruCache};
pub use geodesic::{
    create_interpolate_points, create_linear_interpolate_points, interpolated_point_count,
};
pub use hash::{cache_key, points_hash, CacheKey};
pub use policy::{meters_per_pixel, AdaptiveSegmentPolicy};
pub use resolver::{PathResolver, ResolverStats, ResolverStatsSnapshot};
