//! geoverlay - Declarative map overlays with adaptive geodesic interpolation
//!
//! Hosts declare polygons, polylines and tiled raster layers by id; an
//! [`overlay::OverlayController`] per overlay kind keeps a rendering surface in
//! step with those declarations, touching only the native properties whose
//! values changed. Geodesic shapes are subdivided along great circles just
//! finely enough for the current zoom, and the subdivided paths are cached
//! by content.
//!
//! # Example
//!
//! ```ignore
//! use geoverlay::config::InterpolationConfig;
//! use geoverlay::log::TracingLogger;
//! use geoverlay::overlay::OverlayController;
//! use geoverlay::polygon::{PolygonRenderer, PolygonState};
//!
//! let logger = Arc::new(TracingLogger);
//! let renderer = PolygonRenderer::new(&InterpolationConfig::default(), logger.clone());
//! let mut polygons = OverlayController::new(renderer, logger);
//!
//! let report = polygons.reconcile(states, Some(&mut surface));
//!
//! // After the camera moved
//! polygons.refresh_paths(Some(&mut surface));
//! ```

pub mod config;
pub mod geo;
pub mod interpolation;
pub mod log;
pub mod logging;
pub mod overlay;
pub mod polygon;
pub mod polyline;
pub mod raster;
pub mod surface;

/// Version of the geoverlay library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
