//! Rendering surface abstraction.
//!
//! The surface owns every native object; renderers only hold [`ObjectId`]s.
//! Renderers receive the surface per call as `Option<&mut S>`,
//! where `None` means the map view is currently unavailable.

mod memory;
mod types;

pub use memory::{InMemorySurface, ObjectKind, SurfaceEvent, SurfaceObject};
pub use types::{
    Color, NativePolygon, NativePolyline, NativeTileLayer, ObjectId, PolygonChange,
    PolylineChange, Property, TileLayerChange, TileUrlFn,
};

use crate::geo::CameraPosition;

/// Capabilities the reconcilers need from a map view.
///
/// Implementations are driven from a single thread. Updates and removals
/// addressed to unknown ids are ignored, which makes removal idempotent.
pub trait MapSurface {
    /// Current camera.
    fn camera(&self) -> CameraPosition;

    /// Attach a new polygon and return its id.
    fn add_polygon(&mut self, polygon: NativePolygon) -> ObjectId;

    /// Patch one property of a polygon.
    fn update_polygon(&mut self, id: ObjectId, change: PolygonChange);

    /// Attach a new polyline and return its id.
    fn add_polyline(&mut self, polyline: NativePolyline) -> ObjectId;

    /// Patch one property of a polyline.
    fn update_polyline(&mut self, id: ObjectId, change: PolylineChange);

    /// Register a new tile layer (shown only if `layer.attached`) and return its id.
    fn add_tile_layer(&mut self, layer: NativeTileLayer) -> ObjectId;

    /// Patch one property of a tile layer.
    fn update_tile_layer(&mut self, id: ObjectId, change: TileLayerChange);

    /// Detach and drop an object. No-op for unknown ids.
    fn remove(&mut self, id: ObjectId);
}
