//! Headless rendering surface.

use std::collections::HashMap;
use url::Url;

use super::types::{
    NativePolygon, NativePolyline, NativeTileLayer, ObjectId, PolygonChange, PolylineChange,
    Property, TileLayerChange,
};
use super::MapSurface;
use crate::geo::{CameraPosition, TileCoord};

/// Kind of a native object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Polygon,
    Polyline,
    TileLayer,
}

/// A native object held by [`InMemorySurface`].
#[derive(Debug, Clone)]
pub enum SurfaceObject {
    Polygon(NativePolygon),
    Polyline(NativePolyline),
    TileLayer(NativeTileLayer),
}

impl SurfaceObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            SurfaceObject::Polygon(_) => ObjectKind::Polygon,
            SurfaceObject::Polyline(_) => ObjectKind::Polyline,
            SurfaceObject::TileLayer(_) => ObjectKind::TileLayer,
        }
    }
}

/// Mutation applied to the surface, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    Added(ObjectId, ObjectKind),
    Changed(ObjectId, Property),
    Removed(ObjectId),
}

/// A [`MapSurface`] that keeps objects in memory and logs every mutation.
///
/// Useful for hosts without a real map view and for asserting exactly
/// which mutations a reconciliation produced.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    camera: CameraPosition,
    next_id: u64,
    objects: HashMap<ObjectId, SurfaceObject>,
    events: Vec<SurfaceEvent>,
}

impl InMemorySurface {
    /// Create an empty surface with the given camera.
    pub fn new(camera: CameraPosition) -> Self {
        Self {
            camera,
            ..Self::default()
        }
    }

    /// Move the camera. Does not touch any object.
    pub fn set_camera(&mut self, camera: CameraPosition) {
        self.camera = camera;
    }

    /// Look up any object.
    pub fn object(&self, id: ObjectId) -> Option<&SurfaceObject> {
        self.objects.get(&id)
    }

    pub fn polygon(&self, id: ObjectId) -> Option<&NativePolygon> {
        match self.objects.get(&id)? {
            SurfaceObject::Polygon(p) => Some(p),
            _ => None,
        }
    }

    pub fn polyline(&self, id: ObjectId) -> Option<&NativePolyline> {
        match self.objects.get(&id)? {
            SurfaceObject::Polyline(p) => Some(p),
            _ => None,
        }
    }

    pub fn tile_layer(&self, id: ObjectId) -> Option<&NativeTileLayer> {
        match self.objects.get(&id)? {
            SurfaceObject::TileLayer(l) => Some(l),
            _ => None,
        }
    }

    /// Ask tile layer `id` for the URL of `tile`, as the map would when drawing.
    ///
    /// Returns `None` for detached layers, non-layer ids and "no tile" answers.
    pub fn request_tile(&self, id: ObjectId, tile: TileCoord) -> Option<Url> {
        let layer = self.tile_layer(id)?;
        if !layer.attached {
            return None;
        }
        (layer.url_fn)(tile)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Every mutation so far, oldest first.
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Return and forget the mutation log.
    pub fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    fn insert(&mut self, object: SurfaceObject) -> ObjectId {
        self.next_id += 1;
        let id = ObjectId(self.next_id);
        self.events.push(SurfaceEvent::Added(id, object.kind()));
        self.objects.insert(id, object);
        id
    }
}

impl MapSurface for InMemorySurface {
    fn camera(&self) -> CameraPosition {
        self.camera
    }

    fn add_polygon(&mut self, polygon: NativePolygon) -> ObjectId {
        self.insert(SurfaceObject::Polygon(polygon))
    }

    fn update_polygon(&mut self, id: ObjectId, change: PolygonChange) {
        let Some(SurfaceObject::Polygon(polygon)) = self.objects.get_mut(&id) else {
            return;
        };
        let property = change.property();
        match change {
            PolygonChange::Path(path) => polygon.path = path,
            PolygonChange::Geodesic(geodesic) => polygon.geodesic = geodesic,
            PolygonChange::StrokeWidth(width) => polygon.stroke_width = width,
            PolygonChange::StrokeColor(color) => polygon.stroke_color = color,
            PolygonChange::FillColor(color) => polygon.fill_color = color,
        }
        self.events.push(SurfaceEvent::Changed(id, property));
    }

    fn add_polyline(&mut self, polyline: NativePolyline) -> ObjectId {
        self.insert(SurfaceObject::Polyline(polyline))
    }

    fn update_polyline(&mut self, id: ObjectId, change: PolylineChange) {
        let Some(SurfaceObject::Polyline(polyline)) = self.objects.get_mut(&id) else {
            return;
        };
        let property = change.property();
        match change {
            PolylineChange::Path(path) => polyline.path = path,
            PolylineChange::Geodesic(geodesic) => polyline.geodesic = geodesic,
            PolylineChange::StrokeWidth(width) => polyline.stroke_width = width,
            PolylineChange::StrokeColor(color) => polyline.stroke_color = color,
        }
        self.events.push(SurfaceEvent::Changed(id, property));
    }

    fn add_tile_layer(&mut self, layer: NativeTileLayer) -> ObjectId {
        self.insert(SurfaceObject::TileLayer(layer))
    }

    fn update_tile_layer(&mut self, id: ObjectId, change: TileLayerChange) {
        let Some(SurfaceObject::TileLayer(layer)) = self.objects.get_mut(&id) else {
            return;
        };
        let property = change.property();
        match change {
            TileLayerChange::Opacity(opacity) => layer.opacity = opacity,
            TileLayerChange::Attached(attached) => layer.attached = attached,
            TileLayerChange::UserAgent(user_agent) => layer.user_agent = user_agent,
        }
        self.events.push(SurfaceEvent::Changed(id, property));
    }

    fn remove(&mut self, id: ObjectId) {
        if self.objects.remove(&id).is_some() {
            self.events.push(SurfaceEvent::Removed(id));
        }
    }
}
