//! Polygon rendering

use std::sync::Arc;

use super::state::{PolygonField, PolygonState};
use crate::config::InterpolationConfig;
use crate::interpolation::{PathResolver, ResolvedPath};
use crate::log::Logger;
use crate::log_trace;
use crate::overlay::{OverlayEntity, OverlayRenderer};
use crate::surface::{MapSurface, NativePolygon, ObjectId, PolygonChange};

/// Renders [`PolygonState`]s as native polygons.
///
/// Owns the path resolver, and therefore the interpolation cache, shared by
/// every polygon it renders.
pub struct PolygonRenderer {
    resolver: PathResolver,
    logger: Arc<dyn Logger>,
}

impl PolygonRenderer {
    pub fn new(config: &InterpolationConfig, logger: Arc<dyn Logger>) -> Self {
        Self {
            resolver: PathResolver::new(config, Arc::clone(&logger)),
            logger,
        }
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    fn resolve_path<S: MapSurface + ?Sized>(&self, state: &PolygonState, surface: &S) -> ResolvedPath {
        self.resolver
            .resolve(&state.points, state.geodesic, &surface.camera())
    }
}

impl OverlayRenderer for PolygonRenderer {
    type State = PolygonState;

    fn create_renderable<S: MapSurface + ?Sized>(
        &self,
        state: &PolygonState,
        surface: Option<&mut S>,
    ) -> Option<ObjectId> {
        let surface = surface?;
        let polygon = NativePolygon {
            path: self.resolve_path(state, surface),
            stroke_color: state.stroke_color,
            stroke_width: state.stroke_width,
            fill_color: state.fill_color,
            geodesic: state.geodesic,
            tag: state.id.clone(),
        };
        let handle = surface.add_polygon(polygon);
        log_trace!(self.logger, "polygon {} created as {}", state.id, handle);
        Some(handle)
    }

    fn update_renderable<S: MapSurface + ?Sized>(
        &self,
        handle: ObjectId,
        current: &OverlayEntity<PolygonState>,
        previous: &OverlayEntity<PolygonState>,
        surface: Option<&mut S>,
    ) -> Option<ObjectId> {
        let surface = surface?;
        let state = &current.state;
        let changes = current.changes_since(previous);

        if changes.contains_any(&[PolygonField::Points, PolygonField::Geodesic]) {
            let path = self.resolve_path(state, surface);
            surface.update_polygon(handle, PolygonChange::Path(path));
            surface.update_polygon(handle, PolygonChange::Geodesic(state.geodesic));
        }
        if changes.contains(PolygonField::StrokeWidth) {
            surface.update_polygon(handle, PolygonChange::StrokeWidth(state.stroke_width));
        }
        if changes.contains(PolygonField::StrokeColor) {
            surface.update_polygon(handle, PolygonChange::StrokeColor(state.stroke_color));
        }
        if changes.contains(PolygonField::FillColor) {
            surface.update_polygon(handle, PolygonChange::FillColor(state.fill_color));
        }
        Some(handle)
    }

    fn refresh_renderable<S: MapSurface + ?Sized>(
        &self,
        handle: ObjectId,
        entity: &OverlayEntity<PolygonState>,
        surface: Option<&mut S>,
    ) -> Option<ObjectId> {
        let surface = surface?;
        if entity.state.geodesic {
            let path = self.resolve_path(&entity.state, surface);
            surface.update_polygon(handle, PolygonChange::Path(path));
        }
        Some(handle)
    }
}
