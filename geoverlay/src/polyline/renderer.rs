use std::sync::Arc;

use super::state::{PolylineField, PolylineState};
use crate::config::InterpolationConfig;
use crate::interpolation::{PathResolver, ResolvedPath};
use crate::log::Logger;
use crate::log_trace;
use crate::overlay::{OverlayEntity, OverlayRenderer};
use crate::surface::{MapSurface, NativePolyline, ObjectId, PolylineChange};

/// Renders [`PolylineState`]s as native, non-tappable polylines.
pub struct PolylineRenderer {
    resolver: PathResolver,
    logger: Arc<dyn Logger>,
}

impl PolylineRenderer {
    pub fn new(config: &InterpolationConfig, logger: Arc<dyn Logger>) -> Self {
        Self {
            resolver: PathResolver::new(config, Arc::clone(&logger)),
            logger,
        }
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    fn resolve_path<S: MapSurface + ?Sized>(&self, state: &PolylineState, surface: &S) -> ResolvedPath {
        self.resolver
            .resolve(&state.points, state.geodesic, &surface.camera())
    }
}

impl OverlayRenderer for PolylineRenderer {
    type State = PolylineState;

    fn create_renderable<S: MapSurface + ?Sized>(
        &self,
        state: &PolylineState,
        surface: Option<&mut S>,
    ) -> Option<ObjectId> {
        let surface = surface?;
        let polyline = NativePolyline {
            path: self.resolve_path(state, surface),
            stroke_color: state.stroke_color,
            stroke_width: state.stroke_width,
            geodesic: state.geodesic,
            tappable: false,
            tag: state.id.clone(),
        };
        let handle = surface.add_polyline(polyline);
        log_trace!(self.logger, "polyline {} created as {}", state.id, handle);
        Some(handle)
    }

    fn update_renderable<S: MapSurface + ?Sized>(
        &self,
        handle: ObjectId,
        current: &OverlayEntity<PolylineState>,
        previous: &OverlayEntity<PolylineState>,
        surface: Option<&mut S>,
    ) -> Option<ObjectId> {
        let surface = surface?;
        let state = &current.state;
        let changes = current.changes_since(previous);

        if changes.contains_any(&[PolylineField::Points, PolylineField::Geodesic]) {
            let path = self.resolve_path(state, surface);
            surface.update_polyline(handle, PolylineChange::Path(path));
            surface.update_polyline(handle, PolylineChange::Geodesic(state.geodesic));
        }
        if changes.contains(PolylineField::StrokeWidth) {
            surface.update_polyline(handle, PolylineChange::StrokeWidth(state.stroke_width));
        }
        if changes.contains(PolylineField::StrokeColor) {
            surface.update_polyline(handle, PolylineChange::StrokeColor(state.stroke_color));
        }
        Some(handle)
    }

    fn refresh_renderable<S: MapSurface + ?Sized>(
        &self,
        handle: ObjectId,
        entity: &OverlayEntity<PolylineState>,
        surface: Option<&mut S>,
    ) -> Option<ObjectId> {
        let surface = surface?;
        if entity.state.geodesic {
            let path = self.resolve_path(&entity.state, surface);
            surface.update_polyline(handle, PolylineChange::Path(path));
        }
        Some(handle)
    }
}
