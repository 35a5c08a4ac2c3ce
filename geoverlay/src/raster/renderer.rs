//! Raster layer rendering

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use super::state::{RasterLayerField, RasterLayerState};
use crate::config::RasterConfig;
use crate::log::Logger;
use crate::overlay::{OverlayEntity, OverlayRenderer};
use crate::surface::{MapSurface, NativeTileLayer, ObjectId, TileLayerChange};
use crate::{log_trace, log_warn};

/// A raster feature the surface cannot honor.
///
/// Reported through the logger at warn level, tagged with the layer id.
/// Never aborts the layer or its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityWarning {
    #[error("raster layer {id}: extra headers are not supported and will be ignored")]
    ExtraHeadersIgnored { id: String },

    #[error("raster layer {id}: tilejson sources are not supported")]
    TileJsonUnsupported { id: String },
}

impl CapabilityWarning {
    /// Id of the layer the warning is about.
    pub fn id(&self) -> &str {
        match self {
            CapabilityWarning::ExtraHeadersIgnored { id } => id,
            CapabilityWarning::TileJsonUnsupported { id } => id,
        }
    }
}

/// Renders [`RasterLayerState`]s as native tile layers.
///
/// Visibility maps to attachment: a hidden layer keeps its native object
/// but is detached from the map.
pub struct RasterLayerRenderer {
    config: RasterConfig,
    logger: Arc<dyn Logger>,
    /// Layers already warned about an unsupported source. Creation of such
    /// layers is retried every pass; the warning is not.
    unsupported: Mutex<HashSet<String>>,
}

impl RasterLayerRenderer {
    pub fn new(config: &RasterConfig, logger: Arc<dyn Logger>) -> Self {
        Self {
            config: config.clone(),
            logger,
            unsupported: Mutex::new(HashSet::new()),
        }
    }

    fn warn(&self, warning: CapabilityWarning) {
        log_warn!(self.logger, "{}", warning);
    }

    fn warn_extra_headers(&self, state: &RasterLayerState) {
        if state.has_extra_headers() {
            self.warn(CapabilityWarning::ExtraHeadersIgnored {
                id: state.id.clone(),
            });
        }
    }

    fn user_agent(&self, state: &RasterLayerState) -> String {
        match state.user_agent.as_deref().map(str::trim) {
            Some(user_agent) if !user_agent.is_empty() => user_agent.to_string(),
            _ => self.config.default_user_agent().to_string(),
        }
    }

    /// Build the native layer, or `None` when the source has no template.
    ///
    /// Warns about ignored headers either way; for a TileJSON source both
    /// warnings share its once-per-id dedup.
    fn build_layer(&self, state: &RasterLayerState) -> Option<NativeTileLayer> {
        let Some(template) = state.source.resolve_template() else {
            if self.unsupported.lock().insert(state.id.clone()) {
                self.warn_extra_headers(state);
                self.warn(CapabilityWarning::TileJsonUnsupported {
                    id: state.id.clone(),
                });
            }
            return None;
        };
        self.unsupported.lock().remove(&state.id);
        self.warn_extra_headers(state);

        Some(NativeTileLayer {
            url_fn: template.to_url_fn(),
            tile_size: template.tile_size.max(1),
            opacity: state.opacity,
            z_index: self.config.z_index(),
            user_agent: self.user_agent(state),
            attached: state.visible,
            tag: state.id.clone(),
        })
    }
}

impl OverlayRenderer for RasterLayerRenderer {
    type State = RasterLayerState;

    fn create_renderable<S: MapSurface + ?Sized>(
        &self,
        state: &RasterLayerState,
        surface: Option<&mut S>,
    ) -> Option<ObjectId> {
        let surface = surface?;
        let layer = self.build_layer(state)?;
        let handle = surface.add_tile_layer(layer);
        log_trace!(
            self.logger,
            "raster layer {} created as {} from {}",
            state.id,
            handle,
            state.source.kind()
        );
        Some(handle)
    }

    /// A source change replaces the native layer; the returned id then
    /// differs from `handle`.
    fn update_renderable<S: MapSurface + ?Sized>(
        &self,
        handle: ObjectId,
        current: &OverlayEntity<RasterLayerState>,
        previous: &OverlayEntity<RasterLayerState>,
        surface: Option<&mut S>,
    ) -> Option<ObjectId> {
        let surface = surface?;
        let state = &current.state;
        let changes = current.changes_since(previous);

        if changes.contains(RasterLayerField::Source) {
            surface.remove(handle);
            let layer = self.build_layer(state)?;
            let rebuilt = surface.add_tile_layer(layer);
            log_trace!(
                self.logger,
                "raster layer {} rebuilt as {} from {}",
                state.id,
                rebuilt,
                state.source.kind()
            );
            return Some(rebuilt);
        }

        if changes.contains(RasterLayerField::Opacity) {
            surface.update_tile_layer(handle, TileLayerChange::Opacity(state.opacity));
        }
        if changes.contains(RasterLayerField::Visible) {
            surface.update_tile_layer(handle, TileLayerChange::Attached(state.visible));
        }
        if changes.contains(RasterLayerField::UserAgent) {
            surface.update_tile_layer(handle, TileLayerChange::UserAgent(self.user_agent(state)));
        }
        if changes.contains(RasterLayerField::ExtraHeaders) {
            self.warn_extra_headers(state);
        }
        Some(handle)
    }

    fn remove_renderable<S: MapSurface + ?Sized>(
        &self,
        entity: &OverlayEntity<RasterLayerState>,
        surface: Option<&mut S>,
    ) {
        self.unsupported.lock().remove(entity.id());
        if let (Some(handle), Some(surface)) = (entity.handle, surface) {
            surface.remove(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{CameraPosition, TileCoord};
    use crate::log::{LogLevel, MemoryLogger};
    use crate::raster::{RasterSource, UrlTemplate};
    use crate::surface::{InMemorySurface, Property, SurfaceEvent};

    fn setup() -> (RasterLayerRenderer, Arc<MemoryLogger>, InMemorySurface) {
        let logger = Arc::new(MemoryLogger::new());
        let renderer = RasterLayerRenderer::new(&RasterConfig::default(), logger.clone());
        (renderer, logger, InMemorySurface::new(CameraPosition::default()))
    }

    fn osm() -> RasterLayerState {
        RasterLayerState::new("osm", UrlTemplate::new("https://tile.example.org/{z}/{x}/{y}.png"))
    }

    #[test]
    fn test_create_tile_layer() {
        let (renderer, logger, mut surface) = setup();
        let state = osm().with_opacity(0.7);

        let handle = renderer
            .create_renderable(&state, Some(&mut surface))
            .expect("layer created");
        let layer = surface.tile_layer(handle).expect("layer registered");

        assert_eq!(layer.tile_size, 256);
        assert_eq!(layer.opacity, 0.7);
        assert!(layer.attached);
        assert_eq!(layer.tag, "osm");
        assert_eq!(layer.user_agent, RasterConfig::default().default_user_agent());
        assert_eq!(
            surface
                .request_tile(handle, TileCoord::new(1, 2, 3))
                .map(|u| u.to_string()),
            Some("https://tile.example.org/3/1/2.png".to_string())
        );
        assert!(logger.warnings().is_empty());
    }

    #[test]
    fn test_tile_size_at_least_one() {
        let (renderer, _, mut surface) = setup();
        let state = RasterLayerState::new("tiny", UrlTemplate::new("https://t/{z}/{x}/{y}").with_tile_size(0));
        let handle = renderer
            .create_renderable(&state, Some(&mut surface))
            .expect("layer created");
        assert_eq!(surface.tile_layer(handle).map(|l| l.tile_size), Some(1));
    }

    #[test]
    fn test_blank_user_agent_uses_default() {
        let (renderer, _, mut surface) = setup();
        let state = osm().with_user_agent("   ");
        let handle = renderer
            .create_renderable(&state, Some(&mut surface))
            .expect("layer created");
        assert_eq!(
            surface.tile_layer(handle).map(|l| l.user_agent.clone()),
            Some(RasterConfig::default().default_user_agent().to_string())
        );
    }

    #[test]
    fn test_tilejson_warns_and_yields_nothing() {
        let (renderer, logger, mut surface) = setup();
        let state = RasterLayerState::new("tj", RasterSource::TileJson("https://host/t.json".into()));

        assert!(renderer.create_renderable(&state, Some(&mut surface)).is_none());
        assert!(renderer.create_renderable(&state, Some(&mut surface)).is_none());

        let warnings = logger.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("tj"));
        assert!(surface.is_empty());
    }

    #[test]
    fn test_extra_headers_warn_once_per_create() {
        let (renderer, logger, mut surface) = setup();
        let state = RasterLayerState::new("sat", RasterSource::ArcGisService("https://host/MapServer/".into()))
            .with_header("Authorization", "Bearer token");

        let handle = renderer.create_renderable(&state, Some(&mut surface));
        assert!(handle.is_some());
        assert_eq!(logger.messages_at(LogLevel::Warn).len(), 1);
        assert!(logger.warnings()[0].contains("sat"));
    }

    #[test]
    fn test_tilejson_with_headers_warns_about_both() {
        let (renderer, logger, mut surface) = setup();
        let state = RasterLayerState::new("tj", RasterSource::TileJson("https://host/t.json".into()))
            .with_header("Authorization", "Bearer token");

        assert!(renderer.create_renderable(&state, Some(&mut surface)).is_none());

        let warnings = logger.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.contains("tj")));
        assert!(surface.is_empty());
    }

    #[test]
    fn test_update_patches_only_changed_fields() {
        let (renderer, _, mut surface) = setup();
        let previous = OverlayEntity::new(osm());
        let handle = renderer
            .create_renderable(&previous.state, Some(&mut surface))
            .expect("layer created");
        surface.take_events();

        let current = OverlayEntity::new(osm().with_visible(false).with_user_agent("fieldkit/1.0"));
        let result = renderer.update_renderable(handle, &current, &previous, Some(&mut surface));

        assert_eq!(result, Some(handle));
        assert_eq!(
            surface.events(),
            &[
                SurfaceEvent::Changed(handle, Property::Attached),
                SurfaceEvent::Changed(handle, Property::UserAgent),
            ]
        );
        let layer = surface.tile_layer(handle).expect("layer registered");
        assert!(!layer.attached);
        assert_eq!(layer.user_agent, "fieldkit/1.0");
    }

    #[test]
    fn test_source_change_rebuilds_layer() {
        let (renderer, _, mut surface) = setup();
        let previous = OverlayEntity::new(osm());
        let handle = renderer
            .create_renderable(&previous.state, Some(&mut surface))
            .expect("layer created");

        let current = OverlayEntity::new(
            osm().with_source(RasterSource::ArcGisService("https://host/MapServer".into())),
        );
        let rebuilt = renderer
            .update_renderable(handle, &current, &previous, Some(&mut surface))
            .expect("layer rebuilt");

        assert_ne!(rebuilt, handle);
        assert!(!surface.contains(handle));
        assert_eq!(
            surface
                .request_tile(rebuilt, TileCoord::new(1, 2, 3))
                .map(|u| u.to_string()),
            Some("https://host/MapServer/tile/3/2/1".to_string())
        );
    }

    #[test]
    fn test_header_change_warns_without_mutation() {
        let (renderer, logger, mut surface) = setup();
        let previous = OverlayEntity::new(osm());
        let handle = renderer
            .create_renderable(&previous.state, Some(&mut surface))
            .expect("layer created");
        surface.take_events();

        let current = OverlayEntity::new(osm().with_header("X-Api-Key", "k"));
        let result = renderer.update_renderable(handle, &current, &previous, Some(&mut surface));

        assert_eq!(result, Some(handle));
        assert!(surface.events().is_empty());
        assert_eq!(logger.warnings().len(), 1);
    }
}
