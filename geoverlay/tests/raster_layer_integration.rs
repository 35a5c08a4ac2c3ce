//! Integration tests for tiled raster layers.
//!
//! Covers tile URL resolution for XYZ, TMS and ArcGIS sources, source
//! replacement, visibility, and capability warnings for features the
//! surface cannot honor.
//!
//! Run with: `cargo test --test raster_layer_integration`

use std::sync::Arc;

use geoverlay::config::RasterConfig;
use geoverlay::geo::{CameraPosition, TileCoord};
use geoverlay::log::MemoryLogger;
use geoverlay::overlay::{OverlayController, ReconcileReport};
use geoverlay::raster::{RasterLayerRenderer, RasterLayerState, RasterSource, TileScheme, UrlTemplate};
use geoverlay::surface::{InMemorySurface, ObjectId};

// ============================================================================
// Test Helpers
// ============================================================================

struct Fixture {
    controller: OverlayController<RasterLayerRenderer>,
    logger: Arc<MemoryLogger>,
    surface: InMemorySurface,
}

impl Fixture {
    fn new() -> Self {
        Self::with_config(RasterConfig::default())
    }

    fn with_config(config: RasterConfig) -> Self {
        let logger = Arc::new(MemoryLogger::new());
        let renderer = RasterLayerRenderer::new(&config, logger.clone());
        Self {
            controller: OverlayController::new(renderer, logger.clone()),
            logger,
            surface: InMemorySurface::new(CameraPosition::default()),
        }
    }

    fn reconcile(&mut self, states: Vec<RasterLayerState>) -> ReconcileReport {
        self.controller.reconcile(states, Some(&mut self.surface))
    }

    fn handle(&self, id: &str) -> ObjectId {
        self.controller
            .entity(id)
            .and_then(|entity| entity.handle)
            .expect("layer rendered")
    }

    fn tile_url(&self, id: &str, tile: TileCoord) -> Option<String> {
        self.surface
            .request_tile(self.handle(id), tile)
            .map(|url| url.to_string())
    }
}

fn xyz(id: &str) -> RasterLayerState {
    RasterLayerState::new(id, UrlTemplate::new("https://tiles.example.com/{z}/{x}/{y}.png"))
}

// ============================================================================
// URL resolution
// ============================================================================

#[test]
fn test_xyz_and_tms_rows() {
    let mut fixture = Fixture::new();
    fixture.reconcile(vec![
        xyz("xyz"),
        RasterLayerState::new(
            "tms",
            UrlTemplate::new("https://tiles.example.com/{z}/{x}/{y}.png").with_scheme(TileScheme::Tms),
        ),
    ]);

    let tile = TileCoord::new(1, 2, 3);
    assert_eq!(
        fixture.tile_url("xyz", tile).as_deref(),
        Some("https://tiles.example.com/3/1/2.png")
    );
    assert_eq!(
        fixture.tile_url("tms", tile).as_deref(),
        Some("https://tiles.example.com/3/1/5.png")
    );
    assert_eq!(fixture.tile_url("tms", TileCoord::new(0, 9, 3)), None);
}

#[test]
fn test_arcgis_service_is_normalized() {
    let mut fixture = Fixture::new();
    fixture.reconcile(vec![RasterLayerState::new(
        "imagery",
        RasterSource::ArcGisService(" https://host/arcgis/rest/services/World/MapServer/ ".into()),
    )]);

    assert_eq!(
        fixture.tile_url("imagery", TileCoord::new(3, 5, 4)).as_deref(),
        Some("https://host/arcgis/rest/services/World/MapServer/tile/4/5/3")
    );
    assert!(fixture.logger.warnings().is_empty());
}

#[test]
fn test_zoom_range_limits_tiles() {
    let mut fixture = Fixture::new();
    fixture.reconcile(vec![RasterLayerState::new(
        "detail",
        UrlTemplate::new("https://t.example.com/{z}/{x}/{y}")
            .with_min_zoom(10)
            .with_max_zoom(14),
    )]);

    assert_eq!(fixture.tile_url("detail", TileCoord::new(0, 0, 9)), None);
    assert!(fixture.tile_url("detail", TileCoord::new(0, 0, 12)).is_some());
    assert_eq!(fixture.tile_url("detail", TileCoord::new(0, 0, 15)), None);
}

// ============================================================================
// Property updates
// ============================================================================

#[test]
fn test_visibility_detaches_without_rebuilding() {
    let mut fixture = Fixture::new();
    fixture.reconcile(vec![xyz("base")]);
    let handle = fixture.handle("base");

    let report = fixture.reconcile(vec![xyz("base").with_visible(false)]);

    assert_eq!(report.updated, 1);
    assert_eq!(fixture.handle("base"), handle);
    assert_eq!(fixture.surface.request_tile(handle, TileCoord::new(0, 0, 0)), None);

    fixture.reconcile(vec![xyz("base")]);
    assert!(fixture.tile_url("base", TileCoord::new(0, 0, 0)).is_some());
}

#[test]
fn test_source_change_replaces_layer() {
    let mut fixture = Fixture::new();
    fixture.reconcile(vec![xyz("base").with_opacity(0.4)]);
    let old = fixture.handle("base");

    let report = fixture.reconcile(vec![xyz("base")
        .with_opacity(0.4)
        .with_source(RasterSource::ArcGisService("https://host/MapServer".into()))]);

    assert_eq!(report.updated, 1);
    let new = fixture.handle("base");
    assert_ne!(new, old);
    assert!(!fixture.surface.contains(old));
    assert_eq!(fixture.surface.tile_layer(new).map(|l| l.opacity), Some(0.4));
    assert_eq!(fixture.surface.len(), 1);
}

#[test]
fn test_source_change_without_surface_rebuilds_later() {
    let mut fixture = Fixture::new();
    fixture.reconcile(vec![xyz("base")]);
    let old = fixture.handle("base");
    let arcgis = xyz("base").with_source(RasterSource::ArcGisService("https://host/MapServer".into()));

    let report = fixture
        .controller
        .reconcile(vec![arcgis.clone()], None::<&mut InMemorySurface>);
    assert_eq!(report.deferred, 1);
    assert_eq!(fixture.handle("base"), old);

    let report = fixture.reconcile(vec![arcgis]);

    assert_eq!(report.updated, 1);
    let new = fixture.handle("base");
    assert_ne!(new, old);
    assert!(!fixture.surface.contains(old));
    assert_eq!(fixture.surface.len(), 1);
    assert_eq!(
        fixture.tile_url("base", TileCoord::new(1, 2, 3)),
        Some("https://host/MapServer/tile/3/2/1".to_string())
    );
}

#[test]
fn test_configured_defaults_apply() {
    let config = RasterConfig::default()
        .with_default_user_agent("fleet-viewer/2.1")
        .with_z_index(5);
    let mut fixture = Fixture::with_config(config);
    fixture.reconcile(vec![xyz("base")]);

    let layer = fixture
        .surface
        .tile_layer(fixture.handle("base"))
        .expect("layer rendered");
    assert_eq!(layer.user_agent, "fleet-viewer/2.1");
    assert_eq!(layer.z_index, 5);
}

// ============================================================================
// Capability warnings
// ============================================================================

#[test]
fn test_tilejson_warns_once_and_never_renders() {
    let mut fixture = Fixture::new();
    let state = RasterLayerState::new("vector-tiles", RasterSource::TileJson("https://host/tiles.json".into()));

    for _ in 0..3 {
        let report = fixture.reconcile(vec![state.clone(), xyz("base")]);
        assert_eq!(report.deferred, 1);
    }

    let warnings = fixture.logger.warnings();
    assert_eq!(warnings.len(), 1, "warnings: {warnings:?}");
    assert!(warnings[0].contains("vector-tiles"));
    assert_eq!(fixture.surface.len(), 1, "the sibling layer still renders");
}

#[test]
fn test_tilejson_with_headers_warns_about_headers_too() {
    let mut fixture = Fixture::new();
    let state = RasterLayerState::new("private-tiles", RasterSource::TileJson("https://host/tiles.json".into()))
        .with_header("X-Api-Key", "k");

    fixture.reconcile(vec![state.clone()]);
    fixture.reconcile(vec![state]);

    let warnings = fixture.logger.warnings();
    assert_eq!(warnings.len(), 2, "warnings: {warnings:?}");
    assert!(warnings.iter().all(|w| w.contains("private-tiles")));
    assert!(fixture.surface.is_empty());
}

#[test]
fn test_extra_headers_warn_with_layer_id() {
    let mut fixture = Fixture::new();
    fixture.reconcile(vec![xyz("secure").with_header("Authorization", "Bearer abc")]);

    let warnings = fixture.logger.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("secure"));
    assert!(fixture.tile_url("secure", TileCoord::new(0, 0, 0)).is_some());

    // Unchanged headers do not warn again
    fixture.reconcile(vec![xyz("secure").with_header("Authorization", "Bearer abc")]);
    assert_eq!(fixture.logger.warnings().len(), 1);
}
