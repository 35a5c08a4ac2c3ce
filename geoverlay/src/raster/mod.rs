//! Tiled raster layer overlays.
//!
//! Sources are resolved to a [`UrlTemplate`] (ArcGIS services are
//! normalized first) and handed to the surface as a tile URL function.
//! Features the surface cannot honor produce a [`CapabilityWarning`] in the
//! log instead of an error.

mod renderer;
mod source;
mod state;
mod url;

pub use renderer::{CapabilityWarning, RasterLayerRenderer};
pub use source::{RasterSource, TileScheme, UrlTemplate, DEFAULT_TILE_SIZE};
pub use state::{RasterLayerField, RasterLayerFingerprint, RasterLayerState};
