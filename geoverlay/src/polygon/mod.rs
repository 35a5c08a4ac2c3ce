//! Polygon overlays.

mod renderer;
mod state;

pub use renderer::PolygonRenderer;
pub use state::{PolygonField, PolygonFingerprint, PolygonState};
