//! Polyline overlays.

mod renderer;
mod state;

pub use renderer::PolylineRenderer;
pub use state::{PolylineField, PolylineFingerprint, PolylineState};
