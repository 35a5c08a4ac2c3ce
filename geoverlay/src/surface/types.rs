//! Native object and change types exchanged with the rendering surface.

use std::fmt;
use std::sync::Arc;
use url::Url;

use crate::geo::TileCoord;
use crate::interpolation::ResolvedPath;

/// Identifier of a native object owned by a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

/// Function a tile layer calls to turn a tile address into a URL.
///
/// `None` means "no tile here".
pub type TileUrlFn = Arc<dyn Fn(TileCoord) -> Option<Url> + Send + Sync>;

/// A filled polygon as handed to the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct NativePolygon {
    pub path: ResolvedPath,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub fill_color: Color,
    pub geodesic: bool,
    /// Correlation tag: the overlay id that produced this object
    pub tag: String,
}

/// A stroked polyline as handed to the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct NativePolyline {
    pub path: ResolvedPath,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub geodesic: bool,
    pub tappable: bool,
    /// Correlation tag: the overlay id that produced this object
    pub tag: String,
}

/// A URL-backed tile layer as handed to the surface.
#[derive(Clone)]
pub struct NativeTileLayer {
    pub url_fn: TileUrlFn,
    /// Tile edge in pixels, at least 1
    pub tile_size: u32,
    pub opacity: f64,
    pub z_index: i32,
    pub user_agent: String,
    /// Whether the layer is currently shown on the map
    pub attached: bool,
    /// Correlation tag: the overlay id that produced this object
    pub tag: String,
}

impl fmt::Debug for NativeTileLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeTileLayer")
            .field("tile_size", &self.tile_size)
            .field("opacity", &self.opacity)
            .field("z_index", &self.z_index)
            .field("user_agent", &self.user_agent)
            .field("attached", &self.attached)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

/// Names of patchable properties, used for event logs and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Path,
    Geodesic,
    StrokeWidth,
    StrokeColor,
    FillColor,
    Opacity,
    Attached,
    UserAgent,
}

/// One property patch for a native polygon.
#[derive(Debug, Clone, PartialEq)]
pub enum PolygonChange {
    Path(ResolvedPath),
    Geodesic(bool),
    StrokeWidth(f64),
    StrokeColor(Color),
    FillColor(Color),
}

impl PolygonChange {
    pub fn property(&self) -> Property {
        match self {
            PolygonChange::Path(_) => Property::Path,
            PolygonChange::Geodesic(_) => Property::Geodesic,
            PolygonChange::StrokeWidth(_) => Property::StrokeWidth,
            PolygonChange::StrokeColor(_) => Property::StrokeColor,
            PolygonChange::FillColor(_) => Property::FillColor,
        }
    }
}

/// One property patch for a native polyline.
#[derive(Debug, Clone, PartialEq)]
pub enum PolylineChange {
    Path(ResolvedPath),
    Geodesic(bool),
    StrokeWidth(f64),
    StrokeColor(Color),
}

impl PolylineChange {
    pub fn property(&self) -> Property {
        match self {
            PolylineChange::Path(_) => Property::Path,
            PolylineChange::Geodesic(_) => Property::Geodesic,
            PolylineChange::StrokeWidth(_) => Property::StrokeWidth,
            PolylineChange::StrokeColor(_) => Property::StrokeColor,
        }
    }
}

/// One property patch for a native tile layer.
#[derive(Debug, Clone, PartialEq)]
pub enum TileLayerChange {
    Opacity(f64),
    Attached(bool),
    UserAgent(String),
}

impl TileLayerChange {
    pub fn property(&self) -> Property {
        match self {
            TileLayerChange::Opacity(_) => Property::Opacity,
            TileLayerChange::Attached(_) => Property::Attached,
            TileLayerChange::UserAgent(_) => Property::UserAgent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_argb() {
        let c = Color::from_argb(0x80FF8000);
        assert_eq!(c, Color::rgba(255, 128, 0, 128));
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::RED.to_string(), "#FF0000FF");
        assert_eq!(Color::TRANSPARENT.to_string(), "#00000000");
    }

    #[test]
    fn test_change_property_names() {
        assert_eq!(
            PolygonChange::FillColor(Color::BLUE).property(),
            Property::FillColor
        );
        assert_eq!(
            PolylineChange::StrokeWidth(2.0).property(),
            Property::StrokeWidth
        );
        assert_eq!(
            TileLayerChange::Attached(true).property(),
            Property::Attached
        );
    }

    #[test]
    fn test_tile_layer_debug_skips_url_fn() {
        let layer = NativeTileLayer {
            url_fn: Arc::new(|_: crate::geo::TileCoord| -> Option<Url> { None }),
            tile_size: 256,
            opacity: 1.0,
            z_index: 0,
            user_agent: "ua".to_string(),
            attached: true,
            tag: "base".to_string(),
        };
        let debug = format!("{:?}", layer);
        assert!(debug.contains("tile_size: 256"));
        assert!(!debug.contains("url_fn"));
    }
}
