//! Raster tile sources

use std::borrow::Cow;

/// Tile size used when a source does not name one.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Row numbering of a tile pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileScheme {
    /// Row 0 at the north edge (slippy map convention)
    #[default]
    Xyz,
    /// Row 0 at the south edge
    Tms,
}

impl TileScheme {
    /// Convert an XYZ row into this scheme's row.
    ///
    /// TMS rows are `2^zoom - 1 - row`; a row outside `[0, 2^zoom)` has no
    /// TMS counterpart and yields `None`. The conversion is its own inverse.
    pub fn convert_row(self, row: u32, zoom: u8) -> Option<u32> {
        match self {
            TileScheme::Xyz => Some(row),
            TileScheme::Tms => {
                let rows = 1u64.checked_shl(u32::from(zoom))?;
                let row = u64::from(row);
                if row >= rows {
                    return None;
                }
                u32::try_from(rows - 1 - row).ok()
            }
        }
    }
}

/// A templated tile endpoint such as `https://tiles.example.com/{z}/{x}/{y}.png`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlTemplate {
    pub template: String,
    pub tile_size: u32,
    pub min_zoom: Option<u8>,
    pub max_zoom: Option<u8>,
    pub attribution: Option<String>,
    pub scheme: TileScheme,
}

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            tile_size: DEFAULT_TILE_SIZE,
            min_zoom: None,
            max_zoom: None,
            attribution: None,
            scheme: TileScheme::Xyz,
        }
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn with_min_zoom(mut self, zoom: u8) -> Self {
        self.min_zoom = Some(zoom);
        self
    }

    pub fn with_max_zoom(mut self, zoom: u8) -> Self {
        self.max_zoom = Some(zoom);
        self
    }

    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }

    pub fn with_scheme(mut self, scheme: TileScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Template for an ArcGIS MapServer/ImageServer tile endpoint.
    ///
    /// Surrounding whitespace and slashes are stripped from the service URL
    /// before `/tile/{z}/{y}/{x}` is appended.
    pub fn arcgis(service_url: &str) -> Self {
        let base = service_url.trim().trim_matches('/');
        Self::new(format!("{}/tile/{{z}}/{{y}}/{{x}}", base))
    }
}

/// Where a raster layer's tiles come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RasterSource {
    UrlTemplate(UrlTemplate),
    /// A TileJSON document URL.
    TileJson(String),
    /// An ArcGIS tile service base URL.
    ArcGisService(String),
}

impl RasterSource {
    /// The URL template this source renders with.
    ///
    /// ArcGIS services are normalized into an XYZ template with the default
    /// tile size. TileJSON has no template and returns `None`.
    pub fn resolve_template(&self) -> Option<Cow<'_, UrlTemplate>> {
        match self {
            RasterSource::UrlTemplate(template) => Some(Cow::Borrowed(template)),
            RasterSource::ArcGisService(url) => Some(Cow::Owned(UrlTemplate::arcgis(url))),
            RasterSource::TileJson(_) => None,
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RasterSource::UrlTemplate(_) => "url template",
            RasterSource::TileJson(_) => "tilejson",
            RasterSource::ArcGisService(_) => "arcgis service",
        }
    }
}

impl From<UrlTemplate> for RasterSource {
    fn from(template: UrlTemplate) -> Self {
        RasterSource::UrlTemplate(template)
    }
}
