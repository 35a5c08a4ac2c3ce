//! Tile URL construction.
//!
//! # URL Pattern
//!
//! Templates carry `{z}`, `{x}` and `{y}` placeholders, substituted
//! textually:
//!
//! `https://tiles.example.com/{z}/{x}/{y}.png`
//!
//! - Requests outside the template's zoom range get no tile
//! - TMS templates have their row flipped before substitution
//! - A result that does not parse as an absolute URL gets no tile

use std::sync::Arc;

use url::Url;

use super::source::UrlTemplate;
use crate::geo::TileCoord;
use crate::surface::TileUrlFn;

impl UrlTemplate {
    /// Whether tiles exist at `zoom`.
    pub fn supports_zoom(&self, zoom: u8) -> bool {
        self.min_zoom.map_or(true, |min| zoom >= min) && self.max_zoom.map_or(true, |max| zoom <= max)
    }

    /// Expand the template for `tile` without validating the result.
    pub fn expand(&self, tile: TileCoord) -> Option<String> {
        if !self.supports_zoom(tile.zoom) {
            return None;
        }
        let row = self.scheme.convert_row(tile.y, tile.zoom)?;
        Some(
            self.template
                .replace("{z}", &tile.zoom.to_string())
                .replace("{x}", &tile.x.to_string())
                .replace("{y}", &row.to_string()),
        )
    }

    /// URL of `tile`, or `None` when there is no such tile.
    pub fn url_for(&self, tile: TileCoord) -> Option<Url> {
        self.expand(tile).and_then(|url| Url::parse(&url).ok())
    }

    /// The URL function handed to the surface.
    pub fn to_url_fn(&self) -> TileUrlFn {
        let template = self.clone();
        Arc::new(move |tile| template.url_for(tile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::TileScheme;

    #[test]
    fn test_xyz_substitution() {
        let template = UrlTemplate::new("https://tiles.example.com/{z}/{x}/{y}.png");
        let url = template.url_for(TileCoord::new(4, 2, 3)).expect("valid url");
        assert_eq!(url.as_str(), "https://tiles.example.com/3/4/2.png");
    }

    #[test]
    fn test_tms_substitution() {
        let template =
            UrlTemplate::new("https://tiles.example.com/{z}/{x}/{y}.png").with_scheme(TileScheme::Tms);
        let url = template.url_for(TileCoord::new(1, 2, 3)).expect("valid url");
        assert_eq!(url.as_str(), "https://tiles.example.com/3/1/5.png");
    }

    #[test]
    fn test_zoom_bounds() {
        let template = UrlTemplate::new("https://t/{z}/{x}/{y}")
            .with_min_zoom(2)
            .with_max_zoom(5);
        assert!(template.url_for(TileCoord::new(0, 0, 1)).is_none());
        assert!(template.url_for(TileCoord::new(0, 0, 2)).is_some());
        assert!(template.url_for(TileCoord::new(0, 0, 5)).is_some());
        assert!(template.url_for(TileCoord::new(0, 0, 6)).is_none());
    }

    #[test]
    fn test_repeated_placeholders() {
        let template = UrlTemplate::new("https://t/{z}/{x}/{y}?zoom={z}");
        assert_eq!(
            template.expand(TileCoord::new(7, 8, 9)).as_deref(),
            Some("https://t/9/7/8?zoom=9")
        );
    }

    #[test]
    fn test_malformed_template_yields_no_tile() {
        let template = UrlTemplate::new("tiles/{z}/{x}/{y}.png");
        assert!(template.expand(TileCoord::new(0, 0, 0)).is_some());
        assert!(template.url_for(TileCoord::new(0, 0, 0)).is_none());
    }

    #[test]
    fn test_arcgis_row_before_column() {
        let template = UrlTemplate::arcgis("https://host/MapServer/");
        let url = template.url_for(TileCoord::new(10, 20, 6)).expect("valid url");
        assert_eq!(url.as_str(), "https://host/MapServer/tile/6/20/10");
    }

    #[test]
    fn test_url_fn_matches_url_for() {
        let template = UrlTemplate::new("https://t/{z}/{x}/{y}.png");
        let url_fn = template.to_url_fn();
        let tile = TileCoord::new(3, 4, 5);
        assert_eq!(url_fn(tile), template.url_for(tile));
    }
}
