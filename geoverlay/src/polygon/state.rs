//! Polygon state and fingerprint

use std::sync::Arc;

use crate::geo::GeoPoint;
use crate::overlay::{ChangeSet, Fingerprint, OverlayState, PointsFingerprint};
use crate::surface::Color;

/// Declared polygon. The ring is implicitly closed by the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonState {
    pub id: String,
    pub points: Arc<[GeoPoint]>,
    pub geodesic: bool,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub fill_color: Color,
}

impl PolygonState {
    /// A polygon with a 1 px black outline and no fill.
    pub fn new(id: impl Into<String>, points: impl IntoIterator<Item = GeoPoint>) -> Self {
        Self {
            id: id.into(),
            points: points.into_iter().collect(),
            geodesic: false,
            stroke_color: Color::BLACK,
            stroke_width: 1.0,
            fill_color: Color::TRANSPARENT,
        }
    }

    pub fn with_points(mut self, points: impl IntoIterator<Item = GeoPoint>) -> Self {
        self.points = points.into_iter().collect();
        self
    }

    pub fn with_geodesic(mut self, geodesic: bool) -> Self {
        self.geodesic = geodesic;
        self
    }

    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonField {
    Points,
    Geodesic,
    StrokeWidth,
    StrokeColor,
    FillColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolygonFingerprint {
    pub points: PointsFingerprint,
    pub geodesic: bool,
    pub stroke_width: f64,
    pub stroke_color: Color,
    pub fill_color: Color,
}

impl Fingerprint for PolygonFingerprint {
    type Field = PolygonField;

    fn diff(&self, previous: &Self) -> ChangeSet<PolygonField> {
        let mut changes = ChangeSet::new();
        changes
            .mark(PolygonField::Points, self.points != previous.points)
            .mark(PolygonField::Geodesic, self.geodesic != previous.geodesic)
            .mark(PolygonField::StrokeWidth, self.stroke_width != previous.stroke_width)
            .mark(PolygonField::StrokeColor, self.stroke_color != previous.stroke_color)
            .mark(PolygonField::FillColor, self.fill_color != previous.fill_color);
        changes
    }
}

impl OverlayState for PolygonState {
    type Fingerprint = PolygonFingerprint;

    fn id(&self) -> &str {
        &self.id
    }

    fn fingerprint(&self) -> PolygonFingerprint {
        PolygonFingerprint {
            points: PointsFingerprint::new(&self.points),
            geodesic: self.geodesic,
            stroke_width: self.stroke_width,
            stroke_color: self.stroke_color,
            fill_color: self.fill_color,
        }
    }
}
