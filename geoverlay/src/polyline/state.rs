use std::sync::Arc;

use crate::geo::GeoPoint;
use crate::overlay::{ChangeSet, Fingerprint, OverlayState, PointsFingerprint};
use crate::surface::Color;

/// Declared polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineState {
    pub id: String,
    pub points: Arc<[GeoPoint]>,
    pub geodesic: bool,
    pub stroke_color: Color,
    pub stroke_width: f64,
}

impl PolylineState {
    /// A 1 px black line.
    pub fn new(id: impl Into<String>, points: impl IntoIterator<Item = GeoPoint>) -> Self {
        Self {
            id: id.into(),
            points: points.into_iter().collect(),
            geodesic: false,
            stroke_color: Color::BLACK,
            stroke_width: 1.0,
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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolylineField {
    Points,
    Geodesic,
    StrokeWidth,
    StrokeColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolylineFingerprint {
    pub points: PointsFingerprint,
    pub geodesic: bool,
    pub stroke_width: f64,
    pub stroke_color: Color,
}

impl Fingerprint for PolylineFingerprint {
    type Field = PolylineField;

    fn diff(&self, previous: &Self) -> ChangeSet<PolylineField> {
        let mut changes = ChangeSet::new();
        changes
            .mark(PolylineField::Points, self.points != previous.points)
            .mark(PolylineField::Geodesic, self.geodesic != previous.geodesic)
            .mark(PolylineField::StrokeWidth, self.stroke_width != previous.stroke_width)
            .mark(PolylineField::StrokeColor, self.stroke_color != previous.stroke_color);
        changes
    }
}

impl OverlayState for PolylineState {
    type Fingerprint = PolylineFingerprint;

    fn id(&self) -> &str {
        &self.id
    }

    fn fingerprint(&self) -> PolylineFingerprint {
        PolylineFingerprint {
            points: PointsFingerprint::new(&self.points),
            geodesic: self.geodesic,
            stroke_width: self.stroke_width,
            stroke_color: self.stroke_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_change_is_local() {
        let line = PolylineState::new("route", [GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]);
        let before = line.fingerprint();
        let after = line.with_stroke_width(2.5).fingerprint();
        let changes = after.diff(&before);
        assert_eq!(changes.iter().collect::<Vec<_>>(), vec![PolylineField::StrokeWidth]);
    }

    #[test]
    fn test_appended_point_changes_points() {
        let line = PolylineState::new("route", [GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]);
        let mut extended = line.points.to_vec();
        extended.push(GeoPoint::new(2.0, 2.0));
        let after = line.clone().with_points(extended);
        assert!(after
            .fingerprint()
            .diff(&line.fingerprint())
            .contains(PolylineField::Points));
    }
}
