//! Raster layer state and fingerprint

use std::collections::BTreeMap;

use super::source::RasterSource;
use crate::overlay::{ChangeSet, Fingerprint, OverlayState};

/// Declared tiled raster layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterLayerState {
    pub id: String,
    pub source: RasterSource,
    /// 0.0 (transparent) to 1.0 (opaque)
    pub opacity: f64,
    pub visible: bool,
    /// Blank or absent falls back to the configured default.
    pub user_agent: Option<String>,
    /// Extra HTTP headers for tile requests.
    pub extra_headers: Option<BTreeMap<String, String>>,
}

impl RasterLayerState {
    /// A visible, fully opaque layer.
    pub fn new(id: impl Into<String>, source: impl Into<RasterSource>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            opacity: 1.0,
            visible: true,
            user_agent: None,
            extra_headers: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<RasterSource>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Whether any extra header is set.
    pub fn has_extra_headers(&self) -> bool {
        self.extra_headers
            .as_ref()
            .map_or(false, |headers| !headers.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterLayerField {
    Source,
    Opacity,
    Visible,
    UserAgent,
    ExtraHeaders,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RasterLayerFingerprint {
    pub source: RasterSource,
    pub opacity: f64,
    pub visible: bool,
    pub user_agent: Option<String>,
    pub extra_headers: Option<BTreeMap<String, String>>,
}

impl Fingerprint for RasterLayerFingerprint {
    type Field = RasterLayerField;

    fn diff(&self, previous: &Self) -> ChangeSet<RasterLayerField> {
        let mut changes = ChangeSet::new();
        changes
            .mark(RasterLayerField::Source, self.source != previous.source)
            .mark(RasterLayerField::Opacity, self.opacity != previous.opacity)
            .mark(RasterLayerField::Visible, self.visible != previous.visible)
            .mark(RasterLayerField::UserAgent, self.user_agent != previous.user_agent)
            .mark(
                RasterLayerField::ExtraHeaders,
                self.extra_headers != previous.extra_headers,
            );
        changes
    }
}

impl OverlayState for RasterLayerState {
    type Fingerprint = RasterLayerFingerprint;

    fn id(&self) -> &str {
        &self.id
    }

    fn fingerprint(&self) -> RasterLayerFingerprint {
        RasterLayerFingerprint {
            source: self.source.clone(),
            opacity: self.opacity,
            visible: self.visible,
            user_agent: self.user_agent.clone(),
            extra_headers: self.extra_headers.clone(),
        }
    }
}
