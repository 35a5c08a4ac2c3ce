//! Raster layer configuration.

use super::defaults::{default_user_agent, DEFAULT_TILE_LAYER_Z_INDEX};

/// Defaults applied to tile layers built by the raster renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterConfig {
    /// User agent used when a layer state has none (or only whitespace)
    default_user_agent: String,
    /// Z-index assigned to every new tile layer
    z_index: i32,
}

impl RasterConfig {
    /// Create a new raster configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback user agent.
    pub fn with_default_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.default_user_agent = user_agent.into();
        self
    }

    /// Set the z-index for new tile layers.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Get the fallback user agent.
    pub fn default_user_agent(&self) -> &str {
        &self.default_user_agent
    }

    /// Get the tile layer z-index.
    pub fn z_index(&self) -> i32 {
        self.z_index
    }
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            default_user_agent: default_user_agent(),
            z_index: DEFAULT_TILE_LAYER_Z_INDEX,
        }
    }
}
