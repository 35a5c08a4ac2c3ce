//! INI serialization logic for converting `ConfigFile` → INI string.

use super::file::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let interpolation = &config.interpolation;
    let log_directory = config
        .logging
        .directory()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    format!(
        r#"[interpolation]
; On-screen length of one geodesic segment, in pixels
target_segment_pixels = {}
; Clamp range for the ground length of one segment, in meters
min_segment_meters = {}
max_segment_meters = {}
; Resolved paths cached per overlay kind
cache_capacity = {}
; Interpolated paths above this many points fall back to the raw points
max_points = {}

[raster]
; User agent for tile requests when a layer does not set one
user_agent = {}
; Z-index of new tile layers
z_index = {}

[logging]
; Directory for the log file (empty = stdout only)
directory = {}
file = {}
"#,
        interpolation.target_segment_pixels(),
        interpolation.min_segment_meters(),
        interpolation.max_segment_meters(),
        interpolation.cache_capacity(),
        interpolation.max_points(),
        config.raster.default_user_agent(),
        config.raster.z_index(),
        log_directory,
        config.logging.file_name(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_string_has_all_sections() {
        let content = to_config_string(&ConfigFile::default());
        assert!(content.contains("[interpolation]"));
        assert!(content.contains("[raster]"));
        assert!(content.contains("[logging]"));
        assert!(content.contains("cache_capacity = 64"));
        assert!(content.contains("max_points = 10000"));
    }
}
