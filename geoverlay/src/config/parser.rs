//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;
use std::str::FromStr;

use super::file::{ConfigFile, ConfigFileError};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [interpolation] section
    if let Some(section) = ini.section(Some("interpolation")) {
        let mut interpolation = config.interpolation;

        if let Some(v) = section.get("target_segment_pixels") {
            let pixels: f64 = parse_positive(
                "interpolation",
                "target_segment_pixels",
                v,
                "expected a positive number of pixels",
            )?;
            interpolation = interpolation.with_target_segment_pixels(pixels);
        }

        let min = match section.get("min_segment_meters") {
            Some(v) => parse_positive(
                "interpolation",
                "min_segment_meters",
                v,
                "expected a positive length in meters",
            )?,
            None => interpolation.min_segment_meters(),
        };
        let max = match section.get("max_segment_meters") {
            Some(v) => parse_positive(
                "interpolation",
                "max_segment_meters",
                v,
                "expected a positive length in meters",
            )?,
            None => interpolation.max_segment_meters(),
        };
        interpolation = interpolation.with_segment_bounds(min, max);

        if let Some(v) = section.get("cache_capacity") {
            let capacity: usize = parse_value(
                "interpolation",
                "cache_capacity",
                v,
                "expected a whole number of entries",
            )?;
            interpolation = interpolation.with_cache_capacity(capacity);
        }

        if let Some(v) = section.get("max_points") {
            let max_points: usize = parse_value(
                "interpolation",
                "max_points",
                v,
                "expected a whole number of points",
            )?;
            interpolation = interpolation.with_max_points(max_points);
        }

        config.interpolation = interpolation;
    }

    // [raster] section
    if let Some(section) = ini.section(Some("raster")) {
        if let Some(v) = section.get("user_agent") {
            let v = v.trim();
            if !v.is_empty() {
                config.raster = config.raster.with_default_user_agent(v);
            }
        }
        if let Some(v) = section.get("z_index") {
            let z_index: i32 = parse_value("raster", "z_index", v, "expected an integer")?;
            config.raster = config.raster.with_z_index(z_index);
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging = config.logging.with_directory(expand_tilde(v));
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging = config.logging.with_file_name(v);
            }
        }
    }

    Ok(config)
}

fn parse_value<T: FromStr>(
    section: &str,
    key: &str,
    value: &str,
    reason: &str,
) -> Result<T, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        })
}

fn parse_positive(
    section: &str,
    key: &str,
    value: &str,
    reason: &str,
) -> Result<f64, ConfigFileError> {
    let parsed: f64 = parse_value(section, key, value, reason)?;
    if parsed.is_finite() && parsed > 0.0 {
        Ok(parsed)
    } else {
        Err(ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        })
    }
}

/// Expand a leading `~/` to the user's home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
