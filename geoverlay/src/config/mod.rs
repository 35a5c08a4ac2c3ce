//! Configuration types for geoverlay components.
//!
//! Each concern gets its own small config struct:
//!
//! - [`InterpolationConfig`]: adaptive segment policy, path cache and point ceiling
//! - [`RasterConfig`]: tile layer defaults (user agent, z-index)
//! - [`LoggingConfig`]: log file placement
//!
//! [`ConfigFile`] groups them and reads/writes `~/.geoverlay/config.ini`.
//!
//! # Example
//!
//! ```
//! use geoverlay::config::{InterpolationConfig, RasterConfig};
//!
//! let interpolation = InterpolationConfig::default()
//!     .with_cache_capacity(128)
//!     .with_max_points(5_000);
//! assert_eq!(interpolation.cache_capacity(), 128);
//!
//! let raster = RasterConfig::default().with_z_index(2);
//! assert_eq!(raster.z_index(), 2);
//! ```

mod defaults;
mod file;
mod interpolation;
mod logging;
mod parser;
mod raster;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFile, ConfigFileError};
pub use interpolation::InterpolationConfig;
pub use logging::LoggingConfig;
pub use raster::RasterConfig;
