//! Geographic type definitions

use std::fmt;

/// Mean equatorial radius of the WGS84 ellipsoid, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// A geographic position in degrees.
///
/// Points are plain values; once a point is part of a committed overlay
/// state it is never mutated, only replaced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the point as a unit vector on the sphere (x toward 0°E, z north).
    #[inline]
    pub fn to_unit_vector(self) -> [f64; 3] {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        let cos_lat = lat.cos();
        [cos_lat * lon.cos(), cos_lat * lon.sin(), lat.sin()]
    }

    /// Builds a point from a (not necessarily normalized) direction vector.
    #[inline]
    pub fn from_vector(v: [f64; 3]) -> Self {
        let horizontal = (v[0] * v[0] + v[1] * v[1]).sqrt();
        Self {
            latitude: v[2].atan2(horizontal).to_degrees(),
            longitude: v[1].atan2(v[0]).to_degrees(),
        }
    }
}

/// The part of the map camera that geometry resolution depends on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPosition {
    /// Point the camera looks at
    pub target: GeoPoint,
    /// Fractional zoom level (0 = whole world in one 256 px tile)
    pub zoom: f64,
}

impl CameraPosition {
    /// Creates a camera looking at `target` at `zoom`.
    #[inline]
    pub const fn new(target: GeoPoint, zoom: f64) -> Self {
        Self { target, zoom }
    }
}

/// Web Mercator tile address in the XYZ scheme (row 0 at the north edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// Column, 0 at the antimeridian going east
    pub x: u32,
    /// Row, 0 at the north edge
    pub y: u32,
    /// Zoom level
    pub zoom: u8,
}

impl TileCoord {
    /// Creates a tile coordinate.
    #[inline]
    pub const fn new(x: u32, y: u32, zoom: u8) -> Self {
        Self { x, y, zoom }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
