//! Slippy-map coordinate arithmetic: geographic coordinates to tile indices
//! and pixel offsets, plus the inverse mapping.
use std::f64::consts::PI;
use std::fmt;

/// Edge length of a map tile in pixels.
pub const TILE_SIZE: u32 = 256;

/// Latitude bound of the Web Mercator projection.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

/// Deepest zoom level served by the standard OSM tile layer.
pub const MAX_ZOOM: u8 = 19;

/// Integer tile index at a given zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub x: i64,
    pub y: i64,
    pub z: u8,
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

/// Fractional tile coordinates of a geographic point at `zoom`.
///
/// The integer parts are the tile indices; the fractional parts locate the
/// point within that tile.
pub fn lat_lng_to_tile(lat: f64, lng: f64, zoom: u8) -> (f64, f64) {
    let n = (1u64 << zoom) as f64;
    let lat_rad = lat.to_radians();
    let x = (lng + 180.0) / 360.0 * n;
    let y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n;
    (x, y)
}

/// Geographic coordinates of a fractional tile position. Inverse of
/// [`lat_lng_to_tile`] within the Mercator latitude range.
pub fn tile_to_lat_lng(x: f64, y: f64, zoom: u8) -> (f64, f64) {
    let n = (1u64 << zoom) as f64;
    let lng = x / n * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * y / n)).sinh().atan().to_degrees();
    (lat, lng)
}

/// Pixel offset of a fractional tile coordinate within its containing tile.
/// Each component is in `[0, TILE_SIZE)`.
pub fn pixel_offset(x: f64, y: f64) -> (f64, f64) {
    (
        (x - x.floor()) * TILE_SIZE as f64,
        (y - y.floor()) * TILE_SIZE as f64,
    )
}
