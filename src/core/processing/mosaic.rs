//! Canvas assembly: paste tiles around a center coordinate, substitute a
//! placeholder for tiles that fail to arrive, and crop to the viewport so the
//! target coordinate lands at the image center.
use image::{Rgb, RgbImage, imageops};
use tracing::warn;

use crate::core::geo::{TILE_SIZE, TileCoord};
use crate::io::tiles::TileSource;

/// Fill color for tiles that could not be fetched.
pub const PLACEHOLDER_GRAY: Rgb<u8> = Rgb([200, 200, 200]);

/// Number of tiles needed to cover `extent` pixels, with one tile of slack
/// for the fractional center.
pub fn tile_span(extent: u32) -> u32 {
    extent.div_ceil(TILE_SIZE) + 1
}

/// Assemble a tile mosaic around the fractional center tile coordinate.
///
/// Tiles that fail to fetch are logged and replaced with a gray placeholder;
/// the mosaic itself always succeeds.
pub fn compose_mosaic(
    source: &dyn TileSource,
    center_x: f64,
    center_y: f64,
    zoom: u8,
    width: u32,
    height: u32,
) -> RgbImage {
    let tiles_x = tile_span(width);
    let tiles_y = tile_span(height);
    let mut canvas = RgbImage::new(tiles_x * TILE_SIZE, tiles_y * TILE_SIZE);

    let start_x = center_x.floor() as i64 - (tiles_x / 2) as i64;
    let start_y = center_y.floor() as i64 - (tiles_y / 2) as i64;

    for tx in 0..tiles_x {
        for ty in 0..tiles_y {
            let tile = TileCoord {
                x: start_x + tx as i64,
                y: start_y + ty as i64,
                z: zoom,
            };
            let px = tx * TILE_SIZE;
            let py = ty * TILE_SIZE;

            match source.fetch(tile) {
                Ok(img) => imageops::replace(&mut canvas, &img, px as i64, py as i64),
                Err(e) => {
                    warn!("Could not fetch tile {}: {}", tile, e);
                    paste_placeholder(&mut canvas, px, py);
                }
            }
        }
    }

    canvas
}

fn paste_placeholder(canvas: &mut RgbImage, x0: u32, y0: u32) {
    for y in y0..y0 + TILE_SIZE {
        for x in x0..x0 + TILE_SIZE {
            canvas.put_pixel(x, y, PLACEHOLDER_GRAY);
        }
    }
}

/// Top-left corner of the viewport crop, clamped into the canvas.
///
/// The offset shift is truncated toward zero, matching the original pixel
/// placement of the asset pipeline this replaces.
pub fn crop_origin(
    canvas_w: u32,
    canvas_h: u32,
    width: u32,
    height: u32,
    offset_x: f64,
    offset_y: f64,
) -> (u32, u32) {
    let half_tile = (TILE_SIZE / 2) as f64;
    let left = ((canvas_w - width) / 2) as i64 + (offset_x - half_tile) as i64;
    let top = ((canvas_h - height) / 2) as i64 + (offset_y - half_tile) as i64;

    let left = left.clamp(0, (canvas_w - width) as i64) as u32;
    let top = top.clamp(0, (canvas_h - height) as i64) as u32;
    (left, top)
}

/// Crop the mosaic to the viewport, centering the target coordinate.
pub fn crop_to_viewport(
    canvas: &RgbImage,
    width: u32,
    height: u32,
    offset_x: f64,
    offset_y: f64,
) -> RgbImage {
    let (left, top) = crop_origin(
        canvas.width(),
        canvas.height(),
        width,
        height,
        offset_x,
        offset_y,
    );
    imageops::crop_imm(canvas, left, top, width, height).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::tiles::TileError;

    /// Each tile is a solid color derived from its coordinates.
    struct SolidSource;

    impl TileSource for SolidSource {
        fn fetch(&self, tile: TileCoord) -> Result<RgbImage, TileError> {
            let color = Rgb([tile.x as u8, tile.y as u8, tile.z]);
            Ok(RgbImage::from_pixel(TILE_SIZE, TILE_SIZE, color))
        }
    }

    /// A source with no tiles at all.
    struct EmptySource;

    impl TileSource for EmptySource {
        fn fetch(&self, _tile: TileCoord) -> Result<RgbImage, TileError> {
            Err(TileError::Decode(image::ImageError::IoError(
                std::io::Error::other("no tile"),
            )))
        }
    }

    #[test]
    fn tile_span_covers_viewport_with_slack() {
        assert_eq!(tile_span(800), 5);
        assert_eq!(tile_span(600), 4);
        assert_eq!(tile_span(256), 2);
        assert_eq!(tile_span(257), 3);
    }

    #[test]
    fn mosaic_places_tiles_row_major_around_the_center() {
        let canvas = compose_mosaic(&SolidSource, 8.5, 8.5, 4, 300, 200);
        // 3x2 tiles starting at tile (7, 7)
        assert_eq!(canvas.dimensions(), (768, 512));
        assert_eq!(canvas.get_pixel(0, 0), &Rgb([7, 7, 4]));
        assert_eq!(canvas.get_pixel(300, 0), &Rgb([8, 7, 4]));
        assert_eq!(canvas.get_pixel(600, 300), &Rgb([9, 8, 4]));
    }

    #[test]
    fn failed_tiles_become_gray_placeholders() {
        let canvas = compose_mosaic(&EmptySource, 8.5, 8.5, 4, 300, 200);
        assert_eq!(canvas.get_pixel(0, 0), &PLACEHOLDER_GRAY);
        assert_eq!(canvas.get_pixel(767, 511), &PLACEHOLDER_GRAY);
    }

    #[test]
    fn crop_origin_centers_the_target() {
        // Canvas for an 800x600 viewport: 1280x1024. Offset at tile center
        // leaves the crop at the symmetric position.
        assert_eq!(crop_origin(1280, 1024, 800, 600, 128.0, 128.0), (240, 212));
        // Offsets at the tile edges shift the crop by up to half a tile.
        assert_eq!(crop_origin(1280, 1024, 800, 600, 0.0, 0.0), (112, 84));
        assert_eq!(
            crop_origin(1280, 1024, 800, 600, 255.9, 255.9),
            (367, 339)
        );
    }

    #[test]
    fn crop_origin_is_clamped_to_the_canvas() {
        assert_eq!(crop_origin(900, 700, 800, 600, 255.9, 255.9), (100, 100));
        assert_eq!(crop_origin(900, 700, 800, 600, 0.0, 0.0), (0, 0));
    }

    #[test]
    fn crop_extracts_the_expected_window() {
        let canvas = RgbImage::from_fn(1280, 1024, |x, y| Rgb([(x % 251) as u8, (y % 251) as u8, 0]));
        let cropped = crop_to_viewport(&canvas, 800, 600, 128.0, 128.0);
        assert_eq!(cropped.dimensions(), (800, 600));
        assert_eq!(cropped.get_pixel(0, 0), canvas.get_pixel(240, 212));
        assert_eq!(cropped.get_pixel(799, 599), canvas.get_pixel(1039, 811));
    }
}
