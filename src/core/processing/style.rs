//! Grayscale styling: desaturate the map and apply a slight mean-anchored
//! contrast boost.
use image::{GrayImage, Luma, Rgb, RgbImage, imageops};

/// Contrast factor applied after desaturation.
const CONTRAST_BOOST: f32 = 1.1;

/// Desaturate, boost contrast, and expand back to RGB so the marker overlay
/// can be drawn in color.
pub fn apply_grayscale_style(img: &RgbImage) -> RgbImage {
    let gray = imageops::grayscale(img);
    let stretched = stretch_contrast(&gray, CONTRAST_BOOST);
    gray_to_rgb(&stretched)
}

/// Linear contrast stretch anchored at the image mean:
/// `out = mean + (v - mean) * factor`, rounded and clamped.
/// A uniform image is a fixed point.
pub fn stretch_contrast(gray: &GrayImage, factor: f32) -> GrayImage {
    let count = gray.width() as u64 * gray.height() as u64;
    if count == 0 {
        return gray.clone();
    }

    let sum: u64 = gray.pixels().map(|p| p.0[0] as u64).sum();
    let mean = sum as f32 / count as f32;

    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let v = gray.get_pixel(x, y).0[0] as f32;
        let adjusted = (mean + (v - mean) * factor).round().clamp(0.0, 255.0);
        Luma([adjusted as u8])
    })
}

/// Replicate luma into three channels.
pub fn gray_to_rgb(gray: &GrayImage) -> RgbImage {
    RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        let v = gray.get_pixel(x, y).0[0];
        Rgb([v, v, v])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_image_is_unchanged_by_contrast() {
        let gray = GrayImage::from_pixel(10, 10, Luma([137]));
        let out = stretch_contrast(&gray, CONTRAST_BOOST);
        assert!(out.pixels().all(|p| p.0[0] == 137));
    }

    #[test]
    fn contrast_pushes_values_away_from_the_mean() {
        let mut gray = GrayImage::new(2, 1);
        gray.put_pixel(0, 0, Luma([100]));
        gray.put_pixel(1, 0, Luma([155]));

        // mean 127.5: dark gets darker, light gets lighter
        let out = stretch_contrast(&gray, 1.1);
        assert_eq!(out.get_pixel(0, 0).0[0], 97);
        assert_eq!(out.get_pixel(1, 0).0[0], 158);
    }

    #[test]
    fn contrast_clamps_at_the_value_range() {
        let mut gray = GrayImage::new(2, 1);
        gray.put_pixel(0, 0, Luma([0]));
        gray.put_pixel(1, 0, Luma([255]));

        let out = stretch_contrast(&gray, 3.0);
        assert_eq!(out.get_pixel(0, 0).0[0], 0);
        assert_eq!(out.get_pixel(1, 0).0[0], 255);
    }

    #[test]
    fn styled_output_has_equal_channels() {
        let img = RgbImage::from_fn(16, 16, |x, y| Rgb([x as u8 * 10, y as u8 * 10, 30]));
        let styled = apply_grayscale_style(&img);
        assert_eq!(styled.dimensions(), (16, 16));
        for p in styled.pixels() {
            assert_eq!(p.0[0], p.0[1]);
            assert_eq!(p.0[1], p.0[2]);
        }
    }
}
