//! Location marker overlays drawn at the image center, where the viewport
//! crop placed the office coordinate.
use image::{Rgb, RgbImage};

use crate::types::MarkerStyle;

const MARKER_RED: Rgb<u8> = Rgb([191, 6, 3]);
const MARKER_RIM: Rgb<u8> = Rgb([139, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

const DOT_RADIUS: i64 = 12;
const DOT_RING_WIDTH: i64 = 3;
const DOT_CENTER_RADIUS: i64 = 4;
const DOT_SHADOW_OFFSET: i64 = 3;
const DOT_SHADOW_ALPHA: f32 = 80.0 / 255.0;

const PIN_HEAD_RADIUS: i64 = 14;
const PIN_HEAD_LIFT: i64 = 28;
const PIN_INNER_RADIUS: i64 = 5;
const PIN_SHADOW_ALPHA: f32 = 0.3;

/// Draw the requested marker style centered on the image.
pub fn draw_marker(img: &mut RgbImage, style: MarkerStyle) {
    let cx = (img.width() / 2) as i64;
    let cy = (img.height() / 2) as i64;
    match style {
        MarkerStyle::Dot => draw_dot_marker(img, cx, cy),
        MarkerStyle::Pin => draw_pin_marker(img, cx, cy),
    }
}

/// Concentric circle marker: drop shadow, white ring, red disc, white dot.
fn draw_dot_marker(img: &mut RgbImage, cx: i64, cy: i64) {
    blend_circle(
        img,
        cx + DOT_SHADOW_OFFSET,
        cy + DOT_SHADOW_OFFSET,
        DOT_RADIUS,
        BLACK,
        DOT_SHADOW_ALPHA,
    );
    fill_circle(img, cx, cy, DOT_RADIUS + DOT_RING_WIDTH, WHITE);
    fill_circle(img, cx, cy, DOT_RADIUS, MARKER_RED);
    fill_circle(img, cx, cy, DOT_CENTER_RADIUS, WHITE);
}

/// Teardrop pin with its tip anchored at the target pixel.
fn draw_pin_marker(img: &mut RgbImage, cx: i64, cy: i64) {
    let head_y = cy - PIN_HEAD_LIFT;

    blend_ellipse(img, cx, cy + 3, 10, 4, BLACK, PIN_SHADOW_ALPHA);
    fill_triangle(
        img,
        (cx - 10, cy - 22),
        (cx + 10, cy - 22),
        (cx, cy),
        MARKER_RED,
    );
    fill_circle(img, cx, head_y, PIN_HEAD_RADIUS, MARKER_RIM);
    fill_circle(img, cx, head_y, PIN_HEAD_RADIUS - 2, MARKER_RED);
    fill_circle(img, cx, head_y, PIN_INNER_RADIUS, WHITE);
}

fn put_pixel_checked(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn blend_pixel_checked(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, alpha: f32) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        let base = img.get_pixel(x as u32, y as u32);
        let mut blended = [0u8; 3];
        for c in 0..3 {
            let v = base.0[c] as f32 * (1.0 - alpha) + color.0[c] as f32 * alpha;
            blended[c] = v.round().clamp(0.0, 255.0) as u8;
        }
        img.put_pixel(x as u32, y as u32, Rgb(blended));
    }
}

fn fill_circle(img: &mut RgbImage, cx: i64, cy: i64, r: i64, color: Rgb<u8>) {
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put_pixel_checked(img, cx + dx, cy + dy, color);
            }
        }
    }
}

fn blend_circle(img: &mut RgbImage, cx: i64, cy: i64, r: i64, color: Rgb<u8>, alpha: f32) {
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                blend_pixel_checked(img, cx + dx, cy + dy, color, alpha);
            }
        }
    }
}

fn blend_ellipse(
    img: &mut RgbImage,
    cx: i64,
    cy: i64,
    rx: i64,
    ry: i64,
    color: Rgb<u8>,
    alpha: f32,
) {
    for dy in -ry..=ry {
        for dx in -rx..=rx {
            let nx = dx as f64 / rx as f64;
            let ny = dy as f64 / ry as f64;
            if nx * nx + ny * ny <= 1.0 {
                blend_pixel_checked(img, cx + dx, cy + dy, color, alpha);
            }
        }
    }
}

/// Filled triangle via an inclusive half-plane test over the bounding box.
fn fill_triangle(
    img: &mut RgbImage,
    a: (i64, i64),
    b: (i64, i64),
    c: (i64, i64),
    color: Rgb<u8>,
) {
    let min_x = a.0.min(b.0).min(c.0);
    let max_x = a.0.max(b.0).max(c.0);
    let min_y = a.1.min(b.1).min(c.1);
    let max_y = a.1.max(b.1).max(c.1);

    let edge = |p: (i64, i64), q: (i64, i64), r: (i64, i64)| -> i64 {
        (q.0 - p.0) * (r.1 - p.1) - (q.1 - p.1) * (r.0 - p.0)
    };

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = (x, y);
            let e0 = edge(a, b, p);
            let e1 = edge(b, c, p);
            let e2 = edge(c, a, p);
            let inside = (e0 >= 0 && e1 >= 0 && e2 >= 0) || (e0 <= 0 && e1 <= 0 && e2 <= 0);
            if inside {
                put_pixel_checked(img, x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKDROP: Rgb<u8> = Rgb([10, 20, 200]);

    fn backdrop(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, BACKDROP)
    }

    #[test]
    fn dot_marker_layers_from_the_center_out() {
        let mut img = backdrop(100, 80);
        draw_marker(&mut img, MarkerStyle::Dot);

        // center dot, red disc, white ring, untouched backdrop
        assert_eq!(img.get_pixel(50, 40), &WHITE);
        assert_eq!(img.get_pixel(58, 40), &MARKER_RED);
        assert_eq!(img.get_pixel(64, 40), &WHITE);
        assert_eq!(img.get_pixel(70, 40), &BACKDROP);
    }

    #[test]
    fn dot_shadow_darkens_the_backdrop() {
        let mut img = backdrop(100, 80);
        draw_marker(&mut img, MarkerStyle::Dot);

        // below-right of the ring, inside the offset shadow only
        let p = img.get_pixel(63, 48);
        assert!(p.0[2] < BACKDROP.0[2]);
        assert_ne!(p, &BLACK);
    }

    #[test]
    fn pin_marker_anchors_its_tip_at_the_center() {
        let mut img = backdrop(100, 80);
        draw_marker(&mut img, MarkerStyle::Pin);

        // tip, head rim, head fill, inner circle
        assert_eq!(img.get_pixel(50, 40), &MARKER_RED);
        assert_eq!(img.get_pixel(63, 12), &MARKER_RIM);
        assert_eq!(img.get_pixel(59, 12), &MARKER_RED);
        assert_eq!(img.get_pixel(50, 12), &WHITE);
        // far corner untouched
        assert_eq!(img.get_pixel(5, 5), &BACKDROP);
    }

    #[test]
    fn markers_clip_at_tiny_viewports() {
        let mut img = backdrop(8, 8);
        draw_marker(&mut img, MarkerStyle::Dot);
        let mut img = backdrop(8, 8);
        draw_marker(&mut img, MarkerStyle::Pin);
        // no panic is the assertion; the marker simply clips
    }
}
