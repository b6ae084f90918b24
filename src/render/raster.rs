//! Drawing primitives on an RGBA raster
//!
//! Everything here clips silently: samples that left the scene can map far
//! outside the image and are simply not painted.

use image::{Rgba, RgbaImage};

/// Map a normalized point to surface pixels: `(x * width, y * height)`.
pub fn to_pixel(x: f64, y: f64, width: u32, height: u32) -> (f64, f64) {
    (x * width as f64, y * height as f64)
}

fn put_pixel(image: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= image.width() as i64 || y >= image.height() as i64 {
        return;
    }
    image.put_pixel(x as u32, y as u32, color);
}

/// Whether a shape of half-extent `reach` around `(x, y)` can touch the image.
/// Keeps far-off coordinates away from the integer casts below.
fn within_reach(image: &RgbaImage, x: f64, y: f64, reach: f64) -> bool {
    x > -reach - 1.0
        && y > -reach - 1.0
        && x < image.width() as f64 + reach + 1.0
        && y < image.height() as f64 + reach + 1.0
}

/// Filled disc of `radius` pixels around `center` (truncated to whole pixels).
pub fn fill_circle(image: &mut RgbaImage, center: (f64, f64), radius: u32, color: Rgba<u8>) {
    if !within_reach(image, center.0, center.1, radius as f64) {
        return;
    }
    let cx = center.0.trunc() as i64;
    let cy = center.1.trunc() as i64;
    let r = radius as i64;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put_pixel(image, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Square brush of side `width` centered on `(x, y)`
fn stamp(image: &mut RgbaImage, x: f64, y: f64, width: u32, color: Rgba<u8>) {
    if !within_reach(image, x, y, width as f64) {
        return;
    }
    let half = (width.max(1) as i64 - 1) / 2;
    let x = x.round() as i64;
    let y = y.round() as i64;
    let extra = (width.max(1) as i64 - 1) % 2;
    for dy in -half..=half + extra {
        for dx in -half..=half + extra {
            put_pixel(image, x + dx, y + dy, color);
        }
    }
}

/// Open polyline through `points` with a square brush of `width` pixels.
pub fn draw_polyline(image: &mut RgbaImage, points: &[(f64, f64)], width: u32, color: Rgba<u8>) {
    if let [only] = points {
        stamp(image, only.0, only.1, width, color);
        return;
    }

    for segment in points.windows(2) {
        let (x0, y0) = segment[0];
        let (x1, y1) = segment[1];
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil();
        // far-off exited samples would otherwise make this loop enormous
        let steps = steps.min(image.width().max(image.height()) as f64 * 4.0).max(1.0) as u64;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            stamp(image, x0 + (x1 - x0) * t, y0 + (y1 - y0) * t, width, color);
        }
    }
}
