//! Replay frame pane
//!
//! Shows an RGBA frame inside a terminal area. Each cell carries two pixels
//! stacked vertically: `▀` painted with the upper pixel as foreground and the
//! lower pixel as background. The frame is scaled with nearest-neighbour
//! sampling to the largest size that fits, keeping its aspect ratio, and
//! centered.

use crate::ui::theme::DEFAULT_THEME;
use image::{Rgba, RgbaImage};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const UPPER_HALF: &str = "▀";

/// Where and how large a frame lands inside a terminal area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Cells covered by the scaled frame
    pub cells: Rect,
    /// Frame height in half-cell pixels (may be odd)
    pub pixel_height: u32,
    /// Terminal pixels per frame pixel
    pub scale: f64,
}

/// Fit a `width` x `height` frame into `area`.
///
/// Returns `None` when either side is empty.
pub fn place(width: u32, height: u32, area: Rect) -> Option<Placement> {
    if width == 0 || height == 0 || area.width == 0 || area.height == 0 {
        return None;
    }

    let available_w = area.width as f64;
    let available_h = area.height as f64 * 2.0;
    let scale = (available_w / width as f64).min(available_h / height as f64);

    let pixel_width = ((width as f64 * scale).floor() as u32).clamp(1, area.width as u32);
    let pixel_height =
        ((height as f64 * scale).floor() as u32).clamp(1, area.height as u32 * 2);
    let cell_height = pixel_height.div_ceil(2);

    let x = area.x + (area.width - pixel_width as u16) / 2;
    let y = area.y + (area.height - cell_height as u16) / 2;

    Some(Placement {
        cells: Rect::new(x, y, pixel_width as u16, cell_height as u16),
        pixel_height,
        scale,
    })
}

fn to_color(pixel: &Rgba<u8>) -> Color {
    let [r, g, b, _] = pixel.0;
    Color::Rgb(r, g, b)
}

/// Widget drawing one replay frame
pub struct Viewport<'a> {
    frame: &'a RgbaImage,
}

impl<'a> Viewport<'a> {
    pub fn new(frame: &'a RgbaImage) -> Self {
        Viewport { frame }
    }

    fn sample(&self, col: u32, pixel_row: u32, scale: f64) -> Color {
        let (width, height) = self.frame.dimensions();
        let sx = (((col as f64 + 0.5) / scale) as u32).min(width - 1);
        let sy = (((pixel_row as f64 + 0.5) / scale) as u32).min(height - 1);
        to_color(self.frame.get_pixel(sx, sy))
    }
}

impl Widget for Viewport<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(DEFAULT_THEME.letterbox));

        let (width, height) = self.frame.dimensions();
        let Some(placement) = place(width, height, area) else {
            return;
        };

        let cells = placement.cells;
        for row in 0..cells.height {
            for col in 0..cells.width {
                let upper_row = row as u32 * 2;
                let lower_row = upper_row + 1;
                let upper = self.sample(col as u32, upper_row, placement.scale);
                let lower = if lower_row < placement.pixel_height {
                    self.sample(col as u32, lower_row, placement.scale)
                } else {
                    DEFAULT_THEME.letterbox
                };

                if let Some(cell) = buf.cell_mut((cells.x + col, cells.y + row)) {
                    cell.set_symbol(UPPER_HALF).set_fg(upper).set_bg(lower);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_wide_image() {
        // 200x100 into 50 cols x 40 rows (80 px high): width-limited
        let p = place(200, 100, Rect::new(0, 0, 50, 40)).unwrap();
        assert_eq!(p.scale, 0.25);
        assert_eq!(p.cells.width, 50);
        assert_eq!(p.pixel_height, 25);
        assert_eq!(p.cells.height, 13);
        assert_eq!(p.cells.y, (40 - 13) / 2);
    }

    #[test]
    fn test_place_tall_image_centers_horizontally() {
        let p = place(100, 400, Rect::new(10, 0, 100, 50)).unwrap();
        assert_eq!(p.scale, 0.25);
        assert_eq!(p.cells.width, 25);
        assert_eq!(p.cells.x, 10 + (100 - 25) / 2);
        assert_eq!(p.cells.height, 50);
    }

    #[test]
    fn test_place_empty() {
        assert!(place(0, 10, Rect::new(0, 0, 10, 10)).is_none());
        assert!(place(10, 10, Rect::new(0, 0, 0, 10)).is_none());
    }

    #[test]
    fn test_render_half_blocks() {
        // 2x2 frame: top row red, bottom row blue, drawn 1:1 in 2 cols x 1 row
        let mut frame = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 255]));
        frame.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        frame.put_pixel(1, 0, Rgba([255, 0, 0, 255]));

        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        Viewport::new(&frame).render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), UPPER_HALF);
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
    }
}
