//! Frame rendering
//!
//! A frame is an RGBA raster the size of the background image. Each frame is
//! built from scratch out of three inputs: the background, the [`PathSet`] and
//! the current [`NavigatorState`]:
//!
//! 1. the background is copied in at the origin, unscaled
//! 2. a filled marker is drawn at the active path's first point
//! 3. a filled marker is drawn at the current point, colored by whether that
//!    sample exited the world
//! 4. if at least one step is revealed, the trail is drawn on top through
//!    points `0..=progress`
//!
//! Markers are wider than the trail, so their rims stay visible under it.
//!
//! - [`raster`]: clipping pixel primitives
//! - [`jitter`]: offset sources for trail vertices

pub mod jitter;
pub mod raster;

use crate::navigator::NavigatorState;
use crate::paths::PathSet;
use image::{Rgba, RgbaImage};

pub use jitter::{Jitter, NoJitter, RandomJitter};

/// Radius of the start and current markers, in pixels
pub const MARKER_RADIUS: u32 = 5;

/// Stroke width of the revealed trail, in pixels
pub const TRAIL_WIDTH: u32 = 3;

/// Default jitter amplitude for trail vertices, in pixels
pub const DEFAULT_JITTER: f64 = 3.0;

/// Overlay colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub start: Rgba<u8>,
    pub current_in_world: Rgba<u8>,
    pub current_exited: Rgba<u8>,
    pub trail: Rgba<u8>,
}

pub const DEFAULT_PALETTE: Palette = Palette {
    start: Rgba([0, 255, 0, 255]),
    current_in_world: Rgba([255, 0, 0, 255]),
    current_exited: Rgba([0, 0, 0, 255]),
    trail: Rgba([255, 255, 255, 255]),
};

/// Draws frames over a fixed background
#[derive(Debug, Clone)]
pub struct Renderer {
    background: RgbaImage,
}

impl Renderer {
    pub fn new(background: RgbaImage) -> Self {
        Renderer { background }
    }

    /// Display surface size, taken from the background image
    pub fn dimensions(&self) -> (u32, u32) {
        self.background.dimensions()
    }

    /// Produce one frame. Only `jitter` is consumed; state is read-only.
    pub fn render(
        &self,
        paths: &PathSet,
        state: NavigatorState,
        jitter: &mut dyn Jitter,
    ) -> RgbaImage {
        let mut frame = self.background.clone();
        let (width, height) = frame.dimensions();

        let Some(path) = paths.get(state.active_index) else {
            return frame;
        };
        let points = path.points();
        let progress = state.progress.min(points.len() - 1);
        let pixel = |i: usize| raster::to_pixel(points[i].x, points[i].y, width, height);

        raster::fill_circle(&mut frame, pixel(0), MARKER_RADIUS, DEFAULT_PALETTE.start);

        let current = if points[progress].exited_world {
            DEFAULT_PALETTE.current_exited
        } else {
            DEFAULT_PALETTE.current_in_world
        };
        raster::fill_circle(&mut frame, pixel(progress), MARKER_RADIUS, current);

        if progress >= 1 {
            let trail: Vec<(f64, f64)> = (0..=progress)
                .map(|i| {
                    let (x, y) = pixel(i);
                    let (dx, dy) = jitter.offset();
                    (x + dx, y + dy)
                })
                .collect();
            raster::draw_polyline(&mut frame, &trail, TRAIL_WIDTH, DEFAULT_PALETTE.trail);
        }

        frame
    }
}
