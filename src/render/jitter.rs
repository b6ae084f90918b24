//! Per-vertex jitter sources for the trail polyline
//!
//! Jitter only nudges where a vertex is drawn. It never feeds back into the
//! navigator, so replay stays deterministic whatever source is used.

use rand::Rng;

/// Supplies a pixel offset for each plotted trail vertex
pub trait Jitter {
    fn offset(&mut self) -> (f64, f64);
}

/// No offset at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn offset(&mut self) -> (f64, f64) {
        (0.0, 0.0)
    }
}

/// Uniform offsets in `[0, amplitude)` on each axis
#[derive(Debug, Clone)]
pub struct RandomJitter<R> {
    rng: R,
    amplitude: f64,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R, amplitude: f64) -> Self {
        RandomJitter {
            rng,
            amplitude: amplitude.max(0.0),
        }
    }
}

impl<R: Rng> Jitter for RandomJitter<R> {
    fn offset(&mut self) -> (f64, f64) {
        if self.amplitude == 0.0 {
            return (0.0, 0.0);
        }
        (
            self.amplitude * self.rng.gen::<f64>(),
            self.amplitude * self.rng.gen::<f64>(),
        )
    }
}
