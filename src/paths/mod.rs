//! Traced path data
//!
//! This module turns the renderer's 2D path dump into an immutable, ordered
//! collection of point sequences:
//! - [`parse`]: line-oriented parser for the path-trace text format
//! - [`PathSet`]: the parsed paths, sorted longest first
//!
//! # Coordinates
//!
//! Points are stored in normalized image space. `(0, 0)` is the top-left corner
//! of the background image and `(1, 1)` the bottom-right. Samples that left the
//! scene may fall outside that range; they are kept as-is and clipped when drawn.

pub mod parse;

pub use parse::{parse_paths, ParseError, ParseErrorKind};

/// A single sample of a traced path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
    /// The traced ray left the scene boundary at this sample
    pub exited_world: bool,
}

impl PathPoint {
    pub fn new(x: f64, y: f64, exited_world: bool) -> Self {
        PathPoint { x, y, exited_world }
    }
}

/// An ordered, non-empty sequence of samples in trace order
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<PathPoint>,
}

impl Path {
    /// Build a path from its samples. Returns `None` for an empty sequence.
    pub fn new(points: Vec<PathPoint>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Path { points })
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true: paths are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    pub fn first(&self) -> &PathPoint {
        &self.points[0]
    }

    pub fn get(&self, index: usize) -> Option<&PathPoint> {
        self.points.get(index)
    }

    /// Whether the path can be replayed (needs a start and at least one step)
    pub fn is_selectable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// All parsed paths, longest first.
///
/// The ordering is established once with a stable sort, so paths of equal
/// length keep the order in which they appeared in the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathSet {
    paths: Vec<Path>,
}

impl PathSet {
    pub fn new(mut paths: Vec<Path>) -> Self {
        // `sort_by` is stable
        paths.sort_by(|a, b| b.len().cmp(&a.len()));
        PathSet { paths }
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter()
    }

    /// Number of paths with at least two points
    pub fn selectable_count(&self) -> usize {
        self.paths.iter().filter(|p| p.is_selectable()).count()
    }
}

impl std::ops::Index<usize> for PathSet {
    type Output = Path;

    fn index(&self, index: usize) -> &Path {
        &self.paths[index]
    }
}
