//! One-time loading of the session inputs

use crate::error::{InputKind, VisualizerError, VisualizerResult};
use crate::paths::{parse_paths, PathSet};
use image::{ImageReader, RgbaImage};
use std::path::Path;

/// Read and parse a path-trace file
pub fn load_paths(path: &Path) -> VisualizerResult<PathSet> {
    let source = std::fs::read_to_string(path).map_err(|source| VisualizerError::MissingInput {
        kind: InputKind::PathFile,
        path: path.to_path_buf(),
        source,
    })?;
    let paths = parse_paths(&source)?;

    tracing::info!(
        total = paths.len(),
        selectable = paths.selectable_count(),
        longest = paths.get(0).map_or(0, |p| p.len()),
        "parsed paths"
    );
    Ok(paths)
}

/// Read and decode the background image
pub fn load_background(path: &Path) -> VisualizerResult<RgbaImage> {
    let missing = |source| VisualizerError::MissingInput {
        kind: InputKind::Image,
        path: path.to_path_buf(),
        source,
    };
    let decoded = ImageReader::open(path)
        .map_err(missing)?
        .with_guessed_format()
        .map_err(missing)?
        .decode()
        .map_err(|source| VisualizerError::Image {
            path: path.to_path_buf(),
            source,
        })?;

    let image = decoded.to_rgba8();
    tracing::info!(width = image.width(), height = image.height(), "loaded background");
    Ok(image)
}
