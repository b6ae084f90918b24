//! Startup configuration
//!
//! The renderer writes a JSON config next to its outputs. When present, it
//! supplies default locations for the 2D path dump and the rendered image;
//! command-line values always win. Resolution happens once, in `main`, and
//! the resulting [`Settings`] value is passed down explicitly.

use crate::error::{InputKind, VisualizerError, VisualizerResult};
use crate::render::DEFAULT_JITTER;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default frames per second of the replay loop
pub const DEFAULT_FPS: u32 = 60;

/// The subset of the renderer's config file this tool reads
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RendererConfig {
    pub traced_paths_2d_output_path: Option<PathBuf>,
    pub ppm_output_path: Option<PathBuf>,
}

impl RendererConfig {
    /// Read the config file. A missing file is not an error.
    pub fn load(path: &Path) -> VisualizerResult<Option<Self>> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, not loading it");
            return Ok(None);
        }

        let text = std::fs::read_to_string(path).map_err(|e| VisualizerError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: RendererConfig =
            serde_json::from_str(&text).map_err(|e| VisualizerError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(Some(config))
    }

    /// Default path-trace file, relative to `base`
    pub fn paths_file(&self, base: &Path) -> Option<PathBuf> {
        self.traced_paths_2d_output_path
            .as_ref()
            .map(|p| base.join(p))
    }

    /// Default background image: the renderer's PPM output converted to PNG
    pub fn image_file(&self, base: &Path) -> Option<PathBuf> {
        self.ppm_output_path.as_ref().map(|p| {
            let p = base.join(p);
            if p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("ppm")) {
                p.with_extension("png")
            } else {
                p
            }
        })
    }
}

/// Values given explicitly by the operator
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub paths: Option<PathBuf>,
    pub image: Option<PathBuf>,
    pub fps: Option<u32>,
    pub jitter: Option<f64>,
}

/// Everything the visualizer needs to start
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub paths_file: PathBuf,
    pub image_file: PathBuf,
    pub fps: u32,
    /// Trail jitter amplitude in pixels; 0 disables it
    pub jitter: f64,
}

impl Settings {
    /// Combine operator overrides with config defaults.
    ///
    /// `config_dir` is the directory relative paths in the config refer to.
    pub fn resolve(
        overrides: Overrides,
        config: Option<&RendererConfig>,
        config_dir: &Path,
    ) -> VisualizerResult<Self> {
        let paths_file = overrides
            .paths
            .or_else(|| config.and_then(|c| c.paths_file(config_dir)))
            .ok_or(VisualizerError::MissingArgument(InputKind::PathFile))?;
        let image_file = overrides
            .image
            .or_else(|| config.and_then(|c| c.image_file(config_dir)))
            .ok_or(VisualizerError::MissingArgument(InputKind::Image))?;

        let fps = overrides.fps.unwrap_or(DEFAULT_FPS);
        if fps == 0 {
            return Err(VisualizerError::InvalidSetting(
                "fps must be at least 1".to_string(),
            ));
        }

        let jitter = overrides.jitter.unwrap_or(DEFAULT_JITTER);
        if !jitter.is_finite() || jitter < 0.0 {
            return Err(VisualizerError::InvalidSetting(format!(
                "jitter must be a non-negative number of pixels, got {}",
                jitter
            )));
        }

        Ok(Settings {
            paths_file,
            image_file,
            fps,
            jitter,
        })
    }
}
