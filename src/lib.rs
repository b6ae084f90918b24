//! # Introduction
//!
//! path-replay reviews the light paths traced by a path-tracing renderer. It
//! reads the renderer's 2D path dump and its rendered image, then replays one
//! path at a time over the image, point by point, in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! path dump → Parser → PathSet → Navigator → Renderer → Viewport
//!                                    ↑
//!                     terminal events → KeyMap
//! ```
//!
//! 1. [`paths`] — parses the dump and holds the paths, longest first.
//! 2. [`navigator`] — which path is active and how far its replay has got.
//! 3. [`render`] — draws a frame over the background image.
//! 4. [`ui`] — input dispatch, the fixed-rate loop and the terminal panes.
//! 5. [`config`] and [`load`] — startup settings and input loading.

pub mod config;
pub mod error;
pub mod load;
pub mod navigator;
pub mod paths;
pub mod render;
pub mod ui;

pub use error::{VisualizerError, VisualizerResult};
