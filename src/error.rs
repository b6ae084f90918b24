//! Startup and session error types
//!
//! Every variant of [`VisualizerError`] is fatal: `main` prints it and exits
//! with a non-zero status. Navigation past either end is not an error at this
//! level; see [`crate::navigator::ExhaustedError`].

use crate::paths::ParseError;
use std::io;
use std::path::PathBuf;

/// Which startup input a [`VisualizerError::MissingInput`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    PathFile,
    Image,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::PathFile => write!(f, "path-trace file"),
            InputKind::Image => write!(f, "background image"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum VisualizerError {
    /// An input file was not found or could not be read
    #[error("cannot read {kind} '{}': {source}", path.display())]
    MissingInput {
        kind: InputKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The background image could not be decoded
    #[error("cannot decode background image '{}': {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Nothing to replay
    #[error("'{}' contains no path with at least two points", path.display())]
    NoSelectablePath { path: PathBuf },

    /// The config file exists but could not be read or understood
    #[error("invalid config file '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A required input was given neither on the command line nor in the config
    #[error("no {0} given (pass it on the command line or set it in the config file)")]
    MissingArgument(InputKind),

    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    /// Terminal I/O
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type VisualizerResult<T> = Result<T, VisualizerError>;
