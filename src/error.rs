//! Errors raised while building a [Grid](crate::grid::Grid) from text or raw cells.
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type MazeResult<T> = Result<T, MazeError>;

#[derive(Error, Debug)]
pub enum MazeError {
    /// A character outside `#`, space, `s` and `t` was found in the input.
    #[error("invalid character {ch:?} at ({x}, {y})")]
    InvalidCharacter { ch: char, x: usize, y: usize },

    #[error("maze has no start cell ('s')")]
    MissingStart,

    #[error("maze has no target cell ('t')")]
    MissingTarget,

    #[error("{width}x{height} grid cannot hold {cells} cells")]
    InvalidDimensions {
        width: usize,
        height: usize,
        cells: usize,
    },

    #[error("{marker} ({x}, {y}) lies outside the grid")]
    MarkerOutOfBounds { marker: &'static str, x: i32, y: i32 },

    #[error("{marker} ({x}, {y}) is a wall")]
    MarkerOnWall { marker: &'static str, x: i32, y: i32 },

    #[error("could not read {}: {source}", describe_input(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write output: {0}")]
    Output(#[source] std::io::Error),
}

impl From<std::io::Error> for MazeError {
    fn from(source: std::io::Error) -> Self {
        MazeError::Io { path: None, source }
    }
}

fn describe_input(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "standard input".to_owned(),
    }
}
