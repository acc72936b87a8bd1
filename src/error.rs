//! Error types for loading, transforming and rendering camera poses.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoseError {
    /// The expected `images.txt` does not exist.
    #[error("images.txt not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data line could not be turned into a pose.
    #[error("malformed pose on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The quaternion on this line has (numerically) zero magnitude.
    #[error("degenerate rotation on line {line}: quaternion has zero norm")]
    DegenerateRotation { line: usize },

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, PoseError>;
