/// Error types for camera construction and model loading
use thiserror::Error;

/// A camera snapshot that cannot be projected through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("viewport must have positive dimensions, got {width}x{height}")]
    InvalidViewport { width: i32, height: i32 },
    #[error("zoom scale must be positive, got {0}")]
    InvalidScale(i32),
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("model has no vertices")]
    Empty,
}
