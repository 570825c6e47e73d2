//! Error types for asset generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while laying out or rendering assets
#[derive(Error, Debug)]
pub enum Error {
    /// A required source image does not exist
    #[error("Source image not found: {0}")]
    MissingSource(PathBuf),

    /// Invalid layout configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to realize a scene as output bytes
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Decoding or encoding an image failed
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    /// Filesystem error while reading sources or writing assets
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
