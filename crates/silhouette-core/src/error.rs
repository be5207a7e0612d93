use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SilhouetteError {
    #[error("Failed to load image {}: {message}", path.display())]
    ImageLoad { path: PathBuf, message: String },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidGrid { width: usize, height: usize },

    #[error("RGB buffer has {actual} bytes, expected {expected}")]
    InvalidBuffer { expected: usize, actual: usize },

    #[error("Invalid detection config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SilhouetteError>;
