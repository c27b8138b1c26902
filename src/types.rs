//! Core types and structures for MaskFill

use thiserror::Error;

/// Processing configuration
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    /// Reconstruction neighborhood radius in pixels (must be positive)
    pub radius: f32,
    /// Show progress output
    pub show_progress: bool,
    /// Enable detailed timing information
    pub benchmark: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            show_progress: true,
            benchmark: false,
        }
    }
}

/// MaskFill error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),
}

pub type Result<T> = std::result::Result<T, Error>;
