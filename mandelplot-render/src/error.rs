//! Rendering error types.

use mandelplot_core::PlotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown color map {0:?}")]
    UnknownColormap(String),

    #[error("field has {actual} values, expected {width}x{height}")]
    ShapeMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },

    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] serde_json::Error),
}
