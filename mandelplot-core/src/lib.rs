pub mod complex;
pub mod config;
pub mod error;
pub mod grid;
pub mod resolution;
pub mod viewport;

pub use complex::F64Complex;
pub use config::{get_fractal_config, EscapeParams, FractalConfig, PlotConfig, MANDELBROT_CONFIG};
pub use error::PlotError;
pub use grid::{linspace, CoordinateGrid};
pub use resolution::Resolution;
pub use viewport::Viewport;
