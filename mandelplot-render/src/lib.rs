//! Colour-mapped PNG output for escape-time fields.

pub mod colormaps;
mod config;
mod error;
pub mod pipeline;
pub mod renderer;
mod settings;

pub use colormaps::{Colormap, COLORMAP_NAMES};
pub use config::RunConfig;
pub use error::RenderError;
pub use pipeline::{draw_mandelbrot, draw_run, DrawOptions, DrawSummary};
pub use renderer::{save_png, PlotRenderer};
pub use settings::{Origin, RenderSettings};
