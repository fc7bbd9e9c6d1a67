pub mod engine;
pub mod field;
pub mod mandelbrot;

pub use engine::{compute_escape_field, compute_smooth_field, EscapeTimeEngine, Execution};
pub use field::{EscapeField, Field, ResultField, SmoothField};
pub use mandelbrot::{escape_time, EscapeResult};

// Re-export core types for convenience
pub use mandelplot_core::*;
