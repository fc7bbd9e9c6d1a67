//! Plot configuration and defaults.
//!
//! Everything a run needs is carried in explicit values passed down the
//! pipeline; nothing here is process-wide mutable state.

use crate::{PlotError, Resolution, Viewport};
use serde::{Deserialize, Serialize};

/// Built-in defaults for a fractal plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalConfig {
    /// Unique identifier
    pub id: &'static str,
    /// Human-readable name for log output
    pub display_name: &'static str,
    pub default_viewport: Viewport,
    pub default_resolution: Resolution,
    pub default_max_iterations: u32,
    pub default_escape_radius: f64,
    /// Colour map used when the caller does not name one.
    pub default_colormap: &'static str,
}

/// Mandelbrot set defaults. Canonical source for every default in the
/// workspace.
pub static MANDELBROT_CONFIG: FractalConfig = FractalConfig {
    id: "mandelbrot",
    display_name: "Mandelbrot Set",
    default_viewport: Viewport::MANDELBROT,
    default_resolution: Resolution {
        width: 400,
        height: 300,
    },
    default_max_iterations: 100,
    default_escape_radius: 2.0,
    default_colormap: "jet",
};

/// Look up a fractal configuration by ID.
pub fn get_fractal_config(id: &str) -> Option<&'static FractalConfig> {
    match id {
        "mandelbrot" => Some(&MANDELBROT_CONFIG),
        _ => None,
    }
}

/// Iteration budget and escape radius for the escape-time engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EscapeParams {
    max_iterations: u32,
    escape_radius: f64,
    escape_radius_sq: f64,
}

impl EscapeParams {
    /// Validate and bundle the engine parameters.
    ///
    /// Fails with [`PlotError::InvalidBudget`] for a zero budget and
    /// [`PlotError::InvalidRadius`] for a radius that is not a positive,
    /// finite number.
    pub fn new(max_iterations: u32, escape_radius: f64) -> Result<Self, PlotError> {
        if max_iterations == 0 {
            return Err(PlotError::InvalidBudget(max_iterations));
        }
        if !(escape_radius.is_finite() && escape_radius > 0.0) {
            return Err(PlotError::InvalidRadius(escape_radius));
        }
        Ok(Self {
            max_iterations,
            escape_radius,
            escape_radius_sq: escape_radius * escape_radius,
        })
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }

    /// R², the threshold the kernel compares |z|² against.
    #[inline]
    pub fn escape_radius_sq(&self) -> f64 {
        self.escape_radius_sq
    }
}

impl Default for EscapeParams {
    fn default() -> Self {
        let radius = MANDELBROT_CONFIG.default_escape_radius;
        Self {
            max_iterations: MANDELBROT_CONFIG.default_max_iterations,
            escape_radius: radius,
            escape_radius_sq: radius * radius,
        }
    }
}

/// What to compute: region, sampling and engine parameters, loadable from
/// JSON. How the result is coloured is not part of it.
///
/// Missing fields fall back to [`MANDELBROT_CONFIG`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub viewport: Viewport,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub escape_radius: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        let defaults = &MANDELBROT_CONFIG;
        Self {
            viewport: defaults.default_viewport,
            width: defaults.default_resolution.width,
            height: defaults.default_resolution.height,
            max_iterations: defaults.default_max_iterations,
            escape_radius: defaults.default_escape_radius,
        }
    }
}

impl PlotConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn resolution(&self) -> Result<Resolution, PlotError> {
        Resolution::new(self.width, self.height)
    }

    pub fn escape_params(&self) -> Result<EscapeParams, PlotError> {
        EscapeParams::new(self.max_iterations, self.escape_radius)
    }

    /// Check every precondition of the grid builder and the engine.
    pub fn validate(&self) -> Result<(), PlotError> {
        self.viewport.validate()?;
        self.resolution()?;
        self.escape_params()?;
        Ok(())
    }
}
