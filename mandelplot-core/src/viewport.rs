use crate::PlotError;
use serde::{Deserialize, Serialize};

/// Rectangular region of the complex plane to sample.
///
/// Bounds are plain `f64`: this crate does not do deep zoom, so there is no
/// need for the extended-precision types a zooming viewer would carry.
/// Construct through [`Viewport::new`] or [`Viewport::from_center`] to get a
/// validated value; deserialized values should be checked with
/// [`Viewport::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    /// The classic full view of the Mandelbrot set.
    pub const MANDELBROT: Viewport = Viewport {
        x_min: -2.0,
        x_max: 1.0,
        y_min: -1.5,
        y_max: 1.5,
    };

    /// Create a viewport from its four bounds.
    ///
    /// Fails with [`PlotError::InvalidViewport`] if any bound is NaN or
    /// infinite, or if a minimum is not strictly below its maximum.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, PlotError> {
        let viewport = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        viewport.validate()?;
        Ok(viewport)
    }

    /// Create a viewport centred on `(center_x, center_y)` spanning
    /// `width` by `height` in fractal space.
    pub fn from_center(
        center_x: f64,
        center_y: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, PlotError> {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self::new(
            center_x - half_w,
            center_x + half_w,
            center_y - half_h,
            center_y + half_h,
        )
    }

    /// Check the bounds invariant.
    pub fn validate(&self) -> Result<(), PlotError> {
        let bounds = (self.x_min, self.x_max, self.y_min, self.y_max);
        let all_finite = [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite());

        if !all_finite {
            return Err(PlotError::InvalidViewport {
                bounds,
                reason: "bounds must be finite",
            });
        }
        if self.x_min >= self.x_max {
            return Err(PlotError::InvalidViewport {
                bounds,
                reason: "x_min must be less than x_max",
            });
        }
        if self.y_min >= self.y_max {
            return Err(PlotError::InvalidViewport {
                bounds,
                reason: "y_min must be less than y_max",
            });
        }
        Ok(())
    }

    /// Visible width in fractal space.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Visible height in fractal space.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.x_min + self.width() / 2.0,
            self.y_min + self.height() / 2.0,
        )
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::MANDELBROT
    }
}
