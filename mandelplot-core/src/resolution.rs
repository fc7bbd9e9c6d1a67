use crate::PlotError;
use serde::{Deserialize, Serialize};

/// Number of samples along each axis of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Create a validated resolution.
    ///
    /// Both axes need at least two samples: the first and last sample sit on
    /// the viewport bounds, so a single sample has no defined spacing.
    pub fn new(width: u32, height: u32) -> Result<Self, PlotError> {
        let resolution = Self { width, height };
        resolution.validate()?;
        Ok(resolution)
    }

    pub fn validate(&self) -> Result<(), PlotError> {
        let reason = if self.width == 0 {
            "width must be positive"
        } else if self.height < 2 {
            "height must be at least 2"
        } else if self.width < 2 {
            "width must be at least 2"
        } else {
            return Ok(());
        };
        Err(PlotError::InvalidResolution {
            width: self.width,
            height: self.height,
            reason,
        })
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `(rows, columns)`, the shape of any field built for this resolution.
    pub fn shape(&self) -> (usize, usize) {
        (self.height as usize, self.width as usize)
    }
}
