//! Grid builder: samples a viewport at a fixed resolution.

use crate::{F64Complex, PlotError, Resolution, Viewport};

/// `n` evenly spaced values from `start` to `end`, both endpoints included.
///
/// The first and last values are `start` and `end` exactly rather than
/// interpolated, so grid corners land on the viewport bounds without
/// rounding drift. When `end - start` overflows f64 the interior values are
/// interpolated as `start·(1-t) + end·t`, which stays finite.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (n - 1) as f64;
            let span = end - start;
            (0..n)
                .map(|i| {
                    let t = i as f64 / last;
                    if i == 0 {
                        start
                    } else if i == n - 1 {
                        end
                    } else if span.is_finite() {
                        start + span * t
                    } else {
                        start * (1.0 - t) + end * t
                    }
                })
                .collect()
        }
    }
}

/// Sampled complex-plane coordinates, `height` rows by `width` columns,
/// stored row-major.
///
/// Column `c` maps to the real axis and row `r` to the imaginary axis:
/// `[0][0]` is `x_min + y_min·i` and `[height-1][width-1]` is
/// `x_max + y_max·i`. The grid cannot be modified after it is built.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateGrid {
    viewport: Viewport,
    resolution: Resolution,
    real_axis: Vec<f64>,
    imag_axis: Vec<f64>,
    cells: Vec<F64Complex>,
}

impl CoordinateGrid {
    /// Build the grid for `viewport` sampled at `resolution`.
    ///
    /// Both inputs are validated before anything is allocated.
    pub fn build(viewport: &Viewport, resolution: Resolution) -> Result<Self, PlotError> {
        viewport.validate()?;
        resolution.validate()?;

        let real_axis = linspace(viewport.x_min, viewport.x_max, resolution.width as usize);
        let imag_axis = linspace(viewport.y_min, viewport.y_max, resolution.height as usize);

        let cells: Vec<F64Complex> = imag_axis
            .iter()
            .flat_map(|&im| real_axis.iter().map(move |&re| F64Complex::new(re, im)))
            .collect();

        log::debug!(
            "Built {}x{} coordinate grid over {:?}",
            resolution.width,
            resolution.height,
            viewport
        );

        Ok(Self {
            viewport: *viewport,
            resolution,
            real_axis,
            imag_axis,
            cells,
        })
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn width(&self) -> usize {
        self.resolution.width as usize
    }

    pub fn height(&self) -> usize {
        self.resolution.height as usize
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        self.resolution.shape()
    }

    /// Sample at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<F64Complex> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.cells[row * self.width() + col])
    }

    /// All samples in row-major order.
    pub fn cells(&self) -> &[F64Complex] {
        &self.cells
    }

    /// One row of samples; panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[F64Complex] {
        let width = self.width();
        &self.cells[row * width..(row + 1) * width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[F64Complex]> {
        self.cells.chunks(self.width())
    }

    /// Real component of each column.
    pub fn real_axis(&self) -> &[f64] {
        &self.real_axis
    }

    /// Imaginary component of each row.
    pub fn imag_axis(&self) -> &[f64] {
        &self.imag_axis
    }
}
