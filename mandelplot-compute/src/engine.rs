//! Escape-time engine: maps the per-point kernel over a coordinate grid.

use crate::mandelbrot::{escape_time, EscapeResult};
use crate::{EscapeField, Field, ResultField, SmoothField};
use mandelplot_core::{CoordinateGrid, EscapeParams, F64Complex, PlotError};
use rayon::prelude::*;
use std::time::Instant;

/// How cells are scheduled. Both produce identical fields; no cell depends
/// on another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    /// Rows are distributed over the rayon thread pool.
    #[default]
    Parallel,
    Sequential,
}

/// Computes escape fields for coordinate grids with a fixed budget and
/// radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EscapeTimeEngine {
    params: EscapeParams,
    execution: Execution,
}

impl EscapeTimeEngine {
    /// Fails with [`PlotError::InvalidBudget`] or [`PlotError::InvalidRadius`]
    /// before any work is done.
    pub fn new(max_iterations: u32, escape_radius: f64) -> Result<Self, PlotError> {
        Ok(Self::with_params(EscapeParams::new(
            max_iterations,
            escape_radius,
        )?))
    }

    pub fn with_params(params: EscapeParams) -> Self {
        Self {
            params,
            execution: Execution::default(),
        }
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn params(&self) -> &EscapeParams {
        &self.params
    }

    pub fn execution(&self) -> Execution {
        self.execution
    }

    /// Iterate a single point.
    pub fn escape_result(&self, c: F64Complex) -> EscapeResult {
        escape_time(c, &self.params)
    }

    /// Integer escape counts for every cell of `grid`.
    pub fn compute(&self, grid: &CoordinateGrid) -> EscapeField {
        let params = self.params;
        self.map_grid(grid, "escape", move |c| escape_time(c, &params).iterations)
    }

    /// Full kernel output for every cell of `grid`. Use this when both the
    /// integer and the smooth field are needed from one pass.
    pub fn compute_results(&self, grid: &CoordinateGrid) -> ResultField {
        let params = self.params;
        self.map_grid(grid, "result", move |c| escape_time(c, &params))
    }

    /// Continuous iteration values for every cell of `grid`.
    pub fn compute_smooth(&self, grid: &CoordinateGrid) -> SmoothField {
        let params = self.params;
        let max_iterations = params.max_iterations();
        self.map_grid(grid, "smooth", move |c| {
            escape_time(c, &params).smooth_iterations(max_iterations)
        })
    }

    fn map_grid<T, F>(&self, grid: &CoordinateGrid, label: &str, kernel: F) -> Field<T>
    where
        T: Copy + Default + Send,
        F: Fn(F64Complex) -> T + Sync,
    {
        let start = Instant::now();
        let width = grid.width();
        let mut values = vec![T::default(); grid.cells().len()];

        match self.execution {
            Execution::Parallel => values
                .par_chunks_mut(width)
                .zip(grid.cells().par_chunks(width))
                .for_each(|(out, row)| fill_row(out, row, &kernel)),
            Execution::Sequential => values
                .chunks_mut(width)
                .zip(grid.rows())
                .for_each(|(out, row)| fill_row(out, row, &kernel)),
        }

        log::debug!(
            "Computed {} field {}x{} (max_iterations={}, {:?}) in {:.1}ms",
            label,
            width,
            grid.height(),
            self.params.max_iterations(),
            self.execution,
            start.elapsed().as_secs_f64() * 1000.0
        );

        Field::from_parts(width, grid.height(), self.params.max_iterations(), values)
    }
}

#[inline]
fn fill_row<T, F>(out: &mut [T], row: &[F64Complex], kernel: &F)
where
    F: Fn(F64Complex) -> T,
{
    for (cell, &c) in out.iter_mut().zip(row) {
        *cell = kernel(c);
    }
}

/// Compute the escape field for `grid` in one call.
///
/// Parameters are validated first; on error nothing is computed.
pub fn compute_escape_field(
    grid: &CoordinateGrid,
    max_iterations: u32,
    escape_radius: f64,
) -> Result<EscapeField, PlotError> {
    Ok(EscapeTimeEngine::new(max_iterations, escape_radius)?.compute(grid))
}

/// Compute the smooth field for `grid` in one call.
pub fn compute_smooth_field(
    grid: &CoordinateGrid,
    max_iterations: u32,
    escape_radius: f64,
) -> Result<SmoothField, PlotError> {
    Ok(EscapeTimeEngine::new(max_iterations, escape_radius)?.compute_smooth(grid))
}
