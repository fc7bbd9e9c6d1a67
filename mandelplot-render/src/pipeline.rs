//! End-to-end plot: grid → escape field → colour-mapped PNG.

use crate::{PlotRenderer, RenderError, RenderSettings, RunConfig};
use mandelplot_compute::{CoordinateGrid, EscapeTimeEngine, Execution, PlotConfig};
use std::path::PathBuf;

/// Knobs that change how the field is computed, not what is plotted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawOptions {
    /// Plot continuous iteration values instead of integer counts.
    pub smooth: bool,
    pub execution: Execution,
}

/// What a finished draw produced.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawSummary {
    pub width: usize,
    pub height: usize,
    pub max_iterations: u32,
    pub bounded_cells: usize,
    pub escaped_fraction: f64,
    pub output: PathBuf,
}

/// Compute the Mandelbrot field described by `config` and write it to
/// `settings.output` using `settings.colormap`.
///
/// Every input (viewport, resolution, budget, radius, colour map name) is
/// checked before any cell is iterated. The grid is iterated once; the
/// smooth field and the summary counts come from the same pass.
pub fn draw_mandelbrot(
    config: &PlotConfig,
    settings: &RenderSettings,
    options: DrawOptions,
) -> Result<DrawSummary, RenderError> {
    let grid = CoordinateGrid::build(&config.viewport, config.resolution()?)?;
    let engine = EscapeTimeEngine::new(config.max_iterations, config.escape_radius)?
        .with_execution(options.execution);
    let renderer = PlotRenderer::new(settings.clone())?;

    let results = engine.compute_results(&grid);
    let field = results.counts();
    if options.smooth {
        renderer.save_field(&results.smooth())?;
    } else {
        renderer.save_field(&field)?;
    }

    Ok(DrawSummary {
        width: field.width(),
        height: field.height(),
        max_iterations: field.max_iterations(),
        bounded_cells: field.bounded_count(),
        escaped_fraction: field.escaped_fraction(),
        output: settings.output.clone(),
    })
}

/// Draw the plot a [`RunConfig`] describes.
pub fn draw_run(run: &RunConfig, options: DrawOptions) -> Result<DrawSummary, RenderError> {
    draw_mandelbrot(&run.plot, &run.render, options)
}
