use anyhow::Context;
use clap::Parser;
use mandelplot_compute::{Execution, Viewport};
use mandelplot_render::{draw_run, DrawOptions, Origin, RunConfig, COLORMAP_NAMES};
use std::path::PathBuf;

/// Draw the Mandelbrot set to a PNG file.
#[derive(Debug, Parser)]
#[command(name = "mandelplot", version)]
struct Opts {
    /// Colour map name (one of the built-in maps, optionally with `_r`)
    colormap: Option<String>,

    /// JSON run configuration; the colour map argument and flags override
    /// its values
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Iteration budget per point
    #[arg(long)]
    max_iterations: Option<u32>,

    #[arg(long)]
    escape_radius: Option<f64>,

    /// Bounds as x_min,x_max,y_min,y_max
    #[arg(long, value_parser = parse_viewport, allow_hyphen_values = true)]
    viewport: Option<Viewport>,

    /// Output PNG path [default: mandelbrot.png]
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Plot continuous iteration values
    #[arg(long)]
    smooth: bool,

    /// Compute on a single thread
    #[arg(long)]
    sequential: bool,

    /// Draw row 0 (y_min) at the top of the image
    #[arg(long)]
    origin_upper: bool,

    /// Print the built-in colour map names and exit
    #[arg(long)]
    list_colormaps: bool,
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    match parts.as_slice() {
        &[x_min, x_max, y_min, y_max] => {
            Viewport::new(x_min, x_max, y_min, y_max).map_err(|e| e.to_string())
        }
        _ => Err(format!("expected 4 comma-separated numbers, got {}", parts.len())),
    }
}

fn load_config(opts: &Opts) -> anyhow::Result<RunConfig> {
    let mut run = match &opts.config {
        Some(path) => {
            RunConfig::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => RunConfig::default(),
    };

    let render = &mut run.render;
    if let Some(colormap) = &opts.colormap {
        render.colormap = colormap.clone();
    }
    if let Some(output) = &opts.output {
        render.output = output.clone();
    }
    if opts.origin_upper {
        render.origin = Origin::Upper;
    }

    let config = &mut run.plot;
    if let Some(width) = opts.width {
        config.width = width;
    }
    if let Some(height) = opts.height {
        config.height = height;
    }
    if let Some(max_iterations) = opts.max_iterations {
        config.max_iterations = max_iterations;
    }
    if let Some(escape_radius) = opts.escape_radius {
        config.escape_radius = escape_radius;
    }
    if let Some(viewport) = opts.viewport {
        config.viewport = viewport;
    }
    Ok(run)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    if opts.list_colormaps {
        for name in COLORMAP_NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let run = load_config(&opts)?;
    println!("Drawing Mandelbrot with color map {:?}", run.render.colormap);

    let options = DrawOptions {
        smooth: opts.smooth,
        execution: if opts.sequential {
            Execution::Sequential
        } else {
            Execution::Parallel
        },
    };

    let summary = draw_run(&run, options)?;
    log::info!(
        "{}x{} cells, {} bounded ({:.1}% escaped)",
        summary.width,
        summary.height,
        summary.bounded_cells,
        summary.escaped_fraction * 100.0
    );
    Ok(())
}
