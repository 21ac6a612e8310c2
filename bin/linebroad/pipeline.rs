//! Straight-line pipeline: load, resample, broaden, render.

use anyhow::{Context, Result};
use log::{info, warn};
use ndarray::Array1;

use linebroad::cli::{Args, PlotTarget};
use linebroad::plot::{self, SpectrumView};
use linebroad::{broaden, build_grid, load_spectrum, padded_max, xy_to_1d};

/// Result of the numeric part of the pipeline, before any rendering.
#[derive(Debug)]
pub struct Processed {
    /// Uniform x-axis grid.
    pub grid: Array1<f64>,
    /// Resampled (and, when requested, broadened) intensities.
    pub signal: Array1<f64>,
    /// Effective upper x limit (explicit or derived from the data range).
    pub xmax: f64,
    /// Effective sampling step.
    pub d: f64,
}

/// Load the input spectrum and project it onto a uniform grid, applying
/// Lorentzian broadening when requested.
pub fn process(args: &Args) -> linebroad::Result<Processed> {
    let spectrum = load_spectrum(&args.input)?;
    info!(
        "Loaded {} samples from {}",
        spectrum.len(),
        args.input.display()
    );

    let d = args.step();
    let xmax = args
        .xmax
        .unwrap_or_else(|| padded_max(spectrum.x_max(), spectrum.x_min()));

    let grid = build_grid(args.xmin, xmax, d);
    info!(
        "Resampling onto [{}, {}) at step {} ({} points)",
        args.xmin,
        xmax,
        d,
        grid.len()
    );
    let resampled = xy_to_1d(&spectrum, &grid, d);

    let signal = match args.lorentzian {
        Some(width) => {
            info!("Applying Lorentzian broadening, width {}", width);
            broaden(&resampled, d, width)
        }
        None => resampled,
    };

    Ok(Processed {
        grid,
        signal,
        xmax,
        d,
    })
}

/// Run the full pipeline for one invocation.
pub fn run(args: &Args) -> Result<()> {
    let processed = process(args).context("Failed to process spectrum")?;

    let target = args.plot_target();
    if target.is_requested() {
        match plot::renderer() {
            Some(renderer) => {
                let view = SpectrumView {
                    grid: processed.grid,
                    signal: processed.signal,
                    units: args.units,
                    xmin: args.xmin,
                    xmax: processed.xmax,
                    ymin: args.ymin,
                    ymax: args.ymax,
                };
                match &target {
                    PlotTarget::Save(path) => renderer
                        .save(&view, path)
                        .context("Failed to save plot")?,
                    _ => renderer.show(&view),
                }
            }
            None => {
                warn!("Plotting requested but this build has no plotting capability; skipping");
            }
        }
    }

    Ok(())
}
