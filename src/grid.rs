//! Uniform grid construction and resampling of raw (x, y) samples.

use ndarray::Array1;

use crate::Spectrum;

/// Pad an axis maximum: `1.05*max - 0.05*min`.
///
/// This is the historical heuristic for auto-ranging axes. It is not a true
/// "+5% of the range" (the subtracted term is scaled by the minimum, not the
/// span) but downstream results depend on the exact values, so it is kept
/// bit-for-bit.
pub fn padded_max(max: f64, min: f64) -> f64 {
    1.05 * max - 0.05 * min
}

/// Build an evenly spaced grid over `[xmin, xmax)` with step `d`.
///
/// Length is `ceil((xmax - xmin)/d)`; the upper bound is exclusive.
pub fn build_grid(xmin: f64, xmax: f64, d: f64) -> Array1<f64> {
    let n = ((xmax - xmin) / d).ceil().max(0.0) as usize;
    Array1::from_iter((0..n).map(|i| xmin + i as f64 * d))
}

/// Project raw (x, y) samples onto a uniform grid by nearest-neighbor
/// binning: each sample adds its intensity to the grid point closest to its
/// x position. Samples outside the grid range land on the nearest end point.
///
/// The output is aligned 1:1 with the grid.
pub fn xy_to_1d(spectrum: &Spectrum, grid: &Array1<f64>, d: f64) -> Array1<f64> {
    let n = grid.len();
    let mut spikes = Array1::zeros(n);
    if n == 0 {
        return spikes;
    }

    let xmin = grid[0];
    for (&x, &y) in spectrum.x.iter().zip(spectrum.y.iter()) {
        let idx = ((x - xmin) / d).round();
        let idx = if idx < 0.0 {
            0
        } else if idx >= n as f64 {
            n - 1
        } else {
            idx as usize
        };
        spikes[idx] += y;
    }
    spikes
}
