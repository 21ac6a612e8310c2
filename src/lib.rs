//! Linebroad - resampling and Lorentzian line-broadening for simulated spectra
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <https://www.gnu.org/licenses/>.

use ndarray::Array1;

/// Error types for linebroad operations.
pub mod error;
pub use error::{LinebroadError, Result};

/// Lorentzian kernel and same-length discrete convolution
pub mod broaden;
/// Common CLI argument definitions
pub mod cli;
/// Uniform grid construction and resampling
pub mod grid;
/// Plotting (capability-checked, behind the `plot` feature)
pub mod plot;
/// Data reading and format detection
pub mod read;

// Re-export commonly used items
pub use broaden::{broaden, convolve_same, lorentzian};
pub use cli::{Args, PlotTarget, XUnits};
pub use grid::{build_grid, padded_max, xy_to_1d};
pub use read::{is_doscar, load_spectrum};

/// A raw spectrum as parsed from an input file.
///
/// `x` values are not necessarily sorted or uniformly spaced; the resampler
/// in [`grid`] projects them onto a uniform grid.
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// x-axis positions (frequency or energy, in the unit declared on the
    /// command line).
    pub x: Array1<f64>,
    /// Intensities, aligned 1:1 with `x`.
    pub y: Array1<f64>,
}

impl Spectrum {
    /// Number of (x, y) samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when the spectrum holds no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Smallest x value. Input order is arbitrary so this scans.
    pub fn x_min(&self) -> f64 {
        self.x.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest x value.
    pub fn x_max(&self) -> f64 {
        self.x.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}
