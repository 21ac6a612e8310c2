//! Linebroad - resampling and Lorentzian line-broadening for simulated spectra
//! Common command-line interface definitions
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

use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use std::process;

/// Lorentzian width used when `-l/--lorentzian` is given without a value.
pub const DEFAULT_LORENTZIAN_WIDTH: f64 = 2.0;

/// Units for the x axis of the input spectrum.
///
/// The unit determines the default sampling step of the resampled grid and
/// the x-axis title of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum XUnits {
    /// Wavelength in centimetres
    #[value(name = "cm")]
    Cm,
    /// Wavenumber (reciprocal centimetres)
    #[value(name = "cm-1")]
    CmInverse,
    /// Frequency in terahertz
    #[value(name = "thz", alias = "THz")]
    Thz,
    /// Energy in electronvolts
    #[value(name = "ev", alias = "eV")]
    Ev,
}

impl XUnits {
    /// Default grid spacing, in x-axis units, when `--sampling` is not given.
    pub fn default_step(&self) -> f64 {
        match self {
            XUnits::Cm | XUnits::CmInverse => 0.1,
            XUnits::Thz => 1e-3,
            XUnits::Ev => 1e-2,
        }
    }
}

impl fmt::Display for XUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XUnits::Cm => write!(f, "cm"),
            XUnits::CmInverse => write!(f, "cm-1"),
            XUnits::Thz => write!(f, "THz"),
            XUnits::Ev => write!(f, "eV"),
        }
    }
}

/// What to do with the processed spectrum once the pipeline has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotTarget {
    /// No plot requested.
    None,
    /// Open an interactive viewer.
    Display,
    /// Save the figure to the given path.
    Save(PathBuf),
}

impl PlotTarget {
    /// True when any rendering was requested.
    pub fn is_requested(&self) -> bool {
        !matches!(self, PlotTarget::None)
    }
}

/// CLI arguments for the linebroad binary.
#[derive(Parser, Debug, Clone)]
#[command(author, about, long_about = None)]
pub struct Args {
    /// Input data file: two comma-separated numeric columns (x, y),
    /// `#` starts a comment.
    #[arg(default_value = "DOSCAR")]
    pub input: PathBuf,

    /// Apply Lorentzian broadening with the given width (FWHM, in x-axis
    /// units). The bare flag uses a width of 2.
    #[arg(
        short,
        long,
        num_args = 0..=1,
        default_missing_value = "2",
        value_name = "WIDTH",
        value_parser = parse_strictly_positive_f64
    )]
    pub lorentzian: Option<f64>,

    /// Units for x axis (usually frequency or energy)
    #[arg(long, visible_alias = "x_units", value_enum, default_value = "cm-1")]
    pub units: XUnits,

    /// Plot the broadened spectrum. Plot to filename if provided, otherwise
    /// display to screen.
    #[arg(short, long, num_args = 0..=1, value_name = "PATH")]
    pub plot: Option<Option<PathBuf>>,

    /// Width, in units of x, of x-axis resolution (overrides the unit
    /// default).
    #[arg(short = 'd', long, value_name = "STEP", value_parser = parse_strictly_positive_f64)]
    pub sampling: Option<f64>,

    /// Minimum x axis value
    #[arg(long, default_value_t = 0.0)]
    pub xmin: f64,

    /// Maximum x axis value (default: 5% padding above the data range)
    #[arg(long)]
    pub xmax: Option<f64>,

    /// Minimum y axis value
    #[arg(long, default_value_t = 0.0)]
    pub ymin: f64,

    /// Maximum y axis value (default: 5% padding above the broadened curve)
    #[arg(long)]
    pub ymax: Option<f64>,
}

impl Args {
    /// Effective sampling step: explicit override, else the unit default.
    pub fn step(&self) -> f64 {
        self.sampling.unwrap_or_else(|| self.units.default_step())
    }

    /// Resolve the `-p/--plot` flag into an explicit target.
    pub fn plot_target(&self) -> PlotTarget {
        match &self.plot {
            None => PlotTarget::None,
            Some(None) => PlotTarget::Display,
            Some(Some(path)) => PlotTarget::Save(path.clone()),
        }
    }
}

/// Validate CLI arguments; returns a user-facing message on failure.
pub fn validate_args(args: &Args) -> Result<(), String> {
    if let Some(xmax) = args.xmax {
        if args.xmin >= xmax {
            return Err(format!(
                "Invalid x range: xmin ({}) must be < xmax ({})",
                args.xmin, xmax
            ));
        }
    }

    if let Some(ymax) = args.ymax {
        if args.ymin >= ymax {
            return Err(format!(
                "Invalid y range: ymin ({}) must be < ymax ({})",
                args.ymin, ymax
            ));
        }
    }

    Ok(())
}

/// Validate arguments and exit with an error message if validation fails.
pub fn validate_args_or_exit(args: &Args) {
    if let Err(error) = validate_args(args) {
        eprintln!("Validation error: {}", error);
        process::exit(1);
    }
}

// Custom value parser to enforce strictly positive f64
fn parse_strictly_positive_f64(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("invalid float: {s}"))?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err("value must be strictly positive (> 0)".to_string())
    }
}
