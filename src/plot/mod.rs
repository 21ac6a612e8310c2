//! Linebroad - resampling and Lorentzian line-broadening for simulated spectra
//! Plot rendering behind a capability check
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

use crate::cli::XUnits;
use crate::grid::padded_max;

#[cfg(feature = "plot")]
mod render;

/// Everything the renderer needs to draw one spectrum.
#[derive(Debug, Clone)]
pub struct SpectrumView {
    /// x-axis grid values.
    pub grid: Array1<f64>,
    /// Intensities aligned with the grid.
    pub signal: Array1<f64>,
    /// Unit used as the x-axis title.
    pub units: XUnits,
    /// Lower x limit.
    pub xmin: f64,
    /// Upper x limit.
    pub xmax: f64,
    /// Lower y limit.
    pub ymin: f64,
    /// Upper y limit; `None` falls back to the padding heuristic.
    pub ymax: Option<f64>,
}

impl SpectrumView {
    /// Effective y-axis upper limit: explicit value, else
    /// `1.05*max(signal) - 0.05*ymin`.
    pub fn effective_ymax(&self) -> f64 {
        self.ymax.unwrap_or_else(|| {
            let signal_max = self.signal.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            padded_max(signal_max, self.ymin)
        })
    }
}

/// Handle to the plotting capability of this build.
#[cfg(feature = "plot")]
pub struct Renderer(());

#[cfg(feature = "plot")]
impl Renderer {
    /// Save the spectrum figure to `path`.
    ///
    /// An HTML report is always written (at `path` itself when the
    /// extension is `.html`/`.htm`, next to it otherwise); a static image
    /// is additionally produced when the `plotly_static` exporter is
    /// available.
    pub fn save(&self, view: &SpectrumView, path: &std::path::Path) -> crate::Result<()> {
        render::save(view, path)
    }

    /// Open the figure in the interactive plotly viewer.
    pub fn show(&self, view: &SpectrumView) {
        render::show(view)
    }
}

/// Stub for builds without the `plot` feature; uninhabited so it can never
/// be used.
#[cfg(not(feature = "plot"))]
pub enum Renderer {}

#[cfg(not(feature = "plot"))]
impl Renderer {
    /// See the `plot`-enabled implementation.
    pub fn save(&self, _view: &SpectrumView, _path: &std::path::Path) -> crate::Result<()> {
        match *self {}
    }

    /// See the `plot`-enabled implementation.
    pub fn show(&self, _view: &SpectrumView) {
        match *self {}
    }
}

/// Plotting capability check, done once at startup.
///
/// Returns `None` when the crate was built without the `plot` feature; the
/// caller is expected to warn and continue without rendering.
pub fn renderer() -> Option<Renderer> {
    #[cfg(feature = "plot")]
    {
        Some(Renderer(()))
    }
    #[cfg(not(feature = "plot"))]
    {
        None
    }
}
