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

use clap::Parser;
use log::error;

mod pipeline;


/// A command-line tool to resample and Lorentzian-broaden simulated spectra.
fn main() {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = linebroad::cli::Args::parse();

    // Validate CLI arguments
    linebroad::cli::validate_args_or_exit(&args);

    // Run the main logic
    if let Err(e) = pipeline::run(&args) {
        error!("Application error: {:#}", e);
        std::process::exit(1);
    }
}
