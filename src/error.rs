//! Error types for the linebroad crate.
//!
//! This module provides a unified error type for all linebroad operations:
//! loading spectral data, resampling and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for linebroad operations.
///
/// All fatal failures of the pipeline are captured here. A missing plotting
/// capability is deliberately not an error: the pipeline degrades to a
/// warning and continues.
#[derive(Debug, Error)]
pub enum LinebroadError {
    /// The input path does not exist.
    #[error("input file '{}' does not exist", path.display())]
    MissingInputFile {
        /// Path that was requested on the command line.
        path: PathBuf,
    },

    /// The input file was recognised as a format we know about but cannot
    /// read yet.
    #[error("'{}' looks like a DOSCAR file; DOSCAR is not supported yet, sorry", path.display())]
    UnsupportedFormat {
        /// Path of the rejected file.
        path: PathBuf,
    },

    /// The input file parsed cleanly but contained no data rows.
    #[error("no (x, y) data rows found in '{}'", path.display())]
    EmptyInput {
        /// Path of the empty file.
        path: PathBuf,
    },

    /// A data line could not be parsed as two comma-separated numbers.
    #[error("'{}' line {line}: {message}", path.display())]
    InvalidRow {
        /// Path of the offending file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Description of what failed to parse.
        message: String,
    },

    /// Failure while writing a plot file.
    #[error("failed to write plot to '{}': {message}", path.display())]
    PlotOutput {
        /// Path of the plot file.
        path: PathBuf,
        /// Error message describing the failure.
        message: String,
    },

    /// I/O error wrapper.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for linebroad operations.
pub type Result<T> = std::result::Result<T, LinebroadError>;

impl LinebroadError {
    /// Returns true if this error concerns the input file rather than the
    /// pipeline itself.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            LinebroadError::MissingInputFile { .. }
                | LinebroadError::UnsupportedFormat { .. }
                | LinebroadError::EmptyInput { .. }
                | LinebroadError::InvalidRow { .. }
        )
    }
}
