use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ndarray::Array1;

use crate::error::{LinebroadError, Result};
use crate::read::formats::is_doscar;
use crate::Spectrum;

/// Load a two-column (x, y) spectrum from a comma-delimited text file.
///
/// Everything after a `#` is treated as a comment; blank lines are skipped.
/// Each remaining line must provide at least two comma-separated floats.
///
/// Fails with [`LinebroadError::MissingInputFile`] when the path does not
/// exist and [`LinebroadError::UnsupportedFormat`] when the file looks like
/// a DOSCAR.
pub fn load_spectrum(path: &Path) -> Result<Spectrum> {
    if !path.exists() {
        return Err(LinebroadError::MissingInputFile {
            path: path.to_path_buf(),
        });
    }

    if is_doscar(path)? {
        return Err(LinebroadError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut x_values = Vec::new();
    let mut y_values = Vec::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;

        // Strip inline comments before parsing
        let data = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line.as_str(),
        };
        let data = data.trim();
        if data.is_empty() {
            continue;
        }

        let fields: Vec<&str> = data.split(',').map(|s| s.trim()).collect();
        if fields.len() < 2 {
            return Err(LinebroadError::InvalidRow {
                path: path.to_path_buf(),
                line: line_idx + 1,
                message: format!("expected 2 comma-separated columns, found {}", fields.len()),
            });
        }

        let x = parse_field(path, line_idx + 1, fields[0])?;
        let y = parse_field(path, line_idx + 1, fields[1])?;
        x_values.push(x);
        y_values.push(y);
    }

    if x_values.is_empty() {
        return Err(LinebroadError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    Ok(Spectrum {
        x: Array1::from_vec(x_values),
        y: Array1::from_vec(y_values),
    })
}

fn parse_field(path: &Path, line: usize, field: &str) -> Result<f64> {
    field.parse::<f64>().map_err(|_| LinebroadError::InvalidRow {
        path: path.to_path_buf(),
        line,
        message: format!("cannot parse '{}' as a number", field),
    })
}
