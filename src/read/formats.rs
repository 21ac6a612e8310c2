use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Determine whether a file is a VASP DOSCAR.
///
/// A DOSCAR carries the literal marker `CAR` on its fourth line; everything
/// else in the header varies between calculations, so that line is the only
/// reliable fingerprint.
pub fn is_doscar(path: &Path) -> io::Result<bool> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    match reader.lines().nth(3) {
        Some(line) => Ok(line?.trim() == "CAR"),
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn detects_doscar_header() {
        let f = write_file("  2  2  1  0\n 0.8E+01 0.4E-09\n 1.0E-15\n  CAR\n unknown system\n");
        assert!(is_doscar(f.path()).unwrap());
    }

    #[test]
    fn plain_csv_is_not_doscar() {
        let f = write_file("0,1\n1,2\n2,1\n3,0\n4,0\n");
        assert!(!is_doscar(f.path()).unwrap());
    }

    #[test]
    fn short_file_is_not_doscar() {
        let f = write_file("0,1\n1,2\n");
        assert!(!is_doscar(f.path()).unwrap());
    }
}
