use std::process::Command;

use tempfile::TempDir;

fn linebroad() -> Command {
    Command::new(env!("CARGO_BIN_EXE_linebroad"))
}

#[test]
fn resamples_a_simple_spectrum() {
    let temp_dir = TempDir::new().unwrap();

    let csv_content = "# energy (eV), intensity\n0,1\n1,2\n2,1\n";
    let csv_path = temp_dir.path().join("spectrum.csv");
    std::fs::write(&csv_path, csv_content).unwrap();

    let output = linebroad()
        .args(["--units", "ev"])
        .arg(&csv_path)
        .output()
        .expect("Failed to execute linebroad");

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("linebroad failed with status: {}", output.status);
    }
}

#[test]
fn broadens_and_saves_a_plot() {
    let temp_dir = TempDir::new().unwrap();

    let csv_content = "0,0.5\n10,1.0\n25,0.2\n40,2.0\n";
    let csv_path = temp_dir.path().join("spectrum.csv");
    std::fs::write(&csv_path, csv_content).unwrap();

    let plot_path = temp_dir.path().join("spectrum.html");

    let output = linebroad()
        .arg(&csv_path)
        .args(["-l", "3", "-p"])
        .arg(&plot_path)
        .output()
        .expect("Failed to execute linebroad");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(plot_path.exists(), "plot report should be created");

    let html = std::fs::read_to_string(&plot_path).unwrap();
    assert!(html.contains("plotly"));
}

#[test]
fn missing_input_file_fails_with_message() {
    let output = linebroad()
        .arg("/definitely/not/here.csv")
        .output()
        .expect("Failed to execute linebroad");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");
}

#[test]
fn doscar_input_fails_with_message() {
    let temp_dir = TempDir::new().unwrap();

    let doscar = "  2  2  1  0\n 0.8E+01 0.4E-09\n 1.0E-15\n  CAR\n unknown system\n";
    let path = temp_dir.path().join("DOSCAR");
    std::fs::write(&path, doscar).unwrap();

    let output = linebroad()
        .arg(&path)
        .output()
        .expect("Failed to execute linebroad");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not supported yet"), "stderr: {stderr}");
}

#[test]
fn inverted_x_range_is_rejected_up_front() {
    let output = linebroad()
        .args(["in.csv", "--xmin", "5", "--xmax", "1"])
        .output()
        .expect("Failed to execute linebroad");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Validation error"), "stderr: {stderr}");
}
