use std::fs;
use std::path::Path;
use std::process::Command;

fn cargo_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_weekly-planner-pdf"))
}

fn output_dir() -> &'static Path {
    Path::new("tests/output")
}

fn setup() {
    fs::create_dir_all(output_dir()).expect("Failed to create output directory");
}

fn cleanup_file(name: &str) {
    let path = output_dir().join(name);
    if path.exists() {
        fs::remove_file(&path).ok();
    }
}

#[test]
fn test_basic_january_planner() {
    setup();
    let output_file = "test-january.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-y", "2025",
            "--start-month", "1",
            "--end-month", "1",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Weeks: 5"), "unexpected output: {}", stdout);
    assert!(stdout.contains("Pages: 15"), "unexpected output: {}", stdout);

    let path = output_dir().join(output_file);
    assert!(path.exists(), "PDF file was not created");

    let metadata = fs::metadata(&path).expect("Failed to get file metadata");
    assert!(metadata.len() > 1000, "PDF file is too small, likely empty or corrupt");
}

#[test]
fn test_a3_german_twelve_hour_without_grid() {
    setup();
    let output_file = "test-a3-de.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-y", "2025",
            "--start-month", "3",
            "--end-month", "4",
            "-p", "a3",
            "-l", "de",
            "--hour-format", "12",
            "-i", "30",
            "--no-grid",
            "--no-header",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let path = output_dir().join(output_file);
    assert!(path.exists(), "PDF file was not created");

    let metadata = fs::metadata(&path).expect("Failed to get file metadata");
    assert!(metadata.len() > 1000, "PDF file is too small");
}

#[test]
fn test_wrapping_week_with_dense_slots() {
    setup();
    let output_file = "test-wrapping-week.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-y", "2025",
            "--start-month", "2",
            "--end-month", "2",
            "--week-start", "5",
            "--week-end", "1",
            "--start-hour", "0",
            "--end-hour", "23",
            "-i", "10",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(4 per week)"), "unexpected output: {}", stdout);

    let path = output_dir().join(output_file);
    assert!(path.exists(), "PDF file was not created");
}

#[test]
fn test_config_file_with_flag_override() {
    setup();
    let config_file = output_dir().join("test-config.json");
    fs::write(
        &config_file,
        r#"{ "year": 2025, "startMonth": 6, "endMonth": 6, "language": "fr", "weekStartDay": 0, "weekEndDay": 6 }"#,
    )
    .expect("Failed to write config file");

    let output_file = "test-config-ops.json";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-c", "tests/output/test-config.json",
            "--end-month", "7",
            "--format", "ops",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(7 per week)"), "unexpected output: {}", stdout);

    let json = fs::read_to_string(output_dir().join(output_file)).expect("ops file missing");
    assert!(json.contains("Planification Hebdomadaire"));
    assert!(json.contains("Juillet 2025"));
    assert!(json.contains("\"op\": \"new_page\""));
}

#[test]
fn test_dry_run_writes_nothing() {
    setup();
    let output_file = "test-dry-run.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-y", "2025",
            "--dry-run",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Weeks: 53"), "unexpected output: {}", stdout);
    assert!(stdout.contains("Pages: 159"), "unexpected output: {}", stdout);
    assert!(!output_dir().join(output_file).exists());
}

#[test]
fn test_reversed_months_rejected() {
    let output = cargo_bin()
        .args([
            "-y", "2025",
            "--start-month", "6",
            "--end-month", "2",
            "-o", "tests/output/should-not-exist.pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for reversed months");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("endMonth"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_invalid_interval_rejected() {
    let output = cargo_bin()
        .args(["-y", "2025", "-i", "25", "--dry-run"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for invalid interval");
}

#[test]
fn test_invalid_config_file() {
    let output = cargo_bin()
        .args([
            "-c", "nonexistent.json",
            "-o", "tests/output/should-not-exist.pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for missing config");
}

#[test]
fn test_unwritable_output_path_fails() {
    setup();
    let output = cargo_bin()
        .args([
            "-y", "2025",
            "--start-month", "1",
            "--end-month", "1",
            "-o", "tests/output/missing-dir/x.pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for missing directory");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "unexpected stderr: {}", stderr);
    assert!(!output_dir().join("missing-dir").exists());
}
