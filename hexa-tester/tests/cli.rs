use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "hexa-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_jobs_writes_output() {
    let exe = env!("CARGO_BIN_EXE_hexa-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-jobs", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Supported jobs"));
    assert!(content.contains("Hayato"));
}

#[test]
fn cli_canned_audit_passes_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_hexa-tester");
    let output_path = temp_path("canned");
    let status = Command::new(exe)
        .args(["--report", "json", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}

#[test]
fn cli_strict_mode_fails_incomplete_sequences() {
    let exe = env!("CARGO_BIN_EXE_hexa-tester");
    let output = Command::new(exe)
        .args(["--jobs", "Hero", "--strict", "--report", "markdown"])
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("### ❌ Hero (canned)"));
}

#[test]
fn cli_import_job_mismatch_exits_nonzero() {
    let exe = env!("CARGO_BIN_EXE_hexa-tester");
    let input = temp_path("import.json");
    std::fs::write(&input, r#"{"job":"Bishop","sequence":[]}"#).expect("write input");
    let output = Command::new(exe)
        .args(["--job", "Hero", "--report", "json", "--import"])
        .arg(&input)
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("job mismatch"));
}

#[test]
fn cli_import_requires_job() {
    let exe = env!("CARGO_BIN_EXE_hexa-tester");
    let output = Command::new(exe)
        .args(["--import", "whatever.json"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
}

#[test]
fn cli_job_requires_import() {
    let exe = env!("CARGO_BIN_EXE_hexa-tester");
    let output = Command::new(exe)
        .args(["--job", "Hero"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--import"));
}
