//! End-to-end tests running the `extract-issues` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn extract_issues_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_extract-issues"))
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("scraper")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Temp dir holding the issue snapshot under the default input name.
fn workdir_with_snapshot() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    fs::copy(
        fixture("issues-snapshot.txt"),
        dir.path().join("full_content.txt"),
    )
    .expect("failed to copy fixture");
    dir
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(extract_issues_bin())
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run extract-issues")
}

#[test]
fn test_no_arguments_prints_table_from_default_file() {
    let dir = workdir_with_snapshot();
    let output = run_in(dir.path(), &[]);

    assert!(
        output.status.success(),
        "extract-issues failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let expected = fs::read_to_string(fixture("issues-snapshot.expected.txt")).unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
    // Row 103 is too short and is dropped without a word.
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_short_row_only_snapshot_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("full_content.txt"),
        concat!(
            "        - rowgroup [ref=e108]:\n",
            "          - row \"9 Stub\" [ref=e1]:\n",
            "            - cell \"9\" [ref=e2]\n",
        ),
    )
    .unwrap();
    let output = run_in(dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 2);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = workdir_with_snapshot();
    let first = run_in(dir.path(), &[]);
    let second = run_in(dir.path(), &[]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_missing_input_fails_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: failed to read snapshot"), "stderr: {stderr}");
    assert!(stderr.contains("full_content.txt"), "stderr: {stderr}");
}

#[test]
fn test_snapshot_without_rowgroup_prints_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture("no-rowgroup.txt");
    let output = run_in(dir.path(), &["--input", input.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ID    | Subject"));
    assert_eq!(lines[1], "-".repeat(155));
}

#[test]
fn test_json_format() {
    let dir = workdir_with_snapshot();
    let output = run_in(dir.path(), &["--format", "json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("Invalid JSON output: {e}\n{stdout}"));
    let rows = parsed.as_array().expect("rows array");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["id"], "101");
    assert_eq!(rows[1]["due_date_iso"], "2024-12-31");
    let subject = "Update docs with a very long subject line \
                   that definitely exceeds the sixty character column";
    assert_eq!(rows[2]["subject"], subject);
}

#[test]
fn test_markdown_format() {
    let dir = workdir_with_snapshot();
    let output = run_in(dir.path(), &["--format", "markdown"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("| ID | Subject |"));
    assert!(stdout.contains("| 102 | Refactor: parser module | Core |"));
}

#[test]
fn test_output_file_and_report_summary() {
    let dir = workdir_with_snapshot();
    let output = run_in(
        dir.path(),
        &["--output", "issues.txt", "--report-out", "summary.json"],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());

    let expected = fs::read_to_string(fixture("issues-snapshot.expected.txt")).unwrap();
    assert_eq!(fs::read_to_string(dir.path().join("issues.txt")).unwrap(), expected);

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json")).unwrap())
            .unwrap();
    assert_eq!(summary["records_found"], 4);
    assert_eq!(summary["rows_rendered"], 3);
    assert_eq!(summary["dropped"][0]["iid"], "103");
}

#[test]
fn test_config_file_changes_marker() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("scrape.yml"),
        "rowgroup_marker: \"rowgroup [ref=e101]\"\n",
    )
    .unwrap();
    let input = fixture("no-rowgroup.txt");
    let output = run_in(
        dir.path(),
        &["--config", "scrape.yml", "--input", input.to_str().unwrap()],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().nth(2).unwrap().starts_with("17    | Looks like an issue"));
}

#[test]
fn test_invalid_min_cells_fails() {
    let dir = workdir_with_snapshot();
    let output = run_in(dir.path(), &["--min-cells", "2"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"), "stderr: {stderr}");
}

#[test]
fn test_dropped_rows_logged_only_at_debug() {
    let dir = workdir_with_snapshot();
    let output = run_in(dir.path(), &["-vv"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Dropped 1 rows with fewer than 8 cells"), "stderr: {stderr}");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Dropped"));
}

#[test]
fn test_missing_marker_warns_without_color_codes() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixture("no-rowgroup.txt");
    let output = run_in(dir.path(), &["--input", input.to_str().unwrap()]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARN"), "stderr: {stderr}");
    assert!(stderr.contains("not found"), "stderr: {stderr}");
    assert!(!stderr.contains('\u{1b}'), "stderr has ANSI escapes: {stderr:?}");
}
