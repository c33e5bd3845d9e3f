use std::fs;
use std::process::Command;

use csv_toolkit::ToolError;
use csv_toolkit::count::count_rows;
use tempfile::tempdir;

#[test]
fn quoted_newlines_count_as_one_logical_row() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("multi.csv");
    fs::write(&path, "a,b\n\"multi\nline\",2\n").expect("fixture written");

    let count = count_rows(&path, b',').expect("rows counted");

    assert_eq!(count.including_header(), 2);
    assert_eq!(count.excluding_header(), 1);
}

#[test]
fn count_matches_records_plus_header() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("products.csv");
    let mut contents = String::from("sku,description\n");
    for index in 0..25 {
        contents.push_str(&format!(
            "{index},\"line one\nline two, with comma\nand \"\"quotes\"\"\"\n"
        ));
    }
    fs::write(&path, contents).expect("fixture written");

    let count = count_rows(&path, b',').expect("rows counted");

    assert_eq!(count.total, 26);
}

#[test]
fn semicolon_delimited_file() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("semi.csv");
    fs::write(&path, "a;b\n1;\"x\ny\"\n2;z\n").expect("fixture written");

    assert_eq!(count_rows(&path, b';').expect("rows counted").total, 3);
}

#[test]
fn missing_file_is_reported() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("absent.csv");

    let error = count_rows(&path, b',').expect_err("missing file");
    assert!(matches!(error, ToolError::MissingInput(_)));
}

#[test]
fn cli_prints_total_and_header_note() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("data.csv");
    fs::write(&path, "a,b\n\"multi\nline\",2\n").expect("fixture written");

    let output = Command::new(env!("CARGO_BIN_EXE_rowcount"))
        .arg(&path)
        .env_remove("CSV_FILE")
        .output()
        .expect("rowcount runs");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("UTF-8 output");
    assert!(stdout.contains(&format!("CSV file: {}", path.display())));
    assert!(stdout.contains("Total rows: 2"));
    assert!(stdout.contains("including header row if present"));
}

#[test]
fn cli_reads_path_from_environment() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("env.csv");
    fs::write(&path, "a\n1\n2\n").expect("fixture written");

    let output = Command::new(env!("CARGO_BIN_EXE_rowcount"))
        .env("CSV_FILE", &path)
        .arg("--exclude-header")
        .output()
        .expect("rowcount runs");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("UTF-8 output");
    assert!(stdout.contains("Data rows: 2"));
}

#[test]
fn cli_without_file_is_a_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_rowcount"))
        .env_remove("CSV_FILE")
        .output()
        .expect("rowcount runs");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("UTF-8 output");
    assert!(stderr.contains("no CSV file specified"));
    assert!(stderr.contains("CSV_FILE"));
}

#[test]
fn cli_missing_file_exits_with_one() {
    let temp_dir = tempdir().expect("temporary directory");
    let output = Command::new(env!("CARGO_BIN_EXE_rowcount"))
        .arg(temp_dir.path().join("absent.csv"))
        .output()
        .expect("rowcount runs");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("UTF-8 output");
    assert!(stderr.contains("does not exist"));
}

#[test]
fn cli_counts_trailing_blank_lines() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("blank.csv");
    fs::write(&path, "a\n\n\n").expect("fixture written");

    let output = Command::new(env!("CARGO_BIN_EXE_rowcount"))
        .arg(&path)
        .output()
        .expect("rowcount runs");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("UTF-8 output");
    assert!(stdout.contains("Total rows: 3"));
}

#[test]
fn cli_parse_errors_exit_with_one_and_help_with_zero() {
    let rejected = Command::new(env!("CARGO_BIN_EXE_rowcount"))
        .arg("--no-such-flag")
        .output()
        .expect("rowcount runs");
    assert_eq!(rejected.status.code(), Some(1));
    let stderr = String::from_utf8(rejected.stderr).expect("UTF-8 output");
    assert!(stderr.contains("--no-such-flag"));

    let help = Command::new(env!("CARGO_BIN_EXE_rowcount"))
        .arg("--help")
        .output()
        .expect("rowcount runs");
    assert_eq!(help.status.code(), Some(0));
    let stdout = String::from_utf8(help.stdout).expect("UTF-8 output");
    assert!(stdout.contains("--exclude-header"));
}
