//! CLI integration tests for figsearch
//!
//! These run the binary against the grids in `tests/data` and temporary files.

use predicates::prelude::*;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Get a command instance for the figsearch binary
fn figsearch_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("figsearch"))
}

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn run_mode(mode: &str, file: &str) -> assert_cmd::assert::Assert {
    figsearch_cmd().arg(mode).arg(data(file)).assert()
}

// =============================================================================
// Search modes
// =============================================================================

#[test]
fn test_hline_first_row_wins() {
    run_mode("hline", "block.txt").success().stdout("0 0 0 1\n");
}

#[test]
fn test_hline_run_at_row_end() {
    run_mode("hline", "row.txt").success().stdout("0 2 0 4\n");
}

#[test]
fn test_vline() {
    run_mode("vline", "block.txt").success().stdout("0 0 1 0\n");
    run_mode("vline", "square.txt").success().stdout("0 1 4 1\n");
}

#[test]
fn test_square() {
    run_mode("square", "block.txt").success().stdout("0 0 1 1\n");
    run_mode("square", "square.txt").success().stdout("0 1 3 4\n");
}

#[test]
fn test_single_cell_square() {
    run_mode("square", "row.txt").success().stdout("0 0 0 0\n");
}

#[test]
fn test_not_found() {
    for mode in ["hline", "vline", "square"] {
        run_mode(mode, "zeros.txt").success().stdout("Not found\n");
    }
}

#[test]
fn test_parallel_gives_same_answer() {
    figsearch_cmd()
        .args(["square", "--parallel"])
        .arg(data("square.txt"))
        .assert()
        .success()
        .stdout("0 1 3 4\n");
}

// =============================================================================
// Test mode
// =============================================================================

#[test]
fn test_mode_prints_grid() {
    run_mode("test", "block.txt")
        .success()
        .stdout("1 1 0\n1 1 0\n0 0 0\n");
}

#[test]
fn test_inspect_alias() {
    run_mode("inspect", "row.txt").success().stdout("1 0 1 1 1\n");
}

#[test]
fn test_mode_normalizes_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("grid.txt");
    fs::write(&path, "2 3 1 0\n1\n0 1 0").unwrap();

    figsearch_cmd()
        .arg("test")
        .arg(&path)
        .assert()
        .success()
        .stdout("1 0 1\n0 1 0\n");
}

// =============================================================================
// Preview
// =============================================================================

#[test]
fn test_plain_preview() {
    figsearch_cmd()
        .args(["hline", "--preview", "--color", "never"])
        .arg(data("block.txt"))
        .assert()
        .success()
        .stdout("0 0 0 1\n1 1 0\n1 1 0\n0 0 0\n");
}

#[test]
fn test_colored_preview() {
    figsearch_cmd()
        .args(["square", "--preview", "--color", "always"])
        .arg(data("block.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0 0 1 1\n").and(predicate::str::contains("\u{1b}[")));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_invalid_files_fail() {
    run_mode("hline", "short.txt")
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("expected 4 cells, found 3"));
    run_mode("square", "non_binary.txt")
        .failure()
        .stderr(predicate::str::contains("invalid cell \"2\" at (1, 1)"));
    run_mode("test", "short.txt").failure();
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    figsearch_cmd()
        .arg("vline")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_invalid_arguments_fail() {
    figsearch_cmd().assert().failure();
    figsearch_cmd().arg("hline").assert().failure();
    figsearch_cmd()
        .arg("circle")
        .arg(data("block.txt"))
        .assert()
        .failure();
}

#[test]
fn test_help() {
    figsearch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hline").and(predicate::str::contains("square")));
}

#[test]
fn test_empty_grid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "0 0\n").unwrap();

    figsearch_cmd()
        .arg("square")
        .arg(&path)
        .assert()
        .success()
        .stdout("Not found\n");
    figsearch_cmd().arg("test").arg(&path).assert().success().stdout("");
}

#[cfg(feature = "drawing")]
#[test]
fn test_render_writes_image() {
    let dir = TempDir::new().unwrap();
    for mode in ["square", "test"] {
        let image = dir.path().join(format!("{mode}.png"));
        figsearch_cmd()
            .arg(mode)
            .arg(data("square.txt"))
            .arg("--render")
            .arg(&image)
            .assert()
            .success();
        assert!(image.exists(), "{mode} did not save {}", image.display());
    }
}
