//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Path to the paleta binary (set by cargo at compile time)
pub fn paleta_bin() -> &'static str {
    env!("CARGO_BIN_EXE_paleta")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share saved palettes and
/// configuration between them.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(paleta_bin());
    cmd.env("PALETA_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command in an isolated config directory.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Runs a command with `input` piped to stdin.
pub fn run_with_stdin(args: &[&str], config_dir: &Path, input: &str) -> Output {
    let mut child = isolated_command(args, config_dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for command")
}

/// Standard output as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Standard error as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Asserts a zero exit status, showing stderr on failure.
pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        stderr(output)
    );
}

/// Writes `content` to `name` inside `dir` and returns its path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// A five-color palette as an import document.
pub const FIVE_COLORS_JSON: &str =
    r##"["#1A1A2E", "#16213E", "#0F3460", "#E94560", "#FFFFFF"]"##;

/// The same palette as a `--colors` list.
pub const FIVE_COLORS_LIST: &str = "#1A1A2E,#16213E,#0F3460,#E94560,#FFFFFF";
