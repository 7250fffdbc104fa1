//! End-to-end tests for the debug-practice binary
//!
//! These tests run the built binary with an isolated configuration
//! directory and check its transcript and exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Test context with an isolated config home
struct TestContext {
    /// Temporary directory for this test, removed on drop
    temp_dir: TempDir,
    /// Path to the debug-practice binary
    bin: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_debug-practice")),
        }
    }

    /// Write a config file and return its path
    fn write_config(&self, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join("config.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    fn config_home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Run the binary
    fn run(&self, args: &[&str]) -> RunOutput {
        let output = Command::new(&self.bin)
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run debug-practice");

        RunOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }

    /// Run expecting success
    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.success,
            "debug-practice {:?} failed:\nstdout: {}\nstderr: {}",
            args, output.stdout, output.stderr
        );
        output.stdout
    }
}

/// Output from a run
#[derive(Debug)]
struct RunOutput {
    stdout: String,
    stderr: String,
    success: bool,
    code: Option<i32>,
}

#[test]
fn test_plain_run_prints_all_active_scenarios() {
    let ctx = TestContext::new();
    let stdout = ctx.run_ok(&[]);

    for n in 1..=5 {
        assert!(
            stdout.contains(&format!("=== Scenario {n}:")),
            "missing scenario {n} in:\n{stdout}"
        );
    }
    assert!(!stdout.contains("Scenario 6"));
    assert!(stdout.contains("Numbers: [5, 12, 8, 23, 15, 7]"));
    assert!(stdout.contains("Average: 11.666666666666666"));
    assert!(stdout.contains("Maximum: 23"));
    assert!(stdout.contains("Bob Jones: 17 years old (Minor)"));
    assert!(stdout.contains("First 8 Fibonacci numbers: [0, 1, 1, 2, 3, 5, 8, 13]"));
    assert!(stdout.contains("Student 3: Score=78, Grade=C"));
    assert!(stdout.trim_end().ends_with("=== All scenarios completed! ==="));
}

#[test]
fn test_seeded_runs_are_identical() {
    let ctx = TestContext::new();
    let first = ctx.run_ok(&["--seed", "1234"]);
    let second = ctx.run_ok(&["--seed", "1234"]);
    assert_eq!(first, second);
}

#[test]
fn test_exception_scenario_exits_non_zero() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--with-exception"]);

    assert!(!output.success);
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("=== Scenario 6: Exception Handling ==="));
    assert!(!output.stdout.contains("All scenarios completed!"));
    assert!(output.stderr.contains("division by zero"));
}

#[test]
fn test_only_runs_requested_scenarios() {
    let ctx = TestContext::new();
    let stdout = ctx.run_ok(&["--only", "4"]);
    assert_eq!(
        stdout,
        "=== Scenario 4: Fibonacci Sequence ===\n\
         First 8 Fibonacci numbers: [0, 1, 1, 2, 3, 5, 8, 13]\n\
         \n\
         === All scenarios completed! ===\n"
    );
}

#[test]
fn test_unknown_scenario_is_rejected() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--only", "9"]);
    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("Unknown scenario 9"));
}

#[test]
fn test_config_file_controls_draws() {
    let ctx = TestContext::new();
    let config = ctx.write_config("[random]\nmin = 50\nmax = 50\n");
    let stdout = ctx.run_ok(&["--only", "1", "--config", config.to_str().unwrap()]);
    assert!(stdout.contains("x=50, y=50, z=100"));
}

#[test]
fn test_config_file_enables_exception() {
    let ctx = TestContext::new();
    let config = ctx.write_config("[driver]\nenable_exception = true\n");
    let output = ctx.run(&["--config", config.to_str().unwrap()]);
    assert_eq!(output.code, Some(1));
}

#[test]
fn test_invalid_config_reported() {
    let ctx = TestContext::new();
    let config = ctx.write_config("[random]\nmin = 9\nmax = 1\n");
    let output = ctx.run(&["--config", config.to_str().unwrap()]);
    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("Configuration error"));
}

#[test]
fn test_list_subcommand() {
    let ctx = TestContext::new();
    let stdout = ctx.run_ok(&["list"]);
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.contains("Basic Variables"));
    assert!(stdout.contains("Exception Handling (disabled by default"));
}

#[test]
fn test_config_subcommand_shows_defaults() {
    let ctx = TestContext::new();
    let config = ctx.write_config("[driver]\nseed = 5\n");
    let stdout = ctx.run_ok(&["config", "--path", config.to_str().unwrap()]);
    assert!(stdout.contains("seed: 5"));
    assert!(stdout.contains("enable_exception: false"));
    assert!(stdout.contains("draw range: 1..=100"));
}
