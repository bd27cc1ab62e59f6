//! Integration tests for the shortest-route binary.
//!
//! These tests run the compiled binary with edge text piped on stdin and
//! check stdout, stderr, and the exit status.

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const SAMPLE: &str = "\
# sample road network
A B 5
B C 3
C D 2
A D 12
";

/// Get the path to the compiled binary (debug build, built by `cargo test`).
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("shortest-route");
    path
}

/// Run the binary with the given stdin input and CLI args.
fn run_binary(input: &str, args: &[&str]) -> Output {
    let bin = binary_path();
    assert!(
        bin.exists(),
        "Binary not found at {:?}. Run `cargo build` first.",
        bin
    );

    Command::new(&bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("Non-UTF8 stdout")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("Non-UTF8 stderr")
}

// ─── Route queries ───────────────────────────────────────────────────────────

#[test]
fn test_route_over_sample_network() {
    let out = run_binary(SAMPLE, &["-s", "A", "-t", "D"]);
    assert!(out.status.success(), "stderr: {}", stderr_of(&out));
    assert_eq!(stdout_of(&out), "path: A -> B -> C -> D\ndistance: 10\n");
}

#[test]
fn test_route_with_default_weights() {
    let out = run_binary("A B\nB C\n", &["-s", "A", "-t", "C"]);
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "path: A -> B -> C\ndistance: 2\n");
}

#[test]
fn test_directed_dead_end_reports_no_path() {
    let out = run_binary("A B 5\n", &["--directed", "-s", "B", "-t", "A"]);
    // no path is a normal outcome, not an error
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "no path from B to A\n");
}

#[test]
fn test_distance_table() {
    let out = run_binary(
        "A B 5\nB C 3\nD E 1\n",
        &["--directed", "-s", "A", "-t", "C", "--distances"],
    );
    assert!(out.status.success());
    let stdout = stdout_of(&out);
    assert!(stdout.contains("distance: 8\n"));
    assert!(stdout.contains("  B 5\n"));
    assert!(stdout.contains("  D unreachable\n"));
}

// ─── Node listing ────────────────────────────────────────────────────────────

#[test]
fn test_nodes_listing_sorted() {
    let out = run_binary(SAMPLE, &["--nodes"]);
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "A\nB\nC\nD\n");
}

#[test]
fn test_nodes_listing_ignores_bad_weights() {
    let out = run_binary("B A wat\n", &["--nodes"]);
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "A\nB\n");
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn test_malformed_line_fails() {
    let out = run_binary("A B 5\nC\n", &["-s", "A", "-t", "B"]);
    assert!(!out.status.success());
    let stderr = stderr_of(&out);
    assert!(stderr.contains("invalid edge line"), "stderr: {stderr}");
    assert!(stderr.contains(": C"), "stderr: {stderr}");
}

#[test]
fn test_negative_weight_fails() {
    let out = run_binary("A B -3\n", &["-s", "A", "-t", "B"]);
    assert!(!out.status.success());
    assert!(stderr_of(&out).contains("invalid weight"));
}

#[test]
fn test_unknown_source_fails() {
    let out = run_binary(SAMPLE, &["-s", "Z", "-t", "A"]);
    assert!(!out.status.success());
    assert!(stderr_of(&out).contains("'Z' is not in the graph"));
}

#[test]
fn test_missing_endpoint_flags_fail() {
    let out = run_binary(SAMPLE, &["-s", "A"]);
    assert!(!out.status.success());
    assert!(stderr_of(&out).contains("--target"));
}
