//! Integration tests for the collatz-path binary.
//!
//! These tests run the compiled binary end to end and verify the SVG output
//! structurally (element counts, attributes, exit codes).

use std::fs;
use std::process::{Command, Output, Stdio};

fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_collatz-path")
}

/// Run the binary with the given stdin input and extra CLI args.
fn run_binary(input: &str, extra_args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(extra_args)
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
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("Non-UTF8 output")
}

// ─── SVG output ─────────────────────────────────────────────────────────────

#[test]
fn test_range_renders_svg_to_stdout() {
    let output = run_binary("", &["--range", "1..200"]);
    let svg = stdout_of(&output);
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("<line"));
    assert!(svg.contains("stroke=\"rgb("));
}

#[test]
fn test_stdin_numbers_render_one_line_per_edge() {
    // Inserting 24 alone creates a chain of 11 nodes, so 10 edges.
    let output = run_binary("24\n", &[]);
    let svg = stdout_of(&output);
    assert_eq!(svg.matches("<line").count(), 10);
}

#[test]
fn test_canvas_size_flags() {
    let output = run_binary("24", &["--width", "800", "--height", "600"]);
    let svg = stdout_of(&output);
    assert!(svg.contains(r#"width="800" height="600""#));
}

#[test]
fn test_deterministic_output() {
    let a = stdout_of(&run_binary("", &["--range", "1..64"]));
    let b = stdout_of(&run_binary("", &["--range", "1..64"]));
    assert_eq!(a, b);
}

// ─── Files ──────────────────────────────────────────────────────────────────

#[test]
fn test_reads_from_file() {
    let dir = std::env::temp_dir().join("collatz_path_test_read");
    fs::create_dir_all(&dir).ok();
    let input_file = dir.join("numbers.txt");
    fs::write(&input_file, "7 27\n97\n").unwrap();

    let output = Command::new(binary_path())
        .arg(input_file.to_str().unwrap())
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success());
    let svg = String::from_utf8(output.stdout).unwrap();
    assert!(svg.contains("<line"));

    fs::remove_file(&input_file).ok();
    fs::remove_dir(&dir).ok();
}

#[test]
fn test_output_to_file() {
    let dir = std::env::temp_dir().join("collatz_path_test_write");
    fs::create_dir_all(&dir).ok();
    let out_file = dir.join("out.svg");

    let output = run_binary("24", &["--output", out_file.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(out_file.exists(), "Output file should exist");
    let content = fs::read_to_string(&out_file).unwrap();
    assert!(content.starts_with("<svg"));

    fs::remove_file(&out_file).ok();
    fs::remove_dir(&dir).ok();
}

#[test]
fn test_style_file_changes_output() {
    let dir = std::env::temp_dir().join("collatz_path_test_style");
    fs::create_dir_all(&dir).ok();
    let style_file = dir.join("style.json");
    fs::write(&style_file, r#"{"angle_amplifier": 0.5}"#).unwrap();

    let plain = stdout_of(&run_binary("24", &[]));
    let styled = stdout_of(&run_binary("24", &["--style", style_file.to_str().unwrap()]));
    assert_ne!(plain, styled);

    fs::remove_file(&style_file).ok();
    fs::remove_dir(&dir).ok();
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[test]
fn test_nonpositive_number_exits_with_error() {
    let output = run_binary("-5\n", &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("positive"));
}

#[test]
fn test_garbage_input_rejected() {
    let output = run_binary("12 banana", &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid integer"));
}

#[test]
fn test_backwards_range_rejected() {
    let output = run_binary("", &["--range", "9..3"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("empty range"));
}

#[test]
fn test_malformed_range_rejected() {
    let output = run_binary("", &["--range", "1-5"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("expected LO..HI"));
}
