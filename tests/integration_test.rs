// Integration tests for the scicalc binary
// Drive the built executable end to end: arguments, flags, stdin REPL and
// exit codes.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run scicalc with arguments and return (stdout, stderr, exit_code)
fn run_scicalc(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_scicalc"))
        .args(args)
        .env_remove("SCICALC_ANGLE")
        .output()
        .expect("Failed to execute scicalc");

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Feed lines to the REPL on stdin
fn run_repl(input: &str) -> (String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_scicalc"))
        .env_remove("SCICALC_ANGLE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn scicalc");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for scicalc");
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (stdout, output.status.code().unwrap_or(-1))
}

/// Test helper: assert a single expression succeeds with exact output
fn assert_success(expr: &str, expected_stdout: &str) {
    let (stdout, stderr, exit_code) = run_scicalc(&[expr]);

    assert_eq!(
        exit_code, 0,
        "\n❌ {} failed\nStdout: {}\nStderr: {}",
        expr, stdout, stderr
    );
    assert_eq!(
        stdout, expected_stdout,
        "\n❌ Output mismatch for {}\nExpected: {}\nGot: {}",
        expr, expected_stdout, stdout
    );
}

/// Test helper: assert a single expression fails with the given exit code
fn assert_failure(expr: &str, expected_exit_code: i32) {
    let (stdout, stderr, exit_code) = run_scicalc(&[expr]);

    assert_eq!(
        exit_code, expected_exit_code,
        "\n❌ Exit code mismatch for {}\nStdout: {}\nStderr: {}",
        expr, stdout, stderr
    );
    assert_eq!(stdout, "Error");
}

// ==================== EVALUATION ====================

#[test]
fn test_arithmetic() {
    assert_success("2+3×4", "14");
}

#[test]
fn test_ascii_operators() {
    assert_success("(2+3)*4/5", "4");
}

#[test]
fn test_empty_expression() {
    assert_success("", "0");
}

#[test]
fn test_degrees_by_default() {
    assert_success("sin(30)", "0.5");
}

#[test]
fn test_radians_flag() {
    let (stdout, _, exit_code) = run_scicalc(&["--angle", "rad", "sin(pi/2)"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "1");
}

#[test]
fn test_invalid_angle_rejected() {
    let (_, stderr, exit_code) = run_scicalc(&["--angle", "grad", "1"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("grad"));
}

#[test]
fn test_factorial_and_percent() {
    assert_success("5!+50%", "120.5");
}

#[test]
fn test_fraction_display() {
    assert_success("1÷3", "0.333333333333333");
}

#[test]
fn test_multiple_expressions() {
    let (stdout, _, exit_code) = run_scicalc(&["1+1", "2^10", "sqrt(2)^2"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "2\n1024\n2");
}

// ==================== FAILURES ====================

#[test]
fn test_disallowed_input() {
    assert_failure("alert(1)", 101);
    assert_failure("1;2", 101);
}

#[test]
fn test_syntax_error() {
    assert_failure("(1+2", 102);
}

#[test]
fn test_domain_error() {
    assert_failure("sqrt(-1)", 103);
}

#[test]
fn test_singularity() {
    assert_failure("1÷0", 104);
    assert_failure("171!", 104);
}

#[test]
fn test_deep_input_is_a_syntax_error() {
    let signs = format!("{}1", "-".repeat(100_000));
    assert_failure(&signs, 102);

    let parens = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
    assert_failure(&parens, 102);
}

#[test]
fn test_last_failure_sets_exit_code() {
    let (stdout, _, exit_code) = run_scicalc(&["1/0", "1+", "7"]);
    assert_eq!(stdout, "Error\nError\n7");
    assert_eq!(exit_code, 102);
}

#[test]
fn test_explain_reports_on_stderr() {
    let (stdout, stderr, exit_code) = run_scicalc(&["--explain", "tau+1"]);
    assert_eq!(stdout, "Error");
    assert_eq!(exit_code, 101);
    assert!(stderr.contains("E101"), "stderr: {}", stderr);
}

// ==================== DUMPS ====================

#[test]
fn test_ast_dump() {
    let (stdout, _, exit_code) = run_scicalc(&["--ast", "2+3*4"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "(2 + (3 * 4))");
}

#[test]
fn test_ast_dump_explains_parse_errors() {
    let (stdout, stderr, exit_code) = run_scicalc(&["--ast", "--explain", "(1+"]);
    assert!(stdout.is_empty());
    assert_eq!(exit_code, 102);
    assert!(stderr.contains("E001"), "stderr: {}", stderr);
}

#[test]
fn test_tokens_dump() {
    let (stdout, _, exit_code) = run_scicalc(&["--tokens", "2×pi"]);
    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Number(\"2\")"));
    assert!(lines[1].starts_with("Star"));
    assert!(lines[2].starts_with("Identifier(\"pi\")"));
}

// ==================== REPL ====================

#[test]
fn test_repl_session() {
    let (stdout, exit_code) = run_repl("6×7\n:ans\n:rad\ncos(pi)\n:history\n:quit\n1+1\n");
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "42\n42\nrad\n-1\n6×7 = 42\ncos(pi) = -1");
}

#[test]
fn test_repl_failure_exit_code() {
    let (stdout, exit_code) = run_repl("ln(0)\n2\n");
    assert_eq!(stdout, "Error\n2");
    assert_eq!(exit_code, 104);
}
