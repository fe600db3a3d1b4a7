use std::process::{Command, Output};

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .output()
        .expect("failed to spawn benchmark binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_seq_scan_ten_twice() {
    let output = run(env!("CARGO_BIN_EXE_seq_scan"), &["10", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "sum=90\n");
}

#[test]
fn test_matmul_four() {
    let output = run(env!("CARGO_BIN_EXE_matmul"), &["4"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "checksum=6.000000\n");
}

#[test]
fn test_random_list_small() {
    // 0 + 1 + ... + 9 = 45, visited four times by default
    let output = run(env!("CARGO_BIN_EXE_random_list"), &["10"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "sum=180\n");
}

#[test]
fn test_random_list_is_deterministic() {
    let first = run(env!("CARGO_BIN_EXE_random_list"), &["5000", "12345"]);
    let second = run(env!("CARGO_BIN_EXE_random_list"), &["5000", "12345"]);
    assert!(first.status.success());
    assert_eq!(stdout(&first), stdout(&second));
}

#[test]
fn test_single_element_runs() {
    let scan = run(env!("CARGO_BIN_EXE_seq_scan"), &["1", "1"]);
    assert_eq!(stdout(&scan), "sum=0\n");

    let list = run(env!("CARGO_BIN_EXE_random_list"), &["1", "3"]);
    assert_eq!(stdout(&list), "sum=0\n");

    let matmul = run(env!("CARGO_BIN_EXE_matmul"), &["1"]);
    assert_eq!(stdout(&matmul), "checksum=0.000000\n");
}

#[test]
fn test_non_numeric_arguments_parse_as_zero() {
    let output = run(env!("CARGO_BIN_EXE_seq_scan"), &["lots", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "sum=0\n");
}

#[test]
fn test_oversized_list_reports_malloc_failure() {
    let output = run(env!("CARGO_BIN_EXE_random_list"), &["99999999999", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("malloc failed"));
}

#[test]
fn test_oversized_scan_reports_malloc_failure() {
    let output = run(env!("CARGO_BIN_EXE_seq_scan"), &["9223372036854775807", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("malloc failed"));
}

#[test]
fn test_verbose_keeps_stdout_to_one_line() {
    let output = run(env!("CARGO_BIN_EXE_matmul"), &["8", "--verbose"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "checksum=28.000000\n");
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_extra_arguments_are_ignored() {
    let output = run(env!("CARGO_BIN_EXE_seq_scan"), &["10", "2", "junk"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "sum=90\n");
}

#[test]
fn test_dash_prefixed_garbage_parses_as_zero() {
    let output = run(env!("CARGO_BIN_EXE_seq_scan"), &["-x"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "sum=0\n");

    let output = run(env!("CARGO_BIN_EXE_seq_scan"), &["-5abc", "2"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "sum=0\n");

    let output = run(env!("CARGO_BIN_EXE_matmul"), &["-q", "extra"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "checksum=0.000000\n");
}
