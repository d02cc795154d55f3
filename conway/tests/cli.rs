use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_cli(args: &[&str], stdin: &str) -> Output {
    run_cli_bytes(args, stdin.as_bytes())
}

fn run_cli_bytes(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_conway"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn conway");
    // The process may exit before reading stdin when arguments are rejected
    let _ = child.stdin.take().unwrap().write_all(stdin);
    child.wait_with_output().unwrap()
}

#[test]
fn prints_final_generation() {
    let out = run_cli(&[], "3 3 1\n...\nXXX\n...\n");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), ".X.\n.X.\n.X.\n");
    assert!(out.stderr.is_empty());
}

#[test]
fn reads_input_file() {
    let path = std::env::temp_dir().join(format!("conway-cli-{}.txt", std::process::id()));
    std::fs::write(&path, "2 2 3\nXX\nXX\n").unwrap();
    let out = run_cli(&[path.to_str().unwrap()], "");
    std::fs::remove_file(&path).ok();
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "XX\nXX\n");
}

#[test]
fn failure_writes_nothing_to_stdout() {
    let out = run_cli(&[], "3 3 1\n...\nXX");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("input error"));

    let out = run_cli(&[], "3 3 -1\n...\n...\n...\n");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn rejects_identical_symbols() {
    let out = run_cli(&["--alive", "o", "--dead", "o"], "1 1 0\no\n");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn non_utf8_cell_is_dead() {
    let out = run_cli_bytes(&[], b"1 2 0\nX\xff\n");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "X.\n");
}

#[test]
fn oversized_zero_width_board_is_rejected() {
    let out = run_cli(&[], "9223372036854775807 0 0\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid grid dimensions"));
}
