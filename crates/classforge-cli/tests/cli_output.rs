//! End-to-end tests that spawn the classforge binary

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_cli(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_classforge"))
        .args(args)
        .env("CLASSFORGE_LOG_LEVEL", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn classforge");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_run_prints_code_from_stdin() {
    let output = run_cli(&["run"], "class Car\nmethod Car drive None\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("class Car:\n"));
    assert!(stdout.contains("    def drive(self) -> None:\n"));
}

#[test]
fn test_run_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("model.cfs");
    let code = dir.path().join("model.py");
    let dot = dir.path().join("model.dot");
    std::fs::write(&script, "class Dog\ninherit Dog Animal\n").unwrap();

    let output = run_cli(
        &[
            "run",
            "-i",
            script.to_str().unwrap(),
            "--code",
            code.to_str().unwrap(),
            "--diagram",
            dot.to_str().unwrap(),
        ],
        "",
    );

    assert!(output.status.success());
    assert!(std::fs::read_to_string(&code)
        .unwrap()
        .starts_with("class Dog(Animal):"));
    assert!(std::fs::read_to_string(&dot)
        .unwrap()
        .contains("\"Animal\" -> \"Dog\" [arrowtail=empty dir=back]"));
}

#[test]
fn test_run_fails_on_bad_script() {
    let output = run_cli(&["run"], "class A\nattribute Missing x int\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Line 2"));
}

#[test]
fn test_strict_flag() {
    let output = run_cli(&["--strict", "run"], "class A\ncompose A B\n");
    assert!(!output.status.success());

    let output = run_cli(&["run"], "class A\ncompose A B\n");
    assert!(output.status.success());
}

#[test]
fn test_interactive_session() {
    let dir = tempfile::tempdir().unwrap();
    let dot = dir.path().join("UMLDiagram.dot");
    let code = dir.path().join("output.py");
    let input = format!(
        "1\nVehicle\n2\n1\nspeed\nint\n6\n1\nDriver\n7\n8\n{}\n",
        code.display()
    );

    let output = run_cli(
        &[
            "interactive",
            "--diagram",
            dot.to_str().unwrap(),
            "--style",
            "ascii",
        ],
        &input,
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("8. Finish and generate code"));
    assert!(stdout.contains("1. Vehicle"));
    assert!(stdout.contains("Vehicle --* Driver"));

    let generated = std::fs::read_to_string(&code).unwrap();
    assert!(generated.contains("driver = None"));
    assert!(std::fs::read_to_string(&dot)
        .unwrap()
        .contains("[arrowhead=diamond]"));
}
