//! Runs the `meshprim-smoke` binary the way an installation check would

use std::process::Command;

fn run_smoke() -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_meshprim-smoke"))
        .output()
        .expect("Failed to run meshprim-smoke")
}

#[test]
fn test_smoke_binary_reports_success() {
    let output = run_smoke();

    assert!(
        output.status.success(),
        "Expected success exit status, got {:?}",
        output.status
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.lines().any(|line| line.contains("Success")),
        "Expected a line containing 'Success' on stdout, got {:?}",
        stdout
    );
}

#[test]
fn test_smoke_binary_is_repeatable() {
    let first = run_smoke();
    let second = run_smoke();

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
}
