use std::process::Command;

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_resource-images"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_cli_resolves_a_url() {
    let output = Command::new(env!("CARGO_BIN_EXE_resource-images"))
        .args(["--category", "room", "--size", "thumb"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("https://images.unsplash.com/"));
    assert!(stdout.contains("w=400&h=250"));
}

#[test]
fn test_cli_validate_accepts_builtin_tables() {
    let output = Command::new(env!("CARGO_BIN_EXE_resource-images"))
        .arg("--validate")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
}
