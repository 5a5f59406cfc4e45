//! Tests that drive the `shellstack` binary.

use std::process::Command;

use shellstack::{read_stack, UVec3};

fn shellstack() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shellstack"))
}

#[test]
fn test_cli_writes_named_stack() {
    let dir = tempfile::tempdir().expect("tempdir");
    let status = shellstack()
        .args(["-sx", "12", "-sy", "10", "-sz", "6", "-t", "2", "-nf"])
        .arg("--output_dir")
        .arg(dir.path())
        .status()
        .expect("failed to run shellstack");
    assert!(status.success());

    let path = dir
        .path()
        .join("sphere64cone96cone128cylinder160_w12h10d6th2.tif");
    let volume = read_stack(&path).expect("stack not readable");
    assert_eq!(volume.dims(), UVec3::new(12, 10, 6));
}

#[test]
fn test_cli_print_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = shellstack()
        .args(["--width", "4", "--height", "4", "--depth", "2", "--print_config"])
        .arg("--output_dir")
        .arg(dir.path())
        .output()
        .expect("failed to run shellstack");
    assert!(output.status.success());

    let config: shellstack::ShapeConfig =
        serde_json::from_slice(&output.stdout).expect("stdout is not a config");
    assert_eq!(config.dims(), UVec3::new(4, 4, 2));
}

#[test]
fn test_cli_rejects_bad_value() {
    let output = shellstack()
        .args(["--thickness", "thin"])
        .output()
        .expect("failed to run shellstack");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("thickness"));
}

#[test]
fn test_cli_reports_write_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = shellstack()
        .args(["-sx", "4", "-sy", "4", "-sz", "1"])
        .arg("--output_dir")
        .arg(dir.path().join("missing"))
        .output()
        .expect("failed to run shellstack");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}
