//! Integration tests for `netform show`
//!
//! - Prints exactly the bytes most recently written
//! - Missing file is an error

mod common;

use common::{stderr, stdout, TestEnv};

#[test]
fn test_show_prints_latest_write_verbatim() {
    let env = TestEnv::new();

    let first = env.run(&["--no-apply", "apply", "--interface", "eth0", "--dhcp"]);
    assert!(first.status.success(), "stderr: {}", stderr(&first));
    let second = env.run(&[
        "--no-apply",
        "apply",
        "--interface",
        "eth0",
        "--address",
        "192.168.10.2/24",
        "--gateway",
        "192.168.10.1",
    ]);
    assert!(second.status.success(), "stderr: {}", stderr(&second));

    let output = env.run(&["show"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), env.read_netplan());
    assert!(stdout(&output).contains("192.168.10.2/24"));
}

#[test]
fn test_show_hand_written_file_unchanged() {
    let env = TestEnv::new();
    let content = "# managed by hand\nnetwork:\n  version: 2\n  renderer: networkd\n";
    env.write_netplan(content);

    let output = env.run(&["show"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), content);
}

#[test]
fn test_show_missing_file_fails() {
    let env = TestEnv::new();

    let output = env.run(&["show"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to read file"));
}

#[test]
fn test_show_json() {
    let env = TestEnv::new();
    env.write_netplan("network:\n  version: 2\n");

    let output = env.run(&["--json", "show"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["content"], "network:\n  version: 2\n");
}
