//! Runs the `enigma` binary against files on disk.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::process::Command;

use enigma_test_helpers::NAVAL_CONF;

fn enigma() -> Command {
    Command::new(env!("CARGO_BIN_EXE_enigma"))
}

#[test]
fn files_in_and_out() {
    let dir = tempfile::tempdir().expect("should create tempdir");
    let config = dir.path().join("naval.conf");
    let input = dir.path().join("message.in");
    let output = dir.path().join("message.out");
    fs::write(&config, NAVAL_CONF).unwrap();
    fs::write(
        &input,
        "* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)\nFROM his shoulder Hiawatha\n",
    )
    .unwrap();

    let status = enigma()
        .arg(&config)
        .arg(&input)
        .arg(&output)
        .env_remove("RUST_LOG")
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "QVPQS OKOIL PUBKJ ZPISF XDW\n"
    );
}

#[test]
fn missing_config_fails() {
    let dir = tempfile::tempdir().expect("should create tempdir");
    let out = enigma()
        .arg(dir.path().join("absent.conf"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("absent.conf"), "{stderr}");
}
