//! Loading machine descriptions from disk.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use enigma_config::{load_machine, ConfigError, Setting};
use enigma_test_helpers::{NAVAL_CONF, NAVAL_ROTORS};
use tempfile::TempDir;

fn scratch() -> TempDir {
    tempfile::Builder::new()
        .prefix("enigma_config_")
        .tempdir()
        .expect("should create tempdir")
}

fn write(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).expect("should write description");
    path
}

/// The naval rotor set rendered as TOML.
fn naval_toml() -> String {
    let mut text = String::from("alphabet = \"A-Z\"\nslots = 5\npawls = 3\n");
    for (name, mobility, cycles) in NAVAL_ROTORS {
        let (kind, notches) = match mobility.split_at(1) {
            ("M", notches) => ("moving", notches),
            ("N", _) => ("fixed", ""),
            _ => ("reflector", ""),
        };
        text.push_str(&format!(
            "\n[[rotors]]\nname = \"{name}\"\nkind = \"{kind}\"\nnotches = \"{notches}\"\ncycles = \"{cycles}\"\n"
        ));
    }
    text
}

fn encipher_axle(path: &std::path::Path) -> String {
    let mut machine = load_machine(path).unwrap();
    Setting::parse("* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)", 5)
        .unwrap()
        .apply(&mut machine)
        .unwrap();
    machine.convert("FROMHISSHOULDERHIAWATHA").unwrap()
}

#[test]
fn classic_file() {
    let dir = scratch();
    let path = write(&dir, "naval.conf", NAVAL_CONF);
    let machine = load_machine(&path).unwrap();
    assert_eq!(machine.rotors().len(), 12);
    assert_eq!(encipher_axle(&path), "QVPQSOKOILPUBKJZPISFXDW");
}

#[test]
fn toml_file_matches_classic() {
    let dir = scratch();
    let classic = write(&dir, "naval.conf", NAVAL_CONF);
    let toml = write(&dir, "naval.TOML", &naval_toml());
    assert_eq!(encipher_axle(&toml), encipher_axle(&classic));
}

#[test]
fn extension_picks_reader() {
    let dir = scratch();
    let path = write(&dir, "naval.toml", NAVAL_CONF);
    assert!(matches!(load_machine(&path), Err(ConfigError::Toml(_))));
}

#[test]
fn missing_file() {
    let dir = scratch();
    let path = dir.path().join("absent.conf");
    let err = load_machine(&path).unwrap_err();
    assert!(matches!(&err, ConfigError::Io { path: p, .. } if *p == path));
    assert!(err.to_string().contains("absent.conf"));
}
