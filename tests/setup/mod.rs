#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn setup_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Binary under test with every setting pinned, so the caller's environment cannot leak in.
pub fn get_bin() -> Command {
    let mut cmd = Command::cargo_bin("nanoapp").expect("Failed to find binary");

    cmd.env("NANOAPP_DEVICE_FILE", "device.json")
        .env("NANOAPP_APP_NAME", "staRknet")
        .env("NANOAPP_PROVIDER", "4")
        .env("NANOAPP_TIMEOUT_SECS", "300")
        .env("NANOAPP_FIRMWARE_POLICY", "exact")
        .env_remove("RUST_LOG");

    cmd
}

/// Writes `content` as the device file of `dir` and returns a command running inside it.
pub fn get_bin_with_device(content: &str) -> (Command, TempDir) {
    let temp_dir = setup_test_dir();
    create_device_json(&temp_dir, content);
    let mut cmd = get_bin();
    cmd.current_dir(temp_dir.path());
    (cmd, temp_dir)
}

pub fn create_device_json(dir: &TempDir, content: &str) {
    fs::write(device_json_path(dir), content).expect("Failed to write device.json");
}

pub fn device_json_path(dir: &TempDir) -> PathBuf {
    dir.path().join("device.json")
}

pub fn read_device_json(dir: &TempDir) -> String {
    fs::read_to_string(device_json_path(dir)).expect("Failed to read device.json")
}

/// Names under `apps` in the device file, in device order.
pub fn installed_app_names(dir: &TempDir) -> Vec<String> {
    let device_json: serde_json::Value =
        serde_json::from_str(&read_device_json(dir)).expect("Failed to parse device.json");
    device_json["apps"]
        .as_array()
        .map(|apps| {
            apps.iter()
                .filter_map(|app| app["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

pub const NANO_X_WITHOUT_APP: &str = r#"{
  "model": "nanoX",
  "product_name": "Ledger Nano X",
  "firmware_version": "2.1.0",
  "apps": [
    { "name": "Bitcoin", "version": "2.1.0" },
    { "name": "Ethereum", "version": "1.10.3" }
  ],
  "catalog": {
    "4": [{ "name": "staRknet", "version": "1.1.1" }]
  }
}"#;

pub const NANO_X_WITH_APP: &str = r#"{
  "model": "nanoX",
  "product_name": "Ledger Nano X",
  "firmware_version": "2.1.0",
  "apps": [
    { "name": "Bitcoin", "version": "2.1.0" },
    { "name": "staRknet", "version": "1.1.1" }
  ],
  "catalog": {
    "4": [{ "name": "staRknet", "version": "1.1.1" }]
  }
}"#;

pub const NANO_X_EMPTY: &str = r#"{
  "model": "nanoX",
  "product_name": "Ledger Nano X",
  "firmware_version": "2.1.0"
}"#;

pub const NANO_X_OUTDATED: &str = r#"{
  "model": "nanoX",
  "product_name": "Ledger Nano X",
  "firmware_version": "2.0.0",
  "catalog": {
    "4": [{ "name": "staRknet", "version": "1.1.1" }]
  }
}"#;

pub const NANO_X_NEWER: &str = r#"{
  "model": "nanoX",
  "product_name": "Ledger Nano X",
  "firmware_version": "2.2.1",
  "catalog": {
    "4": [{ "name": "staRknet", "version": "1.1.1" }]
  }
}"#;

pub const NANO_SP_WITHOUT_APP: &str = r#"{
  "model": "nanoSP",
  "product_name": "Ledger Nano S Plus",
  "firmware_version": "1.1.0",
  "catalog": {
    "4": [{ "name": "staRknet", "version": "1.1.1" }]
  }
}"#;

pub const STAX: &str = r#"{
  "model": "stax",
  "product_name": "Ledger Stax",
  "firmware_version": "1.0.0",
  "catalog": {
    "4": [{ "name": "staRknet", "version": "1.1.1" }]
  }
}"#;

pub const UNKNOWN_MODEL: &str = r#"{
  "model": "nanoFold",
  "product_name": "Ledger Nano Fold",
  "firmware_version": "9.9.9"
}"#;

pub const DISCONNECTED: &str = r#"{
  "model": "nanoX",
  "product_name": "Ledger Nano X",
  "firmware_version": "2.1.0",
  "connected": false
}"#;

pub const SLOW_CONFIRMATION: &str = r#"{
  "model": "nanoX",
  "product_name": "Ledger Nano X",
  "firmware_version": "2.1.0",
  "catalog": {
    "4": [{ "name": "staRknet", "version": "1.1.1" }]
  },
  "confirm_delay_ms": 5000
}"#;
