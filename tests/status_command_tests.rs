mod setup;

use predicates::prelude::*;

#[test]
fn test_status_command_help() {
    let mut cmd = setup::get_bin();
    cmd.arg("status")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("whether the app is installed"));
}

#[test]
fn test_status_ready_to_install() {
    let (mut cmd, _temp_dir) = setup::get_bin_with_device(setup::NANO_X_WITHOUT_APP);
    cmd.arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Connected to your Ledger Nano X (nanoX, firmware 2.1.0)",
        ))
        .stdout(predicate::str::contains(
            "staRknet App is not installed on your device",
        ))
        .stdout(predicate::str::contains(
            "Device is ready for app management (firmware 2.1.0).",
        ))
        .stdout(predicate::str::contains("nanoapp install"));
}

#[test]
fn test_status_ready_to_uninstall() {
    let (mut cmd, _temp_dir) = setup::get_bin_with_device(setup::NANO_X_WITH_APP);
    cmd.arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "staRknet App is installed on your device",
        ))
        .stdout(predicate::str::contains("nanoapp uninstall"));
}

#[test]
fn test_status_outdated_firmware() {
    let (mut cmd, _temp_dir) = setup::get_bin_with_device(setup::NANO_X_OUTDATED);
    cmd.arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("App management unavailable"))
        .stdout(predicate::str::contains("version 2.1.0 is required"))
        .stdout(predicate::str::contains("runs 2.0.0"));
}

#[test]
fn test_status_unsupported_model_lists_supported_devices() {
    let (mut cmd, _temp_dir) = setup::get_bin_with_device(setup::STAX);
    cmd.arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Device model 'stax' is not supported",
        ))
        .stdout(predicate::str::contains("Supported devices:"))
        .stdout(predicate::str::is_match(r"nanoSP\s+firmware 1\.1\.0").unwrap());
}

#[test]
fn test_status_newer_firmware_with_minimum_policy() {
    let (mut cmd, _temp_dir) = setup::get_bin_with_device(setup::NANO_X_NEWER);
    cmd.arg("--firmware-policy")
        .arg("minimum")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Device is ready for app management (firmware 2.1.0).",
        ));
}

#[test]
fn test_status_newer_firmware_with_exact_policy() {
    let (mut cmd, _temp_dir) = setup::get_bin_with_device(setup::NANO_X_NEWER);
    cmd.arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("runs 2.2.1"));
}

#[test]
fn test_status_with_custom_app_name() {
    let (mut cmd, _temp_dir) = setup::get_bin_with_device(setup::NANO_X_WITHOUT_APP);
    cmd.arg("--app-name")
        .arg("Bitcoin")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bitcoin App is installed on your device",
        ));
}
