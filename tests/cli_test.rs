//! Integration tests for the `nexus-nmcli` binary.
//!
//! A fake `nmcli` shell script stands in for NetworkManager so these run
//! anywhere a POSIX shell exists.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the binary with config isolated from the user's
fn nexus_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("nexus-nmcli").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Write an executable script named `name` that prints `stdout`, prints
/// `stderr` to stderr and exits with `code`
fn fake_tool(dir: &Path, name: &str, stdout: &str, stderr: &str, code: i32) -> PathBuf {
    let path = dir.join(name);
    let script = format!(
        "#!/bin/sh\ncat <<'NEXUS_EOF'\n{stdout}NEXUS_EOF\nprintf '%s' '{stderr}' >&2\nexit {code}\n"
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

const WIFI_LIST: &str = "\
IN-USE  BSSID              SSID        MODE   CHAN  RATE        SIGNAL  BARS  SECURITY
*       AA:BB:CC:DD:EE:FF  MyNet       Infra  6     270 Mbit/s  70      ***   WPA2
        11:22:33:44:55:66  Cafe Guest  Infra  44    540 Mbit/s  42      **    WPA1 WPA2
";

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_help_lists_components() {
    let home = TempDir::new().unwrap();
    nexus_cmd(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("iw")
                .and(predicate::str::contains("device"))
                .and(predicate::str::contains("connection"))
                .and(predicate::str::contains("wifi")),
        );
}

#[test]
fn test_print_default_config() {
    let home = TempDir::new().unwrap();
    nexus_cmd(home.path())
        .arg("print-default-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[tools]").and(predicate::str::contains("nmcli = \"nmcli\"")));
}

// ── Tool lookup ─────────────────────────────────────────────────────

#[test]
fn test_missing_nmcli_is_reported() {
    let home = TempDir::new().unwrap();
    let empty = TempDir::new().unwrap();
    nexus_cmd(home.path())
        .env("PATH", empty.path())
        .args(["wifi", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nmcli: executable file not found"));
}

#[test]
fn test_missing_iwgetid_is_reported() {
    let home = TempDir::new().unwrap();
    let empty = TempDir::new().unwrap();
    nexus_cmd(home.path())
        .env("PATH", empty.path())
        .args(["iw", "ssid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("iwgetid: executable file not found"));
}

// ── Fake tools ──────────────────────────────────────────────────────

#[test]
fn test_wifi_list_json_from_fake_nmcli() {
    let home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    let nmcli = fake_tool(bin.path(), "nmcli", WIFI_LIST, "", 0);

    let output = nexus_cmd(home.path())
        .arg("--nmcli")
        .arg(&nmcli)
        .args(["--json", "wifi", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let wifis: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let wifis = wifis.as_array().unwrap();
    assert_eq!(wifis.len(), 2);
    assert_eq!(wifis[0]["in_use"], true);
    assert_eq!(wifis[0]["ssid"], "MyNet");
    assert_eq!(wifis[1]["ssid"], "Cafe Guest");
    assert_eq!(wifis[1]["security"], "WPA1 WPA2");
}

#[test]
fn test_mutating_failure_shows_nmcli_stderr() {
    let home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    let nmcli = fake_tool(
        bin.path(),
        "nmcli",
        "",
        "Error: unknown connection Home.",
        10,
    );

    nexus_cmd(home.path())
        .arg("--nmcli")
        .arg(&nmcli)
        .args(["connection", "delete", "Home"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: unknown connection Home."));
}

#[test]
fn test_device_status_without_match_exits_non_zero() {
    let home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    let nmcli = fake_tool(
        bin.path(),
        "nmcli",
        "DEVICE  TYPE      STATE      CONNECTION\neth0    ethernet  connected  Wired\n",
        "",
        0,
    );

    nexus_cmd(home.path())
        .arg("--nmcli")
        .arg(&nmcli)
        .args(["device", "status", "wifi"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_config_file_selects_tool_path() {
    let home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    let iwgetid = fake_tool(bin.path(), "fake-iwgetid", "  6\n", "", 0);

    let config = home.path().join("nexus.toml");
    fs::write(
        &config,
        format!("[tools]\niwgetid = \"{}\"\n", iwgetid.display()),
    )
    .unwrap();

    nexus_cmd(home.path())
        .arg("--config")
        .arg(&config)
        .args(["iw", "channel", "--interface", "wlan0"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_iw_channel_json_is_a_number() {
    let home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    let iwgetid = fake_tool(bin.path(), "iwgetid", "6\n", "", 0);

    let output = nexus_cmd(home.path())
        .arg("--iwgetid")
        .arg(&iwgetid)
        .args(["--json", "iw", "channel"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let chan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(chan.is_number());
    assert_eq!(chan.as_i64(), Some(6));
}

#[test]
fn test_iw_frequency_json_and_table() {
    let home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    let iwgetid = fake_tool(bin.path(), "iwgetid", "2.437e+09\n", "", 0);

    let output = nexus_cmd(home.path())
        .arg("--iwgetid")
        .arg(&iwgetid)
        .args(["--json", "iw", "frequency"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let hz: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(hz.as_f64(), Some(2.437e9));

    nexus_cmd(home.path())
        .arg("--iwgetid")
        .arg(&iwgetid)
        .args(["iw", "frequency"])
        .assert()
        .success()
        .stdout("2437000000 (2.437 GHz, 2.4 GHz band)\n");
}
