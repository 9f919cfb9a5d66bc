//! Integration tests for the earthspin CLI

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::earthspin_cmd;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn help_exits_0_and_shows_usage() {
    let home = TempDir::new().unwrap();
    earthspin_cmd(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ASCII wireframe Earth"))
        .stdout(predicate::str::contains("frame"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_shows_package_version() {
    let home = TempDir::new().unwrap();
    earthspin_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[cfg(not(feature = "release"))]
#[test]
fn version_shows_sha_and_build_date() {
    let home = TempDir::new().unwrap();
    let expected = format!(
        "earthspin {} ({}, {})\n",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_SHA"),
        env!("EARTHSPIN_BUILD_DATE")
    );
    earthspin_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    earthspin_cmd(home.path())
        .arg("--no-such-flag")
        .assert()
        .code(2);
}

// ============================================================================
// Terminal acquisition
// ============================================================================

#[test]
fn run_without_terminal_fails_before_rendering() {
    let home = TempDir::new().unwrap();
    earthspin_cmd(home.path())
        .arg("run")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No usable terminal"));
}

#[test]
fn run_rejects_zero_frame_limit() {
    let home = TempDir::new().unwrap();
    earthspin_cmd(home.path())
        .args(["run", "--frames", "0"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--frames"));
}

#[test]
fn default_command_without_terminal_fails() {
    let home = TempDir::new().unwrap();
    earthspin_cmd(home.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot start the animation"));
}

// ============================================================================
// Single frame output
// ============================================================================

#[test]
fn frame_prints_full_viewport() {
    let home = TempDir::new().unwrap();
    let output = earthspin_cmd(home.path())
        .args(["frame", "--angle-x", "0.3", "--angle-y", "1.2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 40);
    assert!(lines.iter().all(|line| line.chars().count() == 80));
    assert!(stdout.contains('o'));
    assert!(stdout.contains('x'));
}

#[test]
fn frame_respects_viewport_overrides() {
    let home = TempDir::new().unwrap();
    let output = earthspin_cmd(home.path())
        .args(["frame", "--width", "30", "--height", "12", "--fov", "8"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 12);
    assert!(lines.iter().all(|line| line.chars().count() == 30));
}

#[test]
fn frame_with_zero_points_shows_only_markers() {
    let home = TempDir::new().unwrap();
    earthspin_cmd(home.path())
        .args(["frame", "--points", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x"))
        .stdout(predicate::str::contains("o").not());
}

#[test]
fn frame_rejects_zero_width() {
    let home = TempDir::new().unwrap();
    earthspin_cmd(home.path())
        .args(["frame", "--width", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid"));
}

#[test]
fn frame_rejects_oversized_viewport() {
    let home = TempDir::new().unwrap();
    earthspin_cmd(home.path())
        .args(["frame", "--width", "65535", "--height", "65535"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid"));
}

#[test]
fn frame_is_deterministic() {
    let home = TempDir::new().unwrap();
    let run = || {
        earthspin_cmd(home.path())
            .args(["frame", "--angle-x", "1.0", "--angle-y", "-2.0"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    earthspin_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sphere_points = 1000"))
        .stdout(predicate::str::contains("frame_interval_ms = 50"))
        .stdout(predicate::str::contains("Tokyo"));
}

#[test]
fn config_path_prints_explicit_path() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");
    std::fs::write(&path, "").unwrap();

    earthspin_cmd(home.path())
        .args(["config", "path", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn config_file_changes_glyphs() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");
    std::fs::write(&path, "[glyphs]\nsphere = \"*\"\noverlay = \"#\"\n").unwrap();

    earthspin_cmd(home.path())
        .arg("frame")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("*"))
        .stdout(predicate::str::contains("#"))
        .stdout(predicate::str::contains("o").not());
}

#[test]
fn default_config_location_is_used() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("earthspin");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[view]\nwidth = 20\nheight = 5\n").unwrap();

    let output = earthspin_cmd(home.path()).arg("frame").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 5);
}

#[test]
fn invalid_config_file_reports_parse_error() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.toml");
    std::fs::write(&path, "[view\nwidth = ").unwrap();

    earthspin_cmd(home.path())
        .arg("frame")
        .arg("--config")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn missing_config_file_reports_read_error() {
    let home = TempDir::new().unwrap();

    earthspin_cmd(home.path())
        .args(["frame", "--config", "/nonexistent/earthspin.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config file"));
}
