//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("thiepcuoi").expect("Failed to find thiepcuoi binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

// ============================================================================
// Event Command Tests
// ============================================================================

#[test]
fn test_events_lists_both_ceremonies() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("events")
        .assert()
        .success()
        .stdout(predicate::str::contains("event1: LỄ VU QUY"))
        .stdout(predicate::str::contains("event2: LỄ THÀNH HÔN"))
        .stdout(predicate::str::contains("10:30, 21/12/2025"));
}

#[test]
fn test_calendar_prints_link() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["calendar", "event2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "https://calendar.google.com/calendar/render?action=TEMPLATE",
        ))
        .stdout(predicate::str::contains("dates=20251225T1000/20251225T1000"));
}

#[test]
fn test_map_prints_link() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["map", "event1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://www.google.com/maps/search/?api=1&query=NH%C3%80%20SHVH",
        ));
}

#[test]
fn test_unknown_event_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["map", "event9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Event not found: event9"));
}

// ============================================================================
// Countdown and Gallery Tests
// ============================================================================

#[test]
fn test_countdown_after_target() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("invitation.json"),
        r#"{ "countdown_target": "2000-01-01T00:00:00+07:00" }"#,
    )
    .unwrap();

    cli_cmd(&data_dir)
        .arg("countdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("00 ngày 00 giờ 00 phút 00 giây"));
}

#[test]
fn test_gallery_lists_photos() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("gallery")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gallery (9 photos):"))
        .stdout(predicate::str::contains("assets/gallery/anh-01.jpg"));
}

#[test]
fn test_malformed_config_fails() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("invitation.json"), "{ nope").unwrap();

    cli_cmd(&data_dir)
        .arg("events")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_config_init_then_refuses_overwrite() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(data_dir.path().join("invitation.json").exists());

    cli_cmd(&data_dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ============================================================================
// Guestbook and RSVP Tests
// ============================================================================

#[test]
fn test_wish_with_blank_name_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["wish", "--name", "  ", "--message", "Chúc mừng"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vui lòng điền đầy đủ thông tin!"));
}

#[test]
fn test_confirm_then_list() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["confirm", "--name", "Lan", "--guests", "3 người"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cảm ơn bạn đã xác nhận tham dự!"));

    cli_cmd(&data_dir)
        .args(["confirm", "--name", "Hùng", "--guests", "2"])
        .assert()
        .success();

    cli_cmd(&data_dir)
        .arg("confirmations")
        .assert()
        .success()
        .stdout(predicate::str::contains("Confirmations (2, 5 guests):"))
        .stdout(predicate::str::contains("Lan - 3"));
}

#[test]
fn test_confirm_without_number_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["confirm", "--name", "Lan", "--guests", "vài"])
        .assert()
        .failure();

    cli_cmd(&data_dir)
        .arg("confirmations")
        .assert()
        .success()
        .stdout(predicate::str::contains("No confirmations yet."));
}

#[test]
fn test_confirmations_total_beyond_u32() {
    let data_dir = TempDir::new().unwrap();

    for name in ["Lan", "Hùng"] {
        cli_cmd(&data_dir)
            .args(["confirm", "--name", name, "--guests", "4294967295"])
            .assert()
            .success();
    }

    cli_cmd(&data_dir)
        .arg("confirmations")
        .assert()
        .success()
        .stdout(predicate::str::contains("Confirmations (2, 8589934590 guests):"));
}
