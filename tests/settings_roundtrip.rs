use sit_reminder::settings::{OverlayPosition, Settings};
use std::fs;
use tempfile::tempdir;

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let saved = Settings {
        work_time: 90,
        rest_time: 12,
        show_on_desktop: false,
        timer_position: Some(OverlayPosition { x: 120, y: -14 }),
        debug_logging: true,
    };
    saved.save(&path).unwrap();

    assert_eq!(Settings::load(&path), saved);
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let settings = Settings::load(&dir.path().join("does_not_exist.json"));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.work_time, 45);
    assert_eq!(settings.rest_time, 5);
    assert!(settings.show_on_desktop);
    assert_eq!(settings.timer_position, None);
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();
    assert_eq!(Settings::load(&path), Settings::default());
}

#[test]
fn missing_keys_fall_back_individually() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"work_time": 60}"#).unwrap();

    let settings = Settings::load(&path);
    assert_eq!(settings.work_time, 60);
    assert_eq!(settings.rest_time, 5);
    assert!(settings.show_on_desktop);
    assert_eq!(settings.timer_position, None);
}

#[test]
fn out_of_range_durations_are_clamped_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"work_time": 999, "rest_time": 0}"#).unwrap();

    let settings = Settings::load(&path);
    assert_eq!(settings.work_time, 120);
    assert_eq!(settings.rest_time, 1);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("dir").join("settings.json");
    Settings::default().save(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn wire_format_uses_the_legacy_keys() {
    let settings = Settings {
        timer_position: Some(OverlayPosition { x: 10, y: 20 }),
        ..Settings::default()
    };
    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["work_time"], 45);
    assert_eq!(json["rest_time"], 5);
    assert_eq!(json["show_on_desktop"], true);
    assert_eq!(json["timer_position"]["x"], 10);
    assert_eq!(json["timer_position"]["y"], 20);
}
