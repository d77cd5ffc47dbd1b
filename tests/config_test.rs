use std::fs;
use vptranspose::config::{RangeParams, Settings, WindowParams};
use vptranspose::transposer::OobPolicy;
use vptranspose::VpError;

fn write_settings(json: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("settings.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

#[test]
fn test_defaults() {
    let s = Settings::default();
    assert_eq!(s.policy, OobPolicy::Mark);
    assert_eq!((s.min_key, s.max_key), (0, 60));
    assert_eq!((s.window_min, s.window_max), (-12, 12));
    assert!(s.header);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let (_dir, path) = write_settings(r#"{ "policy": "wrap", "windowMin": -5 }"#);
    let s = Settings::load_from_file(&path).unwrap();
    assert_eq!(s.policy, OobPolicy::Wrap);
    assert_eq!(s.window_min, -5);
    assert_eq!(s.window_max, 12);
    assert_eq!(s.max_key, 60);
}

#[test]
fn test_octave_switch_name() {
    let (_dir, path) = write_settings(r#"{ "policy": "octave-switch" }"#);
    let s = Settings::load_from_file(&path).unwrap();
    assert_eq!(s.policy, OobPolicy::OctaveSwitch);
}

#[test]
fn test_invalid_files() {
    let (_dir, path) = write_settings(r#"{ "minKey": 50, "maxKey": 10 }"#);
    assert!(matches!(
        Settings::load_from_file(&path),
        Err(VpError::InvalidRange { min: 50, max: 10 })
    ));

    let (_dir, path) = write_settings(r#"{ "windowMin": 3, "windowMax": -3 }"#);
    assert!(matches!(
        Settings::load_from_file(&path),
        Err(VpError::InvalidWindow { .. })
    ));

    let (_dir, path) = write_settings("not json");
    assert!(matches!(Settings::load_from_file(&path), Err(VpError::Json(_))));

    assert!(matches!(
        Settings::load_from_file("/definitely/not/here.json"),
        Err(VpError::Io(_))
    ));
}

#[test]
fn test_cli_params_override_settings() {
    let settings = Settings {
        policy: OobPolicy::Drop,
        min_key: 12,
        max_key: 48,
        ..Settings::default()
    };

    let params = RangeParams {
        min_key: Some(0),
        max_key: None,
        policy: None,
    };
    let range = params.key_range(&settings).unwrap();
    assert_eq!((range.min(), range.max()), (0, 48));
    assert_eq!(params.policy(&settings), OobPolicy::Drop);

    let window = WindowParams {
        window_min: None,
        window_max: Some(2),
    }
    .window(&settings)
    .unwrap();
    assert_eq!((window.min(), window.max()), (-12, 2));
}
