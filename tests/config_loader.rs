use emufront::config::{AssetPaths, ConfigError, FrontendConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test that FrontendConfig::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = FrontendConfig::default();

    assert_eq!(config.start_directory, "");
    assert_eq!(config.settings_path, PathBuf::from("emufront-settings.ini"));
    assert_eq!(config.clock_offset_hours, 0);
    assert_eq!(config.toast_frames, 500);
    assert!(!config.show_mascot);
    assert_eq!(config.assets.remap_image, PathBuf::from("romfs/gba.png"));
    assert_eq!(config.assets.mascot_image, PathBuf::from("romfs/karpador.png"));
}

/// Test that FrontendConfig::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = FrontendConfig::config_path();
    assert!(path.ends_with("emufront/config.toml"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(FrontendConfig::default().validate().is_ok());
}

#[test]
fn test_missing_file_returns_default() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = FrontendConfig::load_from(&dir.path().join("absent.toml"))
        .expect("missing file should yield defaults");
    assert_eq!(config, FrontendConfig::default());
}

/// Test that partial files keep defaults for everything they omit.
#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
start_directory = "/roms"
clock_offset_hours = 2

[assets]
mascot_image = "/opt/emufront/mascot.png"
"#,
    )
    .unwrap();

    let config = FrontendConfig::load_from(&path).expect("valid config");
    assert_eq!(config.start_directory, "/roms");
    assert_eq!(config.clock_offset_hours, 2);
    assert_eq!(config.toast_frames, 500);
    assert_eq!(
        config.assets,
        AssetPaths {
            remap_image: PathBuf::from("romfs/gba.png"),
            mascot_image: PathBuf::from("/opt/emufront/mascot.png"),
        }
    );
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "start_directory = [unterminated").unwrap();

    let err = FrontendConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "toast_frames = \"long\"").unwrap();

    let err = FrontendConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_large_clock_offset() {
    let config = FrontendConfig {
        clock_offset_hours: 24,
        ..FrontendConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("clock_offset_hours"));

    let config = FrontendConfig {
        clock_offset_hours: -23,
        ..FrontendConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_rejects_zero_toast_frames() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "toast_frames = 0").unwrap();

    let err = FrontendConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("toast_frames"));
}

#[test]
fn test_read_error_on_directory() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = FrontendConfig::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}
