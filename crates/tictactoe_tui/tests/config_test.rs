//! Tests for settings loading.

use std::io::Write;
use std::path::Path;
use tictactoe_tui::Settings;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = Settings::load(dir.path().join("absent.toml")).expect("defaults");

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.log_filter(), "info");
    assert_eq!(settings.log_file(), Path::new("tictactoe.log"));
    assert!(*settings.highlight_winning_line());
    assert!(*settings.show_move_details());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "log_filter = \"debug\"").unwrap();
    writeln!(file, "show_move_details = false").unwrap();

    let settings = Settings::load(file.path()).expect("valid settings");

    assert_eq!(settings.log_filter(), "debug");
    assert!(!*settings.show_move_details());
    assert!(*settings.highlight_winning_line());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "highlight_winning_line = \"sometimes\"").unwrap();

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse settings"));
}

#[test]
fn test_unknown_key_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "board_size = 4").unwrap();

    assert!(Settings::from_file(file.path()).is_err());
}
