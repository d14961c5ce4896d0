//! CLI file output tests.
//!
//! Commands that write files must write exactly what the library renders,
//! and honour a config file on disk.

use std::fs;

use glyphseed_cli::commands;
use glyphseed_cli::commands::connector::ConnectorFlags;
use glyphseed_cli::commands::crystal::CrystalFlags;
use glyphseed_cli::commands::icon::IconFlags;
use glyphseed_cli::commands::sheet::SheetKind;
use glyphseed_core::{connector, crystal, icon, CrystalOptions, IconCategory, IconOptions, Paint};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn path_in(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

#[test]
fn test_crystal_file_matches_library() {
    let dir = TempDir::new().unwrap();
    let out = path_in(&dir, "jaskier.svg");
    commands::crystal::run("jaskier", CrystalFlags::default(), None, Some(&out)).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written, crystal::generate("jaskier", &CrystalOptions::default()));
}

#[test]
fn test_crystal_honours_config_file() {
    let dir = TempDir::new().unwrap();
    let config = path_in(&dir, "render.json");
    fs::write(
        &config,
        r##"{"crystal": {"size": 96, "color": "#00a86b", "glow": false}}"##,
    )
    .unwrap();
    let out = path_in(&dir, "out.svg");
    commands::crystal::run("jaskier", CrystalFlags::default(), Some(&config), Some(&out)).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    let expected = crystal::generate(
        "jaskier",
        &CrystalOptions::default().size(96).color("#00a86b").glow(false),
    );
    assert_eq!(written, expected);
    assert!(written.contains("width=\"96\""));
}

#[test]
fn test_bad_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = path_in(&dir, "render.json");
    fs::write(&config, r#"{"crystal": {"size": "big"}}"#).unwrap();
    let out = path_in(&dir, "out.svg");

    let result = commands::crystal::run("x", CrystalFlags::default(), Some(&config), Some(&out));
    assert!(result.is_err());
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_icon_json_file() {
    let dir = TempDir::new().unwrap();
    let out = path_in(&dir, "icon.json");
    let flags = IconFlags {
        category: IconCategory::Search,
        json: true,
        ..IconFlags::default()
    };
    commands::icon::run("vault_search", flags, None, Some(&out)).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let composition = icon::compose("vault_search", IconCategory::Search, &Paint::CurrentColor);
    assert_eq!(value["template"], composition.template);
    assert_eq!(value["fragment"], composition.fragment);
}

#[test]
fn test_icon_file_matches_library() {
    let dir = TempDir::new().unwrap();
    let out = path_in(&dir, "icon.svg");
    let flags = IconFlags {
        size: Some(32),
        ..IconFlags::default()
    };
    commands::icon::run("agent-x", flags, None, Some(&out)).unwrap();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        icon::generate("agent-x", IconCategory::Mixed, &IconOptions::default().size(32))
    );
}

#[test]
fn test_connector_clip_path_file() {
    let dir = TempDir::new().unwrap();
    let out = path_in(&dir, "clip.txt");
    let flags = ConnectorFlags {
        clip_path: true,
        ..ConnectorFlags::default()
    };
    commands::connector::run("agent-x", flags, None, Some(&out)).unwrap();
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        connector::get_clip_path("agent-x")
    );
}

#[test]
fn test_sheet_file() {
    let dir = TempDir::new().unwrap();
    let out = path_in(&dir, "sheet.html");
    commands::sheet::run(
        &["jaskier".to_string(), "agent-x".to_string()],
        6,
        11,
        SheetKind::Icon,
        None,
        &out,
    )
    .unwrap();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<figure>").count(), 8);
    assert!(html.contains(">jaskier</figcaption>"));
}

#[test]
fn test_manifest_and_palette_commands_succeed() {
    assert!(commands::manifest::run(&["jaskier".to_string()], None, true).is_ok());
    assert!(commands::palette::run(Some("greens"), true).is_ok());
    assert!(commands::palette::run(Some("browns"), false).is_err());
    assert!(commands::color::run("jaskier", true).is_ok());
}
