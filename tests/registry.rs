use deck_shortcuts_lib::{
    Diagnostics, LaunchError, LaunchGateway, LogSettings, ProcessHost, Registry, Settings,
    Shortcut, ShortcutStore, read_shortcuts,
};
use std::path::Path;

struct RefuseAll;

impl ProcessHost for RefuseAll {
    fn spawn(&self, _path: &str) -> std::io::Result<u32> {
        Err(std::io::Error::from(std::io::ErrorKind::NotFound))
    }
}

fn settings_in(dir: &Path) -> Settings {
    Settings {
        shortcuts_path: dir.join("data").join("shortcuts.json"),
        log: LogSettings {
            file: Some(dir.join("shortcuts.log")),
            level: "debug".into(),
        },
    }
}

#[test]
fn test_first_run_then_restart_keeps_shortcuts() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = settings_in(tmp.path());

    let diagnostics = Diagnostics::init(&settings.log).unwrap();
    let registry = Registry::open(&settings, diagnostics.clone());
    assert!(registry.get_shortcuts().is_empty());

    registry
        .set_shortcuts(vec![Shortcut::with_id("a", "Firefox", "/usr/bin/firefox")])
        .unwrap();
    let merged = registry
        .set_shortcuts(vec![
            Shortcut::with_id("a", "Other", "/bin/x"),
            Shortcut::with_id("b", "Vim", "/usr/bin/vim"),
        ])
        .unwrap();
    assert_eq!(merged.len(), 2);
    drop(registry);
    diagnostics.shutdown().unwrap();

    let restarted = Registry::open(&settings, Diagnostics::disabled());
    let shortcuts = restarted.get_shortcuts();
    assert_eq!(shortcuts.len(), 2);
    assert_eq!(shortcuts[0].id, "a");
    assert_eq!(shortcuts[0].name, "Firefox");
    assert_eq!(shortcuts[1].name, "Vim");

    let log = std::fs::read_to_string(tmp.path().join("shortcuts.log")).unwrap();
    assert!(log.contains("Adding shortcut Firefox"));
    assert!(log.contains("Adding shortcut Vim"));
    assert!(!log.contains("Adding shortcut Other"));
}

#[test]
fn test_backing_file_is_plain_json_array() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = settings_in(tmp.path());
    let registry = Registry::open(&settings, Diagnostics::disabled());

    registry
        .set_shortcuts(vec![
            Shortcut::with_id("a", "Firefox", "/usr/bin/firefox").with_icon("/icons/ff.png"),
            Shortcut::with_id("b", "Vim", "/usr/bin/vim"),
        ])
        .unwrap();

    let raw = std::fs::read_to_string(&settings.shortcuts_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"id": "a", "name": "Firefox", "icon": "/icons/ff.png", "path": "/usr/bin/firefox"},
            {"id": "b", "name": "Vim", "path": "/usr/bin/vim"}
        ])
    );
    assert_eq!(read_shortcuts(&settings.shortcuts_path).unwrap(), registry.get_shortcuts());
}

#[test]
fn test_corrupt_file_starts_empty_and_is_repaired_by_merge() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("shortcuts.json");
    std::fs::write(&path, "{{{ garbage").unwrap();

    let store = ShortcutStore::open(&path, Diagnostics::disabled());
    assert!(store.is_empty());

    store.merge([Shortcut::with_id("a", "Firefox", "/usr/bin/firefox")]).unwrap();
    assert_eq!(read_shortcuts(&path).unwrap().len(), 1);
}

#[test]
fn test_launch_failure_is_reported_not_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let store = ShortcutStore::open(tmp.path().join("shortcuts.json"), Diagnostics::disabled());
    let registry = Registry::new(store, LaunchGateway::new(RefuseAll, Diagnostics::disabled()));
    registry
        .set_shortcuts(vec![Shortcut::with_id("a", "Ghost", "/nonexistent")])
        .unwrap();

    let err = registry.launch_shortcut("a").unwrap_err();
    assert!(matches!(err, LaunchError::Spawn { .. }));
    assert_eq!(registry.get_shortcuts().len(), 1);
}

#[test]
fn test_system_gateway_rejects_missing_binary() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = Registry::open(&settings_in(tmp.path()), Diagnostics::disabled());
    let err = registry.launch_app("Ghost", "/nonexistent").unwrap_err();
    assert!(err.to_string().contains("/nonexistent"));
}

#[test]
fn test_import_reader_rejects_corrupt_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("import.json");
    std::fs::write(&path, "not json at all").unwrap();
    assert!(read_shortcuts(&path).is_err());
}

#[test]
fn test_set_shortcuts_with_blank_icon_matches_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = settings_in(tmp.path());
    let registry = Registry::open(&settings, Diagnostics::disabled());

    let merged = registry
        .set_shortcuts(vec![Shortcut::with_id("a", "Vim", "/usr/bin/vim").with_icon("")])
        .unwrap();
    let reopened = Registry::open(&settings, Diagnostics::disabled());
    assert_eq!(reopened.get_shortcuts(), merged);
}
