// Integration tests for appending entries to the daily note
//
// These tests run the manager against a temporary vault and check the
// exact bytes that end up on disk.

use dailynote::config::VaultSettings;
use dailynote::journal::{DailyNoteManager, NoteError, NoteOrigin};
use std::fs;
use std::path::PathBuf;

use crate::common::helpers::*;

// ============================================================================
// Note creation
// ============================================================================

#[test]
fn test_creates_note_from_template() {
    let vault = VaultFixture::new();
    vault.write_template("# Daily\n\n## Log\n");

    let outcome = vault.manager().append_to_daily_note("buy milk").unwrap();

    assert_eq!(outcome.origin, NoteOrigin::FromTemplate);
    assert_eq!(outcome.path, vault.note_path(TODAY));
    assert_eq!(outcome.content, "buy milk");
    assert_eq!(vault.read_note(TODAY), "# Daily\n\n## Log\n\n- 14:30 buy milk");
}

#[test]
fn test_creates_empty_note_without_template() {
    let vault = VaultFixture::new();

    let outcome = vault.manager().append_to_daily_note("x").unwrap();

    assert_eq!(outcome.origin, NoteOrigin::Empty);
    assert_eq!(vault.read_note(TODAY), "# 2024-06-15\n\n\n- 14:30 x");
}

#[test]
fn test_template_is_left_untouched() {
    let vault = VaultFixture::new();
    let template = vault.write_template("seed");

    vault.manager().append_to_daily_note("one").unwrap();

    assert_eq!(fs::read_to_string(template).unwrap(), "seed");
}

#[test]
fn test_template_copied_byte_for_byte() {
    let vault = VaultFixture::new();
    let path = vault.root().join("004_template").join("daily_note.md");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let bytes: &[u8] = b"---\r\ntags: [daily]\r\n---\r\n\xe6\x97\xa5\xe8\xa8\x98\r\n";
    fs::write(&path, bytes).unwrap();

    vault.manager().append_to_daily_note("memo").unwrap();

    let mut expected = bytes.to_vec();
    expected.extend_from_slice(b"\n- 14:30 memo");
    assert_eq!(fs::read(vault.note_path(TODAY)).unwrap(), expected);
}

// ============================================================================
// Existing notes
// ============================================================================

#[test]
fn test_existing_note_only_gets_entry() {
    let vault = VaultFixture::new();
    vault.write_template("SHOULD NOT APPEAR");
    vault.write_note(TODAY, "A");

    let outcome = vault.manager().append_to_daily_note("y").unwrap();

    assert_eq!(outcome.origin, NoteOrigin::Existing);
    assert_eq!(vault.read_note(TODAY), "A\n- 14:30 y");
}

#[test]
fn test_same_minute_appends_keep_order() {
    let vault = VaultFixture::new();
    let manager = vault.manager();

    let first = manager.append_to_daily_note("first").unwrap();
    let second = manager.append_to_daily_note("second").unwrap();

    assert_eq!(first.origin, NoteOrigin::Empty);
    assert_eq!(second.origin, NoteOrigin::Existing);
    assert_eq!(
        vault.read_note(TODAY),
        "# 2024-06-15\n\n\n- 14:30 first\n- 14:30 second"
    );
}

#[test]
fn test_new_day_gets_new_note() {
    let vault = VaultFixture::new();

    vault
        .manager_at("2024-06-15 23:58:00")
        .append_to_daily_note("late")
        .unwrap();
    vault
        .manager_at("2024-06-16 00:01:00")
        .append_to_daily_note("early")
        .unwrap();

    assert_eq!(vault.read_note("2024-06-15"), "# 2024-06-15\n\n\n- 23:58 late");
    assert_eq!(vault.read_note("2024-06-16"), "# 2024-06-16\n\n\n- 00:01 early");
}

#[test]
fn test_content_is_written_verbatim() {
    let vault = VaultFixture::new();
    vault.write_note(TODAY, "");

    vault
        .manager()
        .append_to_daily_note("  [[link]] #tag 日本語  ")
        .unwrap();

    assert_eq!(vault.read_note(TODAY), "\n- 14:30   [[link]] #tag 日本語  ");
}

#[test]
fn test_custom_directory_names() {
    let vault = VaultFixture::new();
    let settings = VaultSettings {
        daily_note_dir: "journal".to_string(),
        template_dir: "tpl".to_string(),
        template_filename: "day.md".to_string(),
        ..vault.settings()
    };
    fs::create_dir_all(vault.root().join("tpl")).unwrap();
    fs::write(vault.root().join("tpl").join("day.md"), "T").unwrap();

    let manager =
        DailyNoteManager::with_parts(settings, clock_at(NOW), RecordingLauncher::default());
    let outcome = manager.append_to_daily_note("z").unwrap();

    let expected = vault.root().join("journal").join("2024-06-15.md");
    assert_eq!(outcome.path, expected);
    assert_eq!(fs::read_to_string(expected).unwrap(), "T\n- 14:30 z");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_missing_vault_writes_nothing() {
    let parent = VaultFixture::new();
    let missing = parent.root().join("no-such-vault");
    let manager = DailyNoteManager::with_parts(
        VaultSettings::with_vault_path(&missing),
        clock_at(NOW),
        RecordingLauncher::default(),
    );

    let err = manager.append_to_daily_note("lost").unwrap_err();

    match err {
        NoteError::VaultNotFound { path } => assert_eq!(path, missing),
        other => panic!("expected VaultNotFound, got {:?}", other),
    }
    assert!(!missing.exists());
    assert!(list_files(parent.root()).is_empty());
}

#[test]
fn test_derived_vault_under_home() {
    let home = VaultFixture::new();
    fs::create_dir_all(home.root().join("my_vault")).unwrap();
    let settings = VaultSettings {
        vault_name: "my_vault".to_string(),
        ..VaultSettings::default()
    };

    let manager =
        DailyNoteManager::with_parts(settings, clock_at(NOW), RecordingLauncher::default())
            .with_home(home.root());
    manager.append_to_daily_note("from home").unwrap();

    assert_eq!(
        list_files(home.root()),
        vec![
            PathBuf::from("my_vault")
                .join("002_daily_note")
                .join("2024-06-15.md")
        ]
    );
}

#[test]
fn test_note_dir_blocked_by_file_is_io_error() {
    let vault = VaultFixture::new();
    fs::write(vault.root().join("002_daily_note"), "not a directory").unwrap();

    let err = vault.manager().append_to_daily_note("x").unwrap_err();

    assert!(matches!(err, NoteError::Io { .. }), "got {:?}", err);
}

// ============================================================================
// Opening
// ============================================================================

#[test]
fn test_open_after_append() {
    let vault = VaultFixture::new();
    let manager = vault.manager();
    manager.append_to_daily_note("x").unwrap();

    let opened = manager.open_daily_note().unwrap();

    assert_eq!(opened, vault.note_path(TODAY));
    assert_eq!(manager.launcher().opened.borrow().len(), 1);
}

#[test]
fn test_open_before_any_append() {
    let vault = VaultFixture::new();
    let manager = vault.manager();

    let err = manager.open_daily_note().unwrap_err();

    assert!(matches!(err, NoteError::NoteNotCreated { .. }));
    assert!(manager.launcher().opened.borrow().is_empty());
}
