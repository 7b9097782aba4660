// Tests for the suggestions offered for launcher queries and the context menu

use dailynote::journal::NoteAction;

use crate::common::helpers::*;

#[test]
fn test_blank_queries_get_placeholder() {
    let vault = VaultFixture::new();
    let manager = vault.manager();

    for query in ["", "   ", "\t\n"] {
        let suggestions = manager.handle_query(query);
        assert_eq!(suggestions.len(), 1, "query {:?}", query);
        assert!(!suggestions[0].is_actionable(), "query {:?}", query);
        assert_eq!(suggestions[0].title, "Enter your note");
    }
}

#[test]
fn test_query_offers_single_append() {
    let vault = VaultFixture::new();

    let suggestions = vault.manager().handle_query("buy milk");

    assert_eq!(suggestions.len(), 1);
    let suggestion = &suggestions[0];
    assert_eq!(suggestion.title, "Add to daily note: buy milk");
    assert_eq!(
        suggestion.subtitle,
        "Will append to 2024-06-15.md with timestamp"
    );
    assert_eq!(
        suggestion.action,
        Some(NoteAction::AppendToDailyNote("buy milk".to_string()))
    );
}

#[test]
fn test_query_keeps_surrounding_whitespace() {
    let vault = VaultFixture::new();

    let suggestions = vault.manager().handle_query(" padded ");

    assert_eq!(
        suggestions[0].action,
        Some(NoteAction::AppendToDailyNote(" padded ".to_string()))
    );
}

#[test]
fn test_query_has_no_side_effects() {
    let vault = VaultFixture::new();
    let manager = vault.manager();

    manager.handle_query("");
    manager.handle_query("something");

    assert!(list_files(vault.root()).is_empty());
}

#[test]
fn test_context_menu() {
    let vault = VaultFixture::new();

    let menu = vault.manager().build_context_menu();

    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].title, "Open daily note");
    assert_eq!(menu[0].action, Some(NoteAction::OpenDailyNote));
}
