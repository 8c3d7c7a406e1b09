use markpad::storage::keys::DOCUMENTS;
use markpad::{EditState, TypedStorage};

use crate::support::{millis, start, Harness};

#[test]
fn keystrokes_coalesce_into_one_write() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let id = workspace.active_id().unwrap().to_string();
    harness.events.clear();

    assert!(workspace.edit("a", millis(0)));
    assert!(workspace.edit("ab", millis(200)));
    assert!(workspace.edit("abc", millis(400)));
    assert_eq!(workspace.edit_state(&id), EditState::Editing);
    assert_eq!(workspace.current_content(&id), Some("abc"));

    // Each keystroke pushes the deadline back by the debounce window.
    assert_eq!(workspace.flush_due(millis(600)), 0);
    assert_eq!(workspace.flush_due(millis(700)), 1);
    assert_eq!(workspace.document(&id).unwrap().content, "abc");
    assert_eq!(workspace.edit_state(&id), EditState::Clean);
    assert_eq!(harness.events.names(), vec!["document-content-changed"]);

    let stored = harness.storage.load(&DOCUMENTS).unwrap().unwrap();
    assert!(stored.iter().any(|doc| doc.id == id && doc.content == "abc"));
}

#[test]
fn pending_write_lands_on_the_document_it_was_made_for() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let first = workspace.active_id().unwrap().to_string();
    let first_body = workspace.document(&first).unwrap().content.clone();
    let second = workspace.create_document().id;

    assert!(workspace.edit_document(&first, "background", millis(0)));
    assert_eq!(workspace.active_id(), Some(second.as_str()));
    assert_eq!(workspace.flush_due(millis(1_000)), 1);

    assert_eq!(workspace.document(&first).unwrap().content, "background");
    assert_ne!(workspace.document(&second).unwrap().content, "background");
    assert_ne!(first_body, "background");
}

#[test]
fn edits_for_unknown_documents_are_ignored() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    assert!(!workspace.edit_document("ghost", "text", millis(0)));
    assert_eq!(workspace.flush_all(), 0);
    assert_eq!(workspace.edit_state("ghost"), EditState::Clean);
}

#[test]
fn deleting_a_document_drops_its_pending_write() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let id = workspace.create_document().id;
    workspace.edit("doomed", millis(0));

    workspace.delete_document(&id);
    assert_eq!(workspace.flush_all(), 0);
}

#[test]
fn closing_the_session_writes_pending_edits() {
    let harness = Harness::new();
    let id = {
        let mut workspace = harness.open();
        let id = workspace.active_id().unwrap().to_string();
        workspace.edit("unsaved", millis(0));
        id
    };

    let workspace = harness.open();
    assert_eq!(workspace.document(&id).unwrap().content, "unsaved");
}

#[test]
fn reload_keeps_pending_writes() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let id = workspace.active_id().unwrap().to_string();
    workspace.edit("still here", millis(0));

    workspace.reload();
    assert_eq!(workspace.edit_state(&id), EditState::Editing);
    assert_eq!(workspace.flush_all(), 1);
    assert_eq!(workspace.document(&id).unwrap().content, "still here");
}

#[test]
fn cursor_is_remembered_for_one_document() {
    let harness = Harness::new();
    let mut workspace = harness.open();
    let first = workspace.active_id().unwrap().to_string();
    let second = workspace.create_document().id;

    assert!(workspace.save_cursor(&first, 42));
    let cursor = workspace.cursor_for(&first).unwrap();
    assert_eq!(cursor.position, 42);
    assert_eq!(cursor.timestamp, start().timestamp_millis());
    assert!(workspace.cursor_for(&second).is_none());

    workspace.save_cursor(&second, 7);
    assert!(workspace.cursor_for(&first).is_none());

    assert!(workspace.clear_cursor());
    assert!(workspace.cursor_for(&second).is_none());
}

#[test]
fn scroll_is_clamped_and_filtered_by_document() {
    let harness = Harness::new();
    let workspace = harness.open();
    let id = workspace.active_id().unwrap().to_string();

    assert!(workspace.save_scroll(&id, 1.7));
    assert_eq!(workspace.scroll_for(&id).unwrap().scroll_percentage, 1.0);
    workspace.save_scroll(&id, -0.2);
    assert_eq!(workspace.scroll_for(&id).unwrap().scroll_percentage, 0.0);
    workspace.save_scroll(&id, 0.25);
    assert_eq!(workspace.scroll_for(&id).unwrap().scroll_percentage, 0.25);
    assert!(workspace.scroll_for("other").is_none());
}

#[test]
fn unreadable_cursor_is_treated_as_absent() {
    let harness = Harness::new();
    let workspace = harness.open();
    let id = workspace.active_id().unwrap().to_string();
    harness.storage.corrupt("lastCursorPosition", "{\"documentId\":");
    assert!(workspace.cursor_for(&id).is_none());
}
